use thiserror::Error;

/// Errors surfaced by host calls, report sinks, and configuration loading.
///
/// Every step of the tick pipeline returns one of these; the orchestrating
/// loop logs the failure and moves on rather than propagating it to the
/// host.
#[derive(Error, Debug)]
pub enum WatchError {
    #[error("Host error: {0}")]
    Host(String),

    #[error("Cosmetics lookup failed for {0}")]
    Cosmetics(String),

    #[error("File output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Webhook error: {0}")]
    Http(String),

    #[error("Config error: {0}")]
    Config(String),
}
