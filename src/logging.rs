use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the tracing subscriber for hosts that don't bring their own.
///
/// Honors `RUST_LOG` when set; otherwise defaults to debug-level output for
/// this crate only, which keeps host/engine noise out of the log.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roomwatch=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
