use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::shared::WatchError;

const DEFAULT_TICK_INTERVAL_SECS: u64 = 9;

/// Runtime configuration, loaded once at startup.
///
/// Values come from an optional `roomwatch.toml` next to the process,
/// overlaid with `ROOMWATCH__`-prefixed environment variables
/// (e.g. `ROOMWATCH__WEBHOOK_URL`). A missing file yields pure defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatcherConfig {
    /// Webhook endpoint reports are POSTed to; empty disables the call.
    #[serde(default)]
    pub webhook_url: String,

    /// Write one report file per participant under `output_dir`.
    #[serde(default = "default_true")]
    pub save_to_file: bool,

    /// Deliver each report to `webhook_url`.
    #[serde(default = "default_true")]
    pub send_webhook: bool,

    /// Base folder for report files; one subfolder per room.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Seconds between room scans.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_secs: u64,
}

fn default_true() -> bool {
    true
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("roomwatch")
}

fn default_tick_interval() -> u64 {
    DEFAULT_TICK_INTERVAL_SECS
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            save_to_file: true,
            send_webhook: true,
            output_dir: default_output_dir(),
            tick_interval_secs: default_tick_interval(),
        }
    }
}

impl WatcherConfig {
    /// Loads configuration from the given file (or `roomwatch.toml` in the
    /// working directory when `None`), with environment overrides applied
    /// on top.
    pub fn load(path: Option<&Path>) -> Result<Self, WatchError> {
        let file_source = match path {
            Some(p) => File::from(p).required(false),
            None => File::with_name("roomwatch").required(false),
        };

        let loaded = Config::builder()
            .add_source(file_source)
            .add_source(Environment::with_prefix("ROOMWATCH").separator("__"))
            .build()
            .map_err(|e| WatchError::Config(e.to_string()))?
            .try_deserialize::<Self>()
            .map_err(|e| WatchError::Config(e.to_string()))?;

        info!(
            save_to_file = loaded.save_to_file,
            send_webhook = loaded.send_webhook,
            webhook_configured = !loaded.webhook_url.is_empty(),
            tick_interval_secs = loaded.tick_interval_secs,
            "Configuration loaded"
        );

        Ok(loaded)
    }

    /// Writes a default config file at `path` if none exists, so users have
    /// something to edit. Best-effort; an unwritable location is logged and
    /// ignored.
    pub fn save_default(path: &Path) {
        if path.exists() {
            return;
        }

        let rendered = match toml::to_string_pretty(&Self::default()) {
            Ok(rendered) => rendered,
            Err(e) => {
                warn!(error = %e, "Failed to render default config");
                return;
            }
        };

        if let Err(e) = std::fs::write(path, rendered) {
            warn!(path = %path.display(), error = %e, "Failed to write default config");
        }
    }

    /// The tick cadence as a [`Duration`].
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_secs)
    }
}
