use async_trait::async_trait;

use super::record::Record;
use crate::shared::WatchError;

/// A destination for finished reports.
///
/// Delivery is best-effort: the watcher logs a failed `deliver` and keeps
/// going, and the participant still counts as processed.
#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn deliver(&self, record: &Record) -> Result<(), WatchError>;

    /// Get a human-readable name for this sink (for logging/debugging)
    fn sink_name(&self) -> &'static str;
}
