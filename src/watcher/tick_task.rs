use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::info;

use super::room_watcher::RoomWatcher;

/// Drives the watcher on a fixed cadence for the lifetime of the process.
///
/// Hosts with their own frame/update loop can skip this and call
/// [`RoomWatcher::on_tick`] themselves.
pub async fn start_tick_task(watcher: Arc<RoomWatcher>, tick_interval: Duration) {
    info!(
        tick_interval_secs = tick_interval.as_secs(),
        "Starting room watch task"
    );

    let mut tick = interval(tick_interval);

    loop {
        tick.tick().await;
        watcher.on_tick().await;
    }
}
