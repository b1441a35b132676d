use tokio::sync::broadcast;
use tracing::debug;

use super::events::RoomEvent;

const FEED_CAPACITY: usize = 64;

/// Broadcast feed of room-membership events.
///
/// The host adapter owns one of these and emits into it from its engine
/// callbacks; any number of handlers can subscribe. The local client is in
/// at most one room at a time, so a single channel covers everything.
#[derive(Debug, Clone)]
pub struct EventFeed {
    sender: broadcast::Sender<RoomEvent>,
}

impl EventFeed {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(FEED_CAPACITY);
        Self { sender }
    }

    /// Emits an event to all current subscribers.
    pub fn emit(&self, event: RoomEvent) {
        match self.sender.send(event) {
            Ok(receiver_count) => {
                debug!(receivers = receiver_count, "Room event emitted");
            }
            Err(_) => {
                debug!("Room event emitted with no receivers");
            }
        }
    }

    /// Subscribe to the feed; events emitted before this call are not seen.
    pub fn subscribe(&self) -> broadcast::Receiver<RoomEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventFeed {
    fn default() -> Self {
        Self::new()
    }
}
