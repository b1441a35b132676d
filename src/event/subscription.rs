use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::{feed::EventFeed, handler::RoomEventHandler};

/// Connects a handler to the event feed and routes events to it.
pub struct EventSubscription {
    handler: Arc<dyn RoomEventHandler>,
    feed: EventFeed,
}

impl EventSubscription {
    pub fn new(handler: Arc<dyn RoomEventHandler>, feed: EventFeed) -> Self {
        Self { handler, feed }
    }

    /// Start the subscription - spawns a background task that listens to
    /// the feed and routes events to the handler. Handler failures are
    /// logged and do not stop the routing loop.
    pub fn start(self) -> JoinHandle<()> {
        let handler_name = self.handler.handler_name();

        info!(handler = handler_name, "Starting room event subscription");

        let mut receiver = self.feed.subscribe();

        tokio::spawn(async move {
            while let Ok(event) = receiver.recv().await {
                info!(
                    handler = handler_name,
                    event = event.event_type(),
                    "Received room event"
                );

                if let Err(e) = self.handler.handle_room_event(event).await {
                    warn!(
                        handler = handler_name,
                        error = %e,
                        "Room event handler failed"
                    );
                }
            }

            warn!(
                handler = handler_name,
                "Room event subscription ended - no more events"
            );
        })
    }
}
