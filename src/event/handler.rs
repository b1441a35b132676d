use async_trait::async_trait;
use thiserror::Error;

use super::events::RoomEvent;

/// Errors that can occur when handling room events
#[derive(Debug, Error)]
pub enum RoomEventError {
    #[error("Host unavailable: {0}")]
    HostUnavailable(String),

    #[error("Handler error: {0}")]
    HandlerError(String),
}

/// Trait for components that react to room-membership events.
///
/// This provides a clean interface for reacting to room lifecycle changes
/// without being tied to a specific engine's callback registration.
#[async_trait]
pub trait RoomEventHandler: Send + Sync {
    /// Handle a room event
    ///
    /// The handler should process the event, update any session state it
    /// owns, and return `Ok(())` on success or `RoomEventError` on failure.
    async fn handle_room_event(&self, event: RoomEvent) -> Result<(), RoomEventError>;

    /// Get a human-readable name for this handler (for logging/debugging)
    fn handler_name(&self) -> &'static str;
}
