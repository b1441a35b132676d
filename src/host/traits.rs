use async_trait::async_trait;

use super::models::{Participant, RoomInfo};
use crate::shared::WatchError;

/// Room membership and participant enumeration, as seen by the host's
/// networking layer.
#[async_trait]
pub trait RoomProvider: Send + Sync {
    /// The room the local client is in right now, or `None` outside one.
    async fn current_room(&self) -> Result<Option<RoomInfo>, WatchError>;

    /// All remote participants in the current room. Enumeration order is
    /// whatever the host reports; callers must not rely on it.
    async fn remote_participants(&self) -> Result<Vec<Participant>, WatchError>;
}

/// Per-participant cosmetic allowance lookup.
///
/// The returned string is opaque (delimiter-joined item tokens owned by the
/// host); the watcher only ever substring-matches catalog names against it.
#[async_trait]
pub trait CosmeticsResolver: Send + Sync {
    async fn cosmetics_allowance(&self, user_id: &str) -> Result<String, WatchError>;
}

/// Mutation of the local player's published custom properties. Used once at
/// startup to flag this tool's presence to peers.
#[async_trait]
pub trait LocalPlayer: Send + Sync {
    async fn set_custom_property(
        &self,
        key: &str,
        value: serde_json::Value,
    ) -> Result<(), WatchError>;
}
