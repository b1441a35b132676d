use serde::{Deserialize, Serialize};

/// Room-membership facts delivered by the host adapter.
///
/// Events describe things that have already happened; handlers react to
/// them without being coupled to the engine's callback mechanics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RoomEvent {
    /// The local client entered a room.
    RoomJoined { room_name: String },

    /// The local client left the room (or fell back to single player).
    RoomLeft,

    /// A remote participant entered the current room.
    ParticipantJoined {
        user_id: String,
        display_name: String,
    },

    /// A remote participant left the current room.
    ParticipantLeft { user_id: String },
}

impl RoomEvent {
    /// Get a human-readable description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            RoomEvent::RoomJoined { .. } => "room_joined",
            RoomEvent::RoomLeft => "room_left",
            RoomEvent::ParticipantJoined { .. } => "participant_joined",
            RoomEvent::ParticipantLeft { .. } => "participant_left",
        }
    }
}
