use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A remote user in the current room, as reported by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// Stable identifier assigned by the networking layer.
    pub user_id: String,
    /// Display name; not unique and not stable.
    pub display_name: String,
    /// Arbitrary key/value state the participant has published.
    #[serde(default)]
    pub custom_properties: BTreeMap<String, serde_json::Value>,
}

impl Participant {
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            custom_properties: BTreeMap::new(),
        }
    }

    /// Builder-style helper for attaching a custom property.
    pub fn with_property(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.custom_properties.insert(key.into(), value);
        self
    }
}

/// The room the local client currently occupies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomInfo {
    pub name: String,
    /// Total occupants, local client included.
    pub occupant_count: usize,
}
