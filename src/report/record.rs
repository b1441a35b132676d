use chrono::Local;
use std::collections::BTreeMap;

use crate::host::Participant;

/// A formatted report for one participant.
///
/// Immutable once built; the watcher builds at most one per participant per
/// room session and hands the same record to every enabled sink.
#[derive(Debug, Clone)]
pub struct Record {
    pub room_name: String,
    pub user_id: String,
    pub display_name: String,
    /// The full report text delivered to sinks.
    pub body: String,
}

impl Record {
    /// Builds the report for a participant, stamped with the current local
    /// time.
    pub fn build(room_name: &str, participant: &Participant, cosmetics: &str) -> Self {
        let timestamp = Local::now().format("%A, %B %-d, %Y %-I:%M:%S %p");

        let body = format!(
            "Name:\n{}\n\nUser ID:\n{}\n\nTime Found:\n{}\n\n\nCustom Properties:\n{}\n\nCosmetics:\n{}",
            participant.display_name,
            participant.user_id,
            timestamp,
            serialize_properties(&participant.custom_properties),
            cosmetics
        );

        Self {
            room_name: room_name.to_string(),
            user_id: participant.user_id.clone(),
            display_name: participant.display_name.clone(),
            body,
        }
    }
}

/// One `key: value` line per entry, in the map's iteration order.
fn serialize_properties(properties: &BTreeMap<String, serde_json::Value>) -> String {
    if properties.is_empty() {
        return "No Custom Properties.".to_string();
    }

    properties
        .iter()
        .map(|(key, value)| format!("{}: {}", key, render_value(value)))
        .collect::<Vec<_>>()
        .join("\n")
}

// Strings render bare (no JSON quoting); everything else uses the compact
// JSON rendering, which gives lowercase booleans and plain numbers.
fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
