use std::collections::HashSet;

/// State scoped to one stay in one room: the room's name and the set of
/// participants already reported there.
///
/// Created when the watcher first sees the room, discarded when the local
/// client leaves it. Never persisted; a process restart forgets everything.
#[derive(Debug)]
pub struct RoomSession {
    room_name: String,
    processed: HashSet<String>,
}

impl RoomSession {
    pub fn new(room_name: impl Into<String>) -> Self {
        Self {
            room_name: room_name.into(),
            processed: HashSet::new(),
        }
    }

    pub fn room_name(&self) -> &str {
        &self.room_name
    }

    pub fn is_processed(&self, user_id: &str) -> bool {
        self.processed.contains(user_id)
    }

    pub fn mark_processed(&mut self, user_id: impl Into<String>) {
        self.processed.insert(user_id.into());
    }

    /// Forgets every processed participant; they become eligible for
    /// reporting again. The session itself stays alive.
    pub fn clear_processed(&mut self) {
        self.processed.clear();
    }

    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }
}
