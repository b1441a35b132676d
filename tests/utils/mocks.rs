use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use roomwatch::{
    CosmeticsResolver, LocalPlayer, Participant, Record, ReportSink, RoomInfo, RoomProvider,
    WatchError,
};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Scriptable room state standing in for the host's networking layer.
#[derive(Clone)]
pub struct MockRoomProvider {
    room: Arc<RwLock<Option<RoomInfo>>>,
    participants: Arc<RwLock<Vec<Participant>>>,
}

impl MockRoomProvider {
    pub fn new() -> Self {
        Self {
            room: Arc::new(RwLock::new(None)),
            participants: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn set_room(&self, name: &str, occupant_count: usize) {
        *self.room.write().await = Some(RoomInfo {
            name: name.to_string(),
            occupant_count,
        });
    }

    pub async fn leave_room(&self) {
        *self.room.write().await = None;
        self.participants.write().await.clear();
    }

    pub async fn set_participants(&self, participants: Vec<Participant>) {
        *self.participants.write().await = participants;
    }
}

#[async_trait]
impl RoomProvider for MockRoomProvider {
    async fn current_room(&self) -> Result<Option<RoomInfo>, WatchError> {
        Ok(self.room.read().await.clone())
    }

    async fn remote_participants(&self) -> Result<Vec<Participant>, WatchError> {
        Ok(self.participants.read().await.clone())
    }
}

/// Allowance lookup with scriptable per-participant results and failures.
#[derive(Clone)]
pub struct MockCosmeticsResolver {
    allowances: Arc<RwLock<HashMap<String, String>>>,
    failing: Arc<RwLock<HashSet<String>>>,
}

impl MockCosmeticsResolver {
    pub fn new() -> Self {
        Self {
            allowances: Arc::new(RwLock::new(HashMap::new())),
            failing: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    pub async fn set_allowance(&self, user_id: &str, allowance: &str) {
        self.allowances
            .write()
            .await
            .insert(user_id.to_string(), allowance.to_string());
    }

    /// Makes lookups for this participant fail until `resolve_for` is called.
    pub async fn fail_for(&self, user_id: &str) {
        self.failing.write().await.insert(user_id.to_string());
    }

    pub async fn resolve_for(&self, user_id: &str, allowance: &str) {
        self.failing.write().await.remove(user_id);
        self.set_allowance(user_id, allowance).await;
    }
}

#[async_trait]
impl CosmeticsResolver for MockCosmeticsResolver {
    async fn cosmetics_allowance(&self, user_id: &str) -> Result<String, WatchError> {
        if self.failing.read().await.contains(user_id) {
            return Err(WatchError::Cosmetics(user_id.to_string()));
        }

        Ok(self
            .allowances
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// Records local-player property mutations.
#[derive(Clone)]
pub struct MockLocalPlayer {
    properties: Arc<RwLock<Vec<(String, serde_json::Value)>>>,
}

impl MockLocalPlayer {
    pub fn new() -> Self {
        Self {
            properties: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn properties_set(&self) -> Vec<(String, serde_json::Value)> {
        self.properties.read().await.clone()
    }
}

#[async_trait]
impl LocalPlayer for MockLocalPlayer {
    async fn set_custom_property(
        &self,
        key: &str,
        value: serde_json::Value,
    ) -> Result<(), WatchError> {
        self.properties
            .write()
            .await
            .push((key.to_string(), value));
        Ok(())
    }
}

/// Captures delivered records instead of writing or POSTing anything.
#[derive(Clone)]
pub struct RecordingSink {
    delivered: Arc<RwLock<Vec<Record>>>,
    fail: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            delivered: Arc::new(RwLock::new(Vec::new())),
            fail: false,
        }
    }

    /// A sink whose every delivery fails, for error-path tests.
    pub fn failing() -> Self {
        Self {
            delivered: Arc::new(RwLock::new(Vec::new())),
            fail: true,
        }
    }

    pub async fn delivered(&self) -> Vec<Record> {
        self.delivered.read().await.clone()
    }

    pub async fn delivered_for(&self, user_id: &str) -> Vec<Record> {
        self.delivered
            .read()
            .await
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ReportSink for RecordingSink {
    async fn deliver(&self, record: &Record) -> Result<(), WatchError> {
        if self.fail {
            return Err(WatchError::Http("recording sink set to fail".to_string()));
        }

        self.delivered.write().await.push(record.clone());
        Ok(())
    }

    fn sink_name(&self) -> &'static str {
        "RecordingSink"
    }
}
