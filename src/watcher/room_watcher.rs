use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

use super::session::RoomSession;
use crate::config::WatcherConfig;
use crate::event::{RoomEvent, RoomEventError, RoomEventHandler};
use crate::host::{CosmeticCatalog, CosmeticsResolver, LocalPlayer, Participant, RoomProvider};
use crate::report::{FileReportSink, Record, ReportSink, WebhookSink};
use crate::shared::WatchError;

/// Custom-property key set on the local player to flag this tool to peers.
pub const PRESENCE_PROPERTY: &str = "roomwatch";

/// Watches the current room and reports each remote participant's known
/// cosmetics at most once per room session.
///
/// Driven from the outside: a timer calls [`on_tick`](Self::on_tick) on a
/// fixed cadence, and the host adapter routes membership changes in through
/// the [`RoomEventHandler`] impl. Neither path ever propagates an error
/// back to the host.
pub struct RoomWatcher {
    room_provider: Arc<dyn RoomProvider>,
    cosmetics: Arc<dyn CosmeticsResolver>,
    catalog: Arc<dyn CosmeticCatalog>,
    local_player: Arc<dyn LocalPlayer>,
    file_sink: Option<Arc<dyn ReportSink>>,
    webhook_sink: Option<Arc<dyn ReportSink>>,
    // Touched from the tick task and the event subscription task; never
    // held across an await.
    session: Mutex<Option<RoomSession>>,
}

impl RoomWatcher {
    /// Builds a watcher with the standard sinks, enabled per `config`.
    pub fn new(
        config: &WatcherConfig,
        room_provider: Arc<dyn RoomProvider>,
        cosmetics: Arc<dyn CosmeticsResolver>,
        catalog: Arc<dyn CosmeticCatalog>,
        local_player: Arc<dyn LocalPlayer>,
    ) -> Self {
        let file_sink = config
            .save_to_file
            .then(|| Arc::new(FileReportSink::new(&config.output_dir)) as Arc<dyn ReportSink>);
        let webhook_sink = config
            .send_webhook
            .then(|| Arc::new(WebhookSink::new(&config.webhook_url)) as Arc<dyn ReportSink>);

        Self::with_sinks(
            room_provider,
            cosmetics,
            catalog,
            local_player,
            file_sink,
            webhook_sink,
        )
    }

    /// Builds a watcher with explicit sinks; `None` disables that output.
    pub fn with_sinks(
        room_provider: Arc<dyn RoomProvider>,
        cosmetics: Arc<dyn CosmeticsResolver>,
        catalog: Arc<dyn CosmeticCatalog>,
        local_player: Arc<dyn LocalPlayer>,
        file_sink: Option<Arc<dyn ReportSink>>,
        webhook_sink: Option<Arc<dyn ReportSink>>,
    ) -> Self {
        Self {
            room_provider,
            cosmetics,
            catalog,
            local_player,
            file_sink,
            webhook_sink,
            session: Mutex::new(None),
        }
    }

    /// One scan of the current room. Failures are logged and skipped; this
    /// never errors out and never panics.
    pub async fn on_tick(&self) {
        if let Err(e) = self.run_tick().await {
            warn!(error = %e, "Room scan skipped");
        }
    }

    async fn run_tick(&self) -> Result<(), WatchError> {
        let Some(room) = self.room_provider.current_room().await? else {
            self.discard_session();
            return Ok(());
        };

        // Alone in the room: nothing to report, and everyone previously
        // seen becomes eligible again.
        if room.occupant_count <= 1 {
            self.clear_processed();
            return Ok(());
        }

        self.ensure_session(&room.name);

        let participants = self.room_provider.remote_participants().await?;
        for participant in &participants {
            if self.is_processed(&participant.user_id) {
                continue;
            }
            self.process_participant(&room.name, participant).await;
        }

        Ok(())
    }

    /// Handles one not-yet-reported participant. Leaves the participant
    /// unprocessed (retried next tick) unless cosmetics resolved non-empty.
    async fn process_participant(&self, room_name: &str, participant: &Participant) {
        let allowance = match self
            .cosmetics
            .cosmetics_allowance(&participant.user_id)
            .await
        {
            Ok(allowance) => allowance,
            Err(e) => {
                debug!(
                    participant = %participant.user_id,
                    error = %e,
                    "Cosmetics not resolvable yet, retrying next scan"
                );
                return;
            }
        };

        let matched = matched_cosmetics(&self.catalog.item_names(), &allowance);
        if matched.is_empty() {
            debug!(
                participant = %participant.user_id,
                "No known cosmetics, leaving participant eligible"
            );
            return;
        }

        let record = Record::build(room_name, participant, &matched.join("\n"));

        for sink in [&self.file_sink, &self.webhook_sink].into_iter().flatten() {
            if let Err(e) = sink.deliver(&record).await {
                warn!(
                    sink = sink.sink_name(),
                    participant = %participant.user_id,
                    error = %e,
                    "Report delivery failed"
                );
            }
        }

        // Sink failures do not veto the dedupe: one attempt per session.
        self.mark_processed(&participant.user_id);

        info!(
            room = %room_name,
            participant = %participant.user_id,
            display_name = %participant.display_name,
            cosmetics = matched.len(),
            "Participant reported"
        );
    }

    /// Flags this tool's presence to peers via a local-player custom
    /// property. Called once at startup; best-effort, no retry.
    pub async fn announce_presence(&self) {
        if let Err(e) = self
            .local_player
            .set_custom_property(PRESENCE_PROPERTY, serde_json::Value::Bool(true))
            .await
        {
            warn!(error = %e, "Failed to announce presence to peers");
        }
    }

    fn ensure_session(&self, room_name: &str) {
        let mut session = self.session.lock().unwrap();
        let stale = !matches!(session.as_ref(), Some(s) if s.room_name() == room_name);
        if stale {
            info!(room = %room_name, "Starting room session");
            *session = Some(RoomSession::new(room_name));
        }
    }

    fn discard_session(&self) {
        if self.session.lock().unwrap().take().is_some() {
            info!("Room session discarded");
        }
    }

    fn clear_processed(&self) {
        if let Some(session) = self.session.lock().unwrap().as_mut() {
            session.clear_processed();
        }
    }

    fn is_processed(&self, user_id: &str) -> bool {
        self.session
            .lock()
            .unwrap()
            .as_ref()
            .is_some_and(|s| s.is_processed(user_id))
    }

    fn mark_processed(&self, user_id: &str) {
        if let Some(session) = self.session.lock().unwrap().as_mut() {
            session.mark_processed(user_id);
        }
    }
}

#[async_trait]
impl RoomEventHandler for RoomWatcher {
    async fn handle_room_event(&self, event: RoomEvent) -> Result<(), RoomEventError> {
        match event {
            RoomEvent::RoomLeft => {
                self.discard_session();
                Ok(())
            }
            // Reserved hooks: joins are picked up by the next scan.
            RoomEvent::RoomJoined { room_name } => {
                debug!(room = %room_name, "Joined room");
                Ok(())
            }
            RoomEvent::ParticipantJoined { user_id, .. } => {
                debug!(participant = %user_id, "Participant joined");
                Ok(())
            }
            RoomEvent::ParticipantLeft { user_id } => {
                debug!(participant = %user_id, "Participant left");
                Ok(())
            }
        }
    }

    fn handler_name(&self) -> &'static str {
        "RoomWatcher"
    }
}

/// Catalog items whose names occur in the allowance string, in catalog
/// order. The allowance format is opaque, so matching is plain substring
/// containment.
fn matched_cosmetics(catalog_items: &[String], allowance: &str) -> Vec<String> {
    catalog_items
        .iter()
        .filter(|item| allowance.contains(item.as_str()))
        .cloned()
        .collect()
}
