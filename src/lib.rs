// Library crate for the roomwatch room observer
// This file exposes the public API for host adapters and integration tests

pub mod config;
pub mod event;
pub mod host;
pub mod logging;
pub mod report;
pub mod shared;
pub mod watcher;

// Re-export commonly used types for easier access in host adapters and tests
pub use config::WatcherConfig;
pub use event::{EventFeed, EventSubscription, RoomEvent, RoomEventError, RoomEventHandler};
pub use host::{
    CosmeticCatalog, CosmeticsResolver, InMemoryCosmeticCatalog, LocalPlayer, Participant,
    RoomInfo, RoomProvider,
};
pub use report::{FileReportSink, Record, ReportSink, WebhookSink};
pub use shared::WatchError;
pub use watcher::{start_tick_task, RoomSession, RoomWatcher, PRESENCE_PROPERTY};
