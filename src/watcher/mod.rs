// RoomWatcher core
//
// Owns the per-room session state and runs the periodic scan: enumerate
// remote participants, resolve cosmetics, report each participant once per
// room session.

pub use room_watcher::{RoomWatcher, PRESENCE_PROPERTY};
pub use session::RoomSession;
pub use tick_task::start_tick_task;

mod room_watcher;
mod session;
mod tick_task;
