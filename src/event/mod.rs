// Room-membership event plumbing
//
// The host adapter pushes membership changes into an EventFeed; an
// EventSubscription routes them to a RoomEventHandler on a background
// task. The watcher core only ever sees the handler trait, never the
// engine's callback machinery.

pub use events::RoomEvent;
pub use feed::EventFeed;
pub use handler::{RoomEventError, RoomEventHandler};
pub use subscription::EventSubscription;

mod events;
mod feed;
mod handler;
mod subscription;
