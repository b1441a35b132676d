// Host collaborator seams
//
// Everything the watcher needs from the surrounding game client is behind
// these traits: room membership, participant enumeration, the cosmetics
// allowance lookup, the known-item catalog, and the local player's custom
// properties. A host adapter implements them; the core never touches an
// engine API directly.

pub use catalog::{CosmeticCatalog, InMemoryCosmeticCatalog};
pub use models::{Participant, RoomInfo};
pub use traits::{CosmeticsResolver, LocalPlayer, RoomProvider};

mod catalog;
mod models;
mod traits;
