//! Block placement and breaking requests, their effects, and dropped items.
#![forbid(unsafe_code)]

pub mod admin;
pub mod behavior;
pub mod effects;
pub mod items;

pub use admin::{BlockAdmin, BlockAdminStats, EditError, PendingBreak, PendingSet};
pub use behavior::Behavior;
pub use effects::{Effect, ItemSpawn};
pub use items::{ItemEntities, ItemEntity, ItemId};
