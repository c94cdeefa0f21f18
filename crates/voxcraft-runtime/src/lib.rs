//! Frame coordinator tying grids, meshing, edits and inventory together.
#![forbid(unsafe_code)]

pub mod event;
pub mod input;
pub mod player;
pub mod world;

pub use event::{Event, EventEnvelope, EventLog};
pub use input::{FrameInput, KeyState};
pub use player::{BreakProgress, Player};
pub use world::{FrameReport, RuntimeOptions, World};
