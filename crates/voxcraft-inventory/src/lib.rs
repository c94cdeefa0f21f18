//! Slot storage for the hotbar, main inventory and creative palettes.
//!
//! Every container is a view over one [`SlotStore`]. The first nine slots of
//! each view address the same hotbar array, so a change made through any view
//! is seen by all of them. Slot numbers in the public API are 1-based.
#![forbid(unsafe_code)]

pub mod drag;
pub mod palette;
pub mod stack;
pub mod store;

pub use drag::{DragState, DropTarget};
pub use stack::{ItemStack, SlotFlags};
pub use store::{ContainerView, HOTBAR_SLOTS, SlotStore};
pub use voxcraft_blocks::types::STACK_MAX;
