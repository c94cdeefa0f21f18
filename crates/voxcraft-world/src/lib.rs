//! World storage: dense block grids, configuration, view windows, raycast and hitbox passes.
#![forbid(unsafe_code)]

pub mod config;
pub mod flat;
pub mod grid;
pub mod hitbox;
pub mod raycast;
pub mod window;

pub use config::{ConfigError, WorldConfig};
pub use flat::{flat_surface_y, generate_flat};
pub use grid::{Terrain, VoxelGrid};
pub use hitbox::{HitboxHandle, HitboxRegistry};
pub use raycast::{Placement, RaycastQuery, RaycastResult, Raycaster, TargetBlock};
pub use window::ViewWindow;
