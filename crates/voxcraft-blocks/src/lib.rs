//! Block ids, per-block lookup tables, texture atlas and block catalog.
#![forbid(unsafe_code)]

pub mod atlas;
pub mod catalog;
pub mod sound;
pub mod types;

pub use atlas::{TextureAtlas, UvRect};
pub use catalog::BlockCatalog;
pub use sound::DigSound;
pub use types::{BlockTypeId, FaceRole, Shape};
