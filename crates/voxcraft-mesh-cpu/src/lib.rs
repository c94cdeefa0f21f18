//! CPU meshing crate: source mesh table, face-culling window mesher and buffers.
#![forbid(unsafe_code)]

pub mod face;
pub mod mesh_build;
pub mod mesher;
pub mod source_mesh;

pub use face::Face;
pub use mesh_build::{MeshBuffer, MeshCounts};
pub use mesher::{
    MeshCapacity, MeshPass, Mesher, RayonExecutor, SerialExecutor, SlabExecutor, WorldMesh,
};
pub use source_mesh::{FaceRange, ShapeEntry, SourceMeshTable};
