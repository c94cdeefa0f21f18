use rayon::prelude::*;
use voxcraft_blocks::{BlockCatalog, BlockTypeId, TextureAtlas};
use voxcraft_geom::IVec3;
use voxcraft_world::{Terrain, ViewWindow, WorldConfig};

use crate::face::Face;
use crate::mesh_build::{MeshBuffer, MeshCounts};
use crate::source_mesh::SourceMeshTable;

/// Which grid a pass reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshPass {
    Solid,
    Through,
}

/// Runs one closure per Z slab and returns the results in slab order.
///
/// A dispatch completes before returning; implementations decide how the
/// slabs are spread over threads.
pub trait SlabExecutor {
    fn map_slabs(&self, zs: std::ops::Range<i32>, f: &(dyn Fn(i32) -> MeshBuffer + Sync)) -> Vec<MeshBuffer>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SerialExecutor;

impl SlabExecutor for SerialExecutor {
    fn map_slabs(&self, zs: std::ops::Range<i32>, f: &(dyn Fn(i32) -> MeshBuffer + Sync)) -> Vec<MeshBuffer> {
        zs.map(f).collect()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RayonExecutor;

impl SlabExecutor for RayonExecutor {
    fn map_slabs(&self, zs: std::ops::Range<i32>, f: &(dyn Fn(i32) -> MeshBuffer + Sync)) -> Vec<MeshBuffer> {
        zs.into_par_iter().map(f).collect()
    }
}

/// Upper bound on output size for a window, used to size and check buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeshCapacity {
    pub vertices: usize,
    pub indices: usize,
}

impl MeshCapacity {
    pub fn for_window(window: &ViewWindow, table: &SourceMeshTable) -> Self {
        let vertices = window.cell_count() * table.max_vertices_per_block();
        Self {
            vertices,
            indices: vertices / 4 * 6,
        }
    }

    #[inline]
    pub fn fits(&self, counts: MeshCounts) -> bool {
        counts.vertices <= self.vertices && counts.indices <= self.indices
    }
}

/// Face-culling mesher over a view window of the terrain.
pub struct Mesher<'a> {
    pub table: &'a SourceMeshTable,
    pub catalog: &'a BlockCatalog,
    pub atlas: TextureAtlas,
}

impl<'a> Mesher<'a> {
    pub fn new(table: &'a SourceMeshTable, catalog: &'a BlockCatalog, atlas: TextureAtlas) -> Self {
        Self {
            table,
            catalog,
            atlas,
        }
    }

    /// True when the face of `c` toward `n` is visible for this pass.
    #[inline]
    fn face_visible(terrain: &Terrain, pass: MeshPass, id: BlockTypeId, n: IVec3) -> bool {
        match pass {
            MeshPass::Solid => terrain.solid.is_air(n),
            MeshPass::Through => {
                terrain.solid.is_air(n) && terrain.through.try_get(n) != Some(id)
            }
        }
    }

    /// Emits every visible face of one cell into `out`.
    pub fn emit_cell(&self, terrain: &Terrain, pass: MeshPass, c: IVec3, out: &mut MeshBuffer) {
        let grid = match pass {
            MeshPass::Solid => &terrain.solid,
            MeshPass::Through => &terrain.through,
        };
        let id = grid.get(c);
        if id.is_air() {
            return;
        }
        let entry = self.table.entry(self.catalog.shape(id));
        let origin = terrain.cell_to_world(c);
        for face in Face::ALL {
            let (dx, dy, dz) = face.delta();
            if !Self::face_visible(terrain, pass, id, c.offset(dx, dy, dz)) {
                continue;
            }
            let tile = self.atlas.uv_rect(id.texture_for(face.role()));
            let range = entry.face(face);
            for q in range.start..range.start + range.count {
                let src = self.table.quad_vertices(q);
                let src_uv = self.table.quad_uvs(q);
                let verts: [_; 4] = core::array::from_fn(|i| src[i] + origin);
                let uvs: [(f32, f32); 4] =
                    core::array::from_fn(|i| tile.lerp(src_uv[i][0], src_uv[i][1]));
                out.push_quad(&verts, &uvs, self.table.quad_triangles(q), q as u32 * 4);
            }
        }
    }

    /// Meshes one window. Returns `None` for a zero-width window.
    pub fn mesh_window(
        &self,
        terrain: &Terrain,
        window: &ViewWindow,
        pass: MeshPass,
        exec: &dyn SlabExecutor,
    ) -> Option<MeshBuffer> {
        if window.is_empty() {
            return None;
        }
        let (o, p) = (window.origin, window.opposite);
        let slab = |z: i32| {
            let mut out = MeshBuffer::new();
            for y in o.y..p.y {
                for x in o.x..p.x {
                    self.emit_cell(terrain, pass, IVec3::new(x, y, z), &mut out);
                }
            }
            out
        };
        let slabs = exec.map_slabs(o.z..p.z, &slab);
        let mut counts = MeshCounts::default();
        for s in &slabs {
            counts.add(s.counts());
        }
        let mut mesh = MeshBuffer::new();
        mesh.reserve_quads(counts.faces);
        for s in &slabs {
            mesh.append(s);
        }
        let cap = MeshCapacity::for_window(window, self.table);
        debug_assert!(cap.fits(mesh.counts()));
        log::debug!(
            target: "mesh",
            "{:?} pass over {:?}: faces={} verts={} idx={} (cap {} verts)",
            pass,
            window.extent(),
            counts.faces,
            counts.vertices,
            counts.indices,
            cap.vertices
        );
        Some(mesh)
    }
}

/// Solid and through meshes for the current view window.
pub struct WorldMesh {
    pub table: SourceMeshTable,
    pub solid: MeshBuffer,
    pub through: MeshBuffer,
    pub window: Option<ViewWindow>,
    atlas: TextureAtlas,
}

impl WorldMesh {
    pub fn new(cfg: &WorldConfig) -> Self {
        Self {
            table: SourceMeshTable::build(),
            solid: MeshBuffer::new(),
            through: MeshBuffer::new(),
            window: None,
            atlas: cfg.atlas(),
        }
    }

    /// Rebuilds both meshes (solid first) for `window`.
    /// A zero-width window leaves the previous meshes in place and returns false.
    pub fn rebuild(
        &mut self,
        terrain: &Terrain,
        catalog: &BlockCatalog,
        window: ViewWindow,
        exec: &dyn SlabExecutor,
    ) -> bool {
        let mesher = Mesher::new(&self.table, catalog, self.atlas);
        let Some(solid) = mesher.mesh_window(terrain, &window, MeshPass::Solid, exec) else {
            log::debug!(target: "mesh", "window {:?} is empty; keeping previous mesh", window);
            return false;
        };
        let through = mesher
            .mesh_window(terrain, &window, MeshPass::Through, exec)
            .unwrap_or_default();
        self.solid = solid;
        self.through = through;
        self.window = Some(window);
        true
    }

    pub fn counts(&self) -> (MeshCounts, MeshCounts) {
        (self.solid.counts(), self.through.counts())
    }
}
