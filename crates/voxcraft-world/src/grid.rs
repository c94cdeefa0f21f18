use voxcraft_blocks::BlockTypeId;
use voxcraft_geom::{IVec3, Vec3};

use crate::config::WorldConfig;

/// Dense `size × height × size` grid of block ids, indexed `x + y*size + z*size*height`.
#[derive(Clone, Debug)]
pub struct VoxelGrid {
    size: i32,
    height: i32,
    cells: Vec<BlockTypeId>,
}

impl VoxelGrid {
    pub fn new(size: i32, height: i32) -> Self {
        assert!(size > 0 && height > 0, "grid dimensions must be positive");
        let len = size as usize * height as usize * size as usize;
        Self {
            size,
            height,
            cells: vec![BlockTypeId::AIR; len],
        }
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn dims(&self) -> IVec3 {
        IVec3::new(self.size, self.height, self.size)
    }

    #[inline]
    pub fn contains(&self, p: IVec3) -> bool {
        p.x >= 0 && p.y >= 0 && p.z >= 0 && p.x < self.size && p.y < self.height && p.z < self.size
    }

    #[inline]
    fn idx(&self, p: IVec3) -> usize {
        let (s, h) = (self.size as usize, self.height as usize);
        p.x as usize + p.y as usize * s + p.z as usize * s * h
    }

    /// Panics when `p` lies outside the grid; callers clamp first.
    #[inline]
    pub fn get(&self, p: IVec3) -> BlockTypeId {
        assert!(self.contains(p), "grid read out of bounds at {:?}", p);
        self.cells[self.idx(p)]
    }

    #[inline]
    pub fn try_get(&self, p: IVec3) -> Option<BlockTypeId> {
        if self.contains(p) {
            Some(self.cells[self.idx(p)])
        } else {
            None
        }
    }

    /// Writes `id` and returns the previous occupant. Panics when out of bounds.
    #[inline]
    pub fn set(&mut self, p: IVec3, id: BlockTypeId) -> BlockTypeId {
        assert!(self.contains(p), "grid write out of bounds at {:?}", p);
        let i = self.idx(p);
        std::mem::replace(&mut self.cells[i], id)
    }

    /// Treats cells outside the grid as air.
    #[inline]
    pub fn is_air(&self, p: IVec3) -> bool {
        self.try_get(p).is_none_or(BlockTypeId::is_air)
    }

    /// Fills one horizontal layer.
    pub fn fill_layer(&mut self, y: i32, id: BlockTypeId) {
        if y < 0 || y >= self.height {
            return;
        }
        for z in 0..self.size {
            let start = self.idx(IVec3::new(0, y, z));
            self.cells[start..start + self.size as usize].fill(id);
        }
    }

    pub fn count_non_air(&self) -> usize {
        self.cells.iter().filter(|b| !b.is_air()).count()
    }
}

/// Solid terrain plus the parallel grid of fluids the player passes through.
#[derive(Clone, Debug)]
pub struct Terrain {
    pub solid: VoxelGrid,
    pub through: VoxelGrid,
    half_size: i32,
}

impl Terrain {
    pub fn new(cfg: &WorldConfig) -> Self {
        let (size, height) = (cfg.world.size, cfg.world.height);
        log::info!(target: "config", "allocating {}x{}x{} terrain", size, height, size);
        Self {
            solid: VoxelGrid::new(size, height),
            through: VoxelGrid::new(size, height),
            half_size: cfg.half_size(),
        }
    }

    #[inline]
    pub fn half_size(&self) -> i32 {
        self.half_size
    }

    /// World position to grid space; X and Z shift by the half size.
    #[inline]
    pub fn world_to_grid(&self, p: Vec3) -> Vec3 {
        let h = self.half_size as f32;
        Vec3::new(p.x + h, p.y, p.z + h)
    }

    #[inline]
    pub fn world_to_cell(&self, p: Vec3) -> IVec3 {
        self.world_to_grid(p).floor_cell()
    }

    /// Minimum corner of a grid cell in world space.
    #[inline]
    pub fn cell_to_world(&self, c: IVec3) -> Vec3 {
        let h = self.half_size as f32;
        Vec3::new(c.x as f32 - h, c.y as f32, c.z as f32 - h)
    }

    #[inline]
    pub fn contains(&self, c: IVec3) -> bool {
        self.solid.contains(c)
    }

    /// Block visible at `c`, solid grid first.
    pub fn block_at(&self, c: IVec3) -> BlockTypeId {
        match self.solid.get(c) {
            BlockTypeId::AIR => self.through.get(c),
            b => b,
        }
    }

    /// Single-cell mutation. Fluids go to the through grid, other ids to the
    /// solid grid; `AIR` clears whichever grid is occupied. Returns the previous id.
    pub fn update_cell(&mut self, c: IVec3, id: BlockTypeId) -> BlockTypeId {
        if id.is_air() {
            let prev = self.solid.set(c, BlockTypeId::AIR);
            if !prev.is_air() {
                return prev;
            }
            return self.through.set(c, BlockTypeId::AIR);
        }
        if id.is_through() {
            if !self.solid.get(c).is_air() {
                // fluid cannot share a cell with terrain
                return self.solid.get(c);
            }
            return self.through.set(c, id);
        }
        let prev = self.solid.set(c, id);
        let fluid = self.through.set(c, BlockTypeId::AIR);
        if prev.is_air() { fluid } else { prev }
    }
}
