use rayon::prelude::*;
use voxcraft_blocks::BlockTypeId;
use voxcraft_geom::{IVec3, Vec3};

use crate::config::WorldConfig;
use crate::grid::{Terrain, VoxelGrid};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaycastQuery {
    /// Camera position in world space.
    pub origin: Vec3,
    pub direction: Vec3,
    pub max_distance: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetBlock {
    pub cell: IVec3,
    pub block: BlockTypeId,
}

/// Where a held block would go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Cell(IVec3),
    CantSet,
}

impl Placement {
    #[inline]
    pub fn cell(self) -> Option<IVec3> {
        match self {
            Placement::Cell(c) => Some(c),
            Placement::CantSet => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RaycastResult {
    pub selected: Option<TargetBlock>,
    pub placement: Placement,
}

impl RaycastResult {
    pub const MISS: RaycastResult = RaycastResult {
        selected: None,
        placement: Placement::CantSet,
    };

    /// Targeted block id, `AIR` on a miss.
    #[inline]
    pub fn selected_block(&self) -> BlockTypeId {
        self.selected.map_or(BlockTypeId::AIR, |t| t.block)
    }

    /// Cell the selection frame should outline, if any.
    #[inline]
    pub fn frame_cell(&self) -> Option<IVec3> {
        self.selected.map(|t| t.cell)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RaySample {
    cell: Option<IVec3>,
    block: BlockTypeId,
}

/// Fixed-step ray marcher over the solid grid.
///
/// The ray is sampled `max_distance * accuracy` times at `1/accuracy` spacing,
/// finer than one cell so thin geometry cannot be skipped.
#[derive(Clone, Copy, Debug)]
pub struct Raycaster {
    accuracy: u32,
}

impl Raycaster {
    pub fn new(accuracy: u32) -> Self {
        Self {
            accuracy: accuracy.max(1),
        }
    }

    pub fn from_config(cfg: &WorldConfig) -> Self {
        Self::new(cfg.player.ray_accuracy)
    }

    #[inline]
    pub fn step(&self) -> f32 {
        1.0 / self.accuracy as f32
    }

    #[inline]
    pub fn sample_count(&self, max_distance: f32) -> usize {
        (max_distance.max(0.0) * self.accuracy as f32).round() as usize
    }

    pub fn cast(&self, terrain: &Terrain, q: &RaycastQuery) -> RaycastResult {
        let origin = terrain.world_to_grid(q.origin);
        self.cast_grid(&terrain.solid, origin, q.direction, q.max_distance)
    }

    /// Marches in grid space. Samples outside the grid read as air.
    pub fn cast_grid(
        &self,
        grid: &VoxelGrid,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
    ) -> RaycastResult {
        let dir = direction.normalized();
        if dir.length() < 1e-6 {
            return RaycastResult::MISS;
        }
        let n = self.sample_count(max_distance);
        let accuracy = self.accuracy as f32;
        let samples: Vec<RaySample> = (0..n)
            .into_par_iter()
            .map(|i| {
                let p = origin + dir * (i as f32 / accuracy);
                let c = p.floor_cell();
                match grid.try_get(c) {
                    Some(block) => RaySample {
                        cell: Some(c),
                        block,
                    },
                    None => RaySample {
                        cell: None,
                        block: BlockTypeId::AIR,
                    },
                }
            })
            .collect();
        resolve(&samples)
    }
}

fn resolve(samples: &[RaySample]) -> RaycastResult {
    let Some(hit) = samples.iter().position(|s| !s.block.is_air()) else {
        return RaycastResult::MISS;
    };
    let s = samples[hit];
    let Some(cell) = s.cell else {
        return RaycastResult::MISS;
    };
    let placement = match hit.checked_sub(1).map(|i| samples[i]) {
        Some(RaySample {
            cell: Some(prev),
            block,
        }) if block.is_air() && prev != cell => Placement::Cell(prev),
        _ => Placement::CantSet,
    };
    RaycastResult {
        selected: Some(TargetBlock {
            cell,
            block: s.block,
        }),
        placement,
    }
}
