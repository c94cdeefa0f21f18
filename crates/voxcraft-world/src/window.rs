use voxcraft_geom::IVec3;

use crate::config::WorldConfig;

/// Half-open box of grid cells `[origin, opposite)` kept current around the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewWindow {
    pub origin: IVec3,
    pub opposite: IVec3,
}

impl ViewWindow {
    /// Window of `view_radius` cells around `center`, clamped to the grid.
    pub fn around(center: IVec3, cfg: &WorldConfig) -> Self {
        let r = cfg.view_radius();
        let dims = IVec3::new(cfg.world.size, cfg.world.height, cfg.world.size);
        Self::clamped(center, r, dims)
    }

    pub fn clamped(center: IVec3, radius: i32, dims: IVec3) -> Self {
        let lo = |c: i32, d: i32| (c - radius).clamp(0, d);
        let hi = |c: i32, d: i32| (c + radius).clamp(0, d);
        Self {
            origin: IVec3::new(lo(center.x, dims.x), lo(center.y, dims.y), lo(center.z, dims.z)),
            opposite: IVec3::new(hi(center.x, dims.x), hi(center.y, dims.y), hi(center.z, dims.z)),
        }
    }

    #[inline]
    pub fn extent(&self) -> IVec3 {
        IVec3::new(
            (self.opposite.x - self.origin.x).max(0),
            (self.opposite.y - self.origin.y).max(0),
            (self.opposite.z - self.origin.z).max(0),
        )
    }

    /// True when any axis has zero width; mesh passes are skipped for such windows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        let e = self.extent();
        e.x == 0 || e.y == 0 || e.z == 0
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        let e = self.extent();
        e.x as usize * e.y as usize * e.z as usize
    }

    #[inline]
    pub fn contains(&self, c: IVec3) -> bool {
        c.x >= self.origin.x
            && c.y >= self.origin.y
            && c.z >= self.origin.z
            && c.x < self.opposite.x
            && c.y < self.opposite.y
            && c.z < self.opposite.z
    }
}
