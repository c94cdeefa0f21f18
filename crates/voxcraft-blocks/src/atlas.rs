use crate::types::BlockTypeId;

/// Sub-rectangle of the atlas in normalized texture coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UvRect {
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
}

impl UvRect {
    /// Maps a tile-local coordinate in `[0,1]²` into the atlas.
    #[inline]
    pub fn lerp(&self, u: f32, v: f32) -> (f32, f32) {
        (
            self.u0 + (self.u1 - self.u0) * u,
            self.v0 + (self.v1 - self.v0) * v,
        )
    }
}

/// Block atlas with one square tile per `BlockTypeId`, laid out row-major from the top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextureAtlas {
    pub width: u32,
    pub height: u32,
    pub tile: u32,
}

impl Default for TextureAtlas {
    fn default() -> Self {
        Self {
            width: 80,
            height: 208,
            tile: 16,
        }
    }
}

impl TextureAtlas {
    #[inline]
    pub fn columns(&self) -> u32 {
        (self.width / self.tile.max(1)).max(1)
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        (self.height / self.tile.max(1)).max(1)
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.columns() * self.rows()
    }

    /// True when every block id has its own tile.
    #[inline]
    pub fn covers_all_blocks(&self) -> bool {
        self.capacity() as usize >= BlockTypeId::ALL.len()
    }

    /// Tile `(column, row)` with row 0 at the bottom of the texture.
    /// Indices beyond the atlas fall back to tile 0.
    pub fn tile_of(&self, tex: BlockTypeId) -> (u32, u32) {
        let mut idx = tex.id() as u32;
        if idx >= self.capacity() {
            idx = 0;
        }
        let col = idx % self.columns();
        let row = (self.rows() - 1) - idx / self.columns();
        (col, row)
    }

    pub fn uv_rect(&self, tex: BlockTypeId) -> UvRect {
        let (col, row) = self.tile_of(tex);
        let w = self.width.max(1) as f32;
        let h = self.height.max(1) as f32;
        let t = self.tile as f32;
        let u0 = col as f32 * t / w;
        let v0 = row as f32 * t / h;
        UvRect {
            u0,
            v0,
            u1: u0 + t / w,
            v1: v0 + t / h,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tile_is_top_left() {
        let a = TextureAtlas::default();
        assert_eq!(a.columns(), 5);
        assert_eq!(a.rows(), 13);
        assert_eq!(a.tile_of(BlockTypeId::AIR), (0, 12));
        assert_eq!(a.tile_of(BlockTypeId::DIRT), (2, 12));
        assert_eq!(a.tile_of(BlockTypeId::GRASS_BOTTOM), (0, 11));
    }

    #[test]
    fn every_block_fits_default_atlas() {
        let a = TextureAtlas::default();
        assert!(a.covers_all_blocks());
        for b in BlockTypeId::ALL {
            let r = a.uv_rect(*b);
            assert!(r.u0 >= 0.0 && r.u1 <= 1.0 + 1e-6);
            assert!(r.v0 >= 0.0 && r.v1 <= 1.0 + 1e-6);
            assert!(r.u1 > r.u0 && r.v1 > r.v0);
        }
    }

    #[test]
    fn small_atlas_falls_back_to_placeholder() {
        let a = TextureAtlas {
            width: 32,
            height: 32,
            tile: 16,
        };
        assert!(!a.covers_all_blocks());
        assert_eq!(a.tile_of(BlockTypeId::STONE), a.tile_of(BlockTypeId::AIR));
    }
}
