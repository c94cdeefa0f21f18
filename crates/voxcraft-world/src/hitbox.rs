use rayon::prelude::*;
use voxcraft_blocks::BlockTypeId;
use voxcraft_geom::{Aabb, IVec3, Vec3};

use crate::grid::Terrain;

/// Weak handle to a registered box. Handles start at 1 and are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HitboxHandle(pub u32);

#[derive(Clone, Copy, Debug)]
struct Entry {
    handle: HitboxHandle,
    /// Bottom-center in world space.
    pos: Vec3,
    size: Vec3,
    hit: BlockTypeId,
}

/// Axis-aligned boxes tested every frame against the through grid.
#[derive(Debug)]
pub struct HitboxRegistry {
    entries: Vec<Entry>,
    next: u32,
}

impl Default for HitboxRegistry {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next: 1,
        }
    }
}

impl HitboxRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, pos: Vec3, size: Vec3) -> HitboxHandle {
        let handle = HitboxHandle(self.next);
        self.next = self.next.wrapping_add(1).max(1);
        self.entries.push(Entry {
            handle,
            pos,
            size,
            hit: BlockTypeId::AIR,
        });
        log::debug!(target: "hitbox", "register {:?} at {:?} size {:?}", handle, pos, size);
        handle
    }

    /// Returns false when the handle is not registered.
    pub fn update_pos(&mut self, handle: HitboxHandle, pos: Vec3) -> bool {
        match self.entries.iter_mut().find(|e| e.handle == handle) {
            Some(e) => {
                e.pos = pos;
                true
            }
            None => false,
        }
    }

    pub fn unregister(&mut self, handle: HitboxHandle) -> bool {
        let Some(i) = self.entries.iter().position(|e| e.handle == handle) else {
            return false;
        };
        self.entries.remove(i);
        log::debug!(target: "hitbox", "unregister {:?}", handle);
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// World-space box for a handle.
    pub fn aabb(&self, handle: HitboxHandle) -> Option<Aabb> {
        self.entries
            .iter()
            .find(|e| e.handle == handle)
            .map(|e| Aabb::from_feet(e.pos, e.size))
    }

    /// Result of the last pass for `handle`; `AIR` when nothing overlaps.
    pub fn hit_block(&self, handle: HitboxHandle) -> Option<BlockTypeId> {
        self.entries
            .iter()
            .find(|e| e.handle == handle)
            .map(|e| e.hit)
    }

    /// Recomputes every box's overlapping through-grid block.
    pub fn run_pass(&mut self, terrain: &Terrain) {
        self.entries.par_iter_mut().for_each(|e| {
            e.hit = first_through_block(terrain, e.pos, e.size);
        });
    }
}

fn first_through_block(terrain: &Terrain, pos: Vec3, size: Vec3) -> BlockTypeId {
    let b = Aabb::from_feet(terrain.world_to_grid(pos), size);
    let (lo, hi) = b.cell_range();
    for y in lo.y..=hi.y {
        for z in lo.z..=hi.z {
            for x in lo.x..=hi.x {
                let c = IVec3::new(x, y, z);
                match terrain.through.try_get(c) {
                    Some(id) if !id.is_air() => return id,
                    _ => {}
                }
            }
        }
    }
    BlockTypeId::AIR
}
