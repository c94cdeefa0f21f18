//! Dropped block items: spawned by breaks, despawned by age or pickup.
use voxcraft_blocks::BlockTypeId;
use voxcraft_geom::{Aabb, IVec3, Vec3};
use voxcraft_inventory::{ContainerView, SlotStore};
use voxcraft_world::{HitboxHandle, HitboxRegistry, Terrain, WorldConfig};

use crate::effects::ItemSpawn;

const GRAVITY: f32 = 9.8;
const DRAG: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

#[derive(Clone, Debug)]
pub struct ItemEntity {
    pub id: ItemId,
    pub block: BlockTypeId,
    /// Bottom-center in world space.
    pub pos: Vec3,
    pub velocity: Vec3,
    pub textures: [BlockTypeId; 6],
    pub age: f32,
    pub hitbox: HitboxHandle,
    /// Resting on terrain. Cleared when the cell below turns to air.
    pub settled: bool,
}

/// Live item entities and their pickup hitboxes.
#[derive(Debug)]
pub struct ItemEntities {
    items: Vec<ItemEntity>,
    next: u32,
    lifetime: f32,
    pickup_size: Vec3,
}

impl ItemEntities {
    pub fn new(lifetime_secs: f32, pickup_size: Vec3) -> Self {
        Self {
            items: Vec::new(),
            next: 1,
            lifetime: lifetime_secs,
            pickup_size,
        }
    }

    pub fn from_config(cfg: &WorldConfig) -> Self {
        Self::new(cfg.items.lifetime_secs, cfg.pickup_size())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemEntity> {
        self.items.iter()
    }

    pub fn get(&self, id: ItemId) -> Option<&ItemEntity> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn spawn(&mut self, spawn: &ItemSpawn, hitboxes: &mut HitboxRegistry) -> ItemId {
        let id = ItemId(self.next);
        self.next = self.next.wrapping_add(1).max(1);
        let hitbox = hitboxes.register(spawn.pos, self.pickup_size);
        self.items.push(ItemEntity {
            id,
            block: spawn.block,
            pos: spawn.pos,
            velocity: spawn.impulse,
            textures: spawn.textures,
            age: 0.0,
            hitbox,
            settled: false,
        });
        log::debug!(target: "edit", "item {:?} spawned ({:?}) at {:?}", id, spawn.block, spawn.pos);
        id
    }

    /// Advances motion and age by `dt` seconds. Expired items are removed and
    /// their ids returned.
    pub fn tick(&mut self, dt: f32, terrain: &Terrain, hitboxes: &mut HitboxRegistry) -> Vec<ItemId> {
        let mut expired = Vec::new();
        let lifetime = self.lifetime;
        self.items.retain_mut(|item| {
            item.age += dt;
            if item.age >= lifetime {
                hitboxes.unregister(item.hitbox);
                expired.push(item.id);
                return false;
            }
            if item.settled && !has_floor(item, terrain) {
                item.settled = false;
            }
            if !item.settled {
                step_motion(item, dt, terrain);
                hitboxes.update_pos(item.hitbox, item.pos);
            }
            true
        });
        for id in &expired {
            log::debug!(target: "edit", "item {:?} expired", id);
        }
        expired
    }

    /// Moves every item overlapping `player` into the inventory. Items the
    /// inventory cannot take stay in the world.
    pub fn pickup(
        &mut self,
        player: &Aabb,
        store: &mut SlotStore,
        view: ContainerView,
        hitboxes: &mut HitboxRegistry,
    ) -> Vec<BlockTypeId> {
        let mut taken = Vec::new();
        self.items.retain(|item| {
            let touching = hitboxes
                .aabb(item.hitbox)
                .is_some_and(|b| b.intersects(player));
            if touching && store.add_content(view, item.block) {
                hitboxes.unregister(item.hitbox);
                taken.push(item.block);
                return false;
            }
            true
        });
        taken
    }

    /// Removes every item and its hitbox.
    pub fn clear(&mut self, hitboxes: &mut HitboxRegistry) {
        for item in self.items.drain(..) {
            hitboxes.unregister(item.hitbox);
        }
    }
}

/// True when the cell directly under a resting item can hold it.
fn has_floor(item: &ItemEntity, terrain: &Terrain) -> bool {
    let below = terrain.world_to_cell(Vec3::new(item.pos.x, item.pos.y - 0.5, item.pos.z));
    below.y < 0 || (terrain.contains(below) && !terrain.solid.get(below).is_air())
}

fn step_motion(item: &mut ItemEntity, dt: f32, terrain: &Terrain) {
    let damp = (1.0 - DRAG * dt).max(0.0);
    item.velocity.x *= damp;
    item.velocity.z *= damp;
    item.velocity.y -= GRAVITY * dt;
    let next = item.pos + item.velocity * dt;
    if item.velocity.y <= 0.0 {
        // scan the column the item falls through so large steps cannot tunnel
        let top = terrain.world_to_cell(Vec3::new(next.x, item.pos.y, next.z));
        let bottom = (next.y.floor() as i32).max(-1);
        for y in (bottom..=top.y).rev() {
            let c = IVec3::new(top.x, y, top.z);
            let floor = y < 0 || (terrain.contains(c) && !terrain.solid.get(c).is_air());
            if floor {
                item.pos = Vec3::new(next.x, (y + 1).max(0) as f32, next.z);
                item.velocity = Vec3::ZERO;
                item.settled = true;
                return;
            }
        }
    }
    item.pos = next;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_at(pos: Vec3) -> ItemSpawn {
        ItemSpawn {
            block: BlockTypeId::DIRT,
            pos,
            impulse: Vec3::ZERO,
            textures: BlockTypeId::DIRT.face_textures(),
        }
    }

    #[test]
    fn spawn_registers_hitbox() {
        let mut hb = HitboxRegistry::new();
        let mut items = ItemEntities::new(30.0, Vec3::new(0.25, 0.25, 0.25));
        let id = items.spawn(&spawn_at(Vec3::new(0.0, 5.0, 0.0)), &mut hb);
        assert_eq!(id, ItemId(1));
        assert_eq!(hb.len(), 1);
        let e = items.get(id).unwrap();
        assert!(hb.aabb(e.hitbox).is_some());
    }

    #[test]
    fn clear_unregisters() {
        let mut hb = HitboxRegistry::new();
        let mut items = ItemEntities::new(30.0, Vec3::ONE);
        items.spawn(&spawn_at(Vec3::ZERO), &mut hb);
        items.spawn(&spawn_at(Vec3::ZERO), &mut hb);
        items.clear(&mut hb);
        assert!(items.is_empty());
        assert!(hb.is_empty());
    }
}
