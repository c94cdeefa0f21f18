use voxcraft_blocks::{BlockTypeId, DigSound};
use voxcraft_geom::Vec3;

/// Height above the broken cell's floor at which the drop appears.
pub const ITEM_SPAWN_OFFSET_Y: f32 = 0.7;

/// Side effects of a committed edit, handed back to the frame loop.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    PlaySound(DigSound),
    SpawnItem(ItemSpawn),
}

/// A dropped block waiting to become an item entity.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemSpawn {
    pub block: BlockTypeId,
    /// World space.
    pub pos: Vec3,
    pub impulse: Vec3,
    /// Per-face textures in `[side, side, side, side, top, bottom]` order.
    pub textures: [BlockTypeId; 6],
}

impl ItemSpawn {
    /// Drop for a block broken at world-space cell corner `corner`.
    /// Each impulse component is 0 or 1.
    pub fn at_cell(block: BlockTypeId, corner: Vec3, rng: &mut fastrand::Rng) -> Self {
        let impulse = Vec3::new(
            rng.u8(0..2) as f32,
            rng.u8(0..2) as f32,
            rng.u8(0..2) as f32,
        );
        Self {
            block,
            pos: corner + Vec3::new(0.0, ITEM_SPAWN_OFFSET_Y, 0.0),
            impulse,
            textures: block.face_textures(),
        }
    }
}

/// `None` for silent blocks.
pub fn sound_effect(sound: DigSound) -> Option<Effect> {
    match sound {
        DigSound::None => None,
        s => Some(Effect::PlaySound(s)),
    }
}
