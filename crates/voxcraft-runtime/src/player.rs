use voxcraft_blocks::BlockTypeId;
use voxcraft_geom::{Aabb, IVec3, Vec3};
use voxcraft_world::{
    HitboxHandle, HitboxRegistry, RaycastQuery, RaycastResult, TargetBlock, Terrain, WorldConfig,
};

use crate::input::KeyState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreakProgress {
    pub target: TargetBlock,
    pub progress: u32,
}

#[derive(Debug)]
pub struct Player {
    /// Feet position in world space (x,z at center).
    pub pos: Vec3,
    /// Unit view direction.
    pub look: Vec3,
    pub size: Vec3,
    pub eye_height: f32,
    pub reach: f32,
    pub hitbox: HitboxHandle,
    break_speed: u32,
    durability: u32,
    place_repeat_frames: u64,
    breaking: Option<BreakProgress>,
    last_set_frame: Option<u64>,
}

impl Player {
    /// Creates the player and registers its hitbox.
    pub fn new(cfg: &WorldConfig, pos: Vec3, hitboxes: &mut HitboxRegistry) -> Self {
        let size = cfg.player_size();
        let hitbox = hitboxes.register(pos, size);
        Self {
            pos,
            look: Vec3::new(0.0, 0.0, 1.0),
            size,
            eye_height: cfg.player.eye_height,
            reach: cfg.player.reach,
            hitbox,
            break_speed: cfg.player.break_speed,
            durability: cfg.player.durability,
            place_repeat_frames: u64::from(cfg.player.place_repeat_frames),
            breaking: None,
            last_set_frame: None,
        }
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        self.pos + Vec3::new(0.0, self.eye_height, 0.0)
    }

    /// World-space body box.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_feet(self.pos, self.size)
    }

    pub fn ray_query(&self) -> RaycastQuery {
        RaycastQuery {
            origin: self.eye(),
            direction: self.look,
            max_distance: self.reach,
        }
    }

    pub fn break_progress(&self) -> Option<BreakProgress> {
        self.breaking
    }

    /// True when grid cell `cell` overlaps the player's body.
    pub fn occupies_cell(&self, terrain: &Terrain, cell: IVec3) -> bool {
        Aabb::from_feet(terrain.world_to_grid(self.pos), self.size).overlaps_cell(cell)
    }

    /// Advances break progress for this frame. Returns the block to break
    /// once accumulated progress reaches the block's durability.
    pub fn attack(&mut self, key: KeyState, target: Option<TargetBlock>) -> Option<TargetBlock> {
        if !key.is_down() {
            self.breaking = None;
            return None;
        }
        match (self.breaking, target) {
            (None, Some(t)) => {
                self.breaking = Some(BreakProgress {
                    target: t,
                    progress: 0,
                });
                None
            }
            (Some(mut b), Some(t)) if b.target == t => {
                b.progress += self.break_speed;
                if b.progress >= self.durability {
                    self.breaking = None;
                    return Some(t);
                }
                self.breaking = Some(b);
                None
            }
            _ => {
                self.breaking = None;
                None
            }
        }
    }

    /// Cell to place into this frame, if the use key and the world allow it.
    /// Holding the key repeats only after `place_repeat_frames` frames.
    pub fn use_target(
        &mut self,
        key: KeyState,
        frame: u64,
        hit: &RaycastResult,
        terrain: &Terrain,
        holding: BlockTypeId,
    ) -> Option<IVec3> {
        let ready = match key {
            KeyState::Pressed => true,
            KeyState::Held => self
                .last_set_frame
                .is_none_or(|last| frame.saturating_sub(last) > self.place_repeat_frames),
            KeyState::Idle | KeyState::Released => false,
        };
        if !ready || holding.is_air() {
            return None;
        }
        let cell = hit.placement.cell()?;
        if self.occupies_cell(terrain, cell) {
            return None;
        }
        Some(cell)
    }

    /// Starts the hold-to-repeat cooldown once a set has been accepted.
    #[inline]
    pub fn set_accepted(&mut self, frame: u64) {
        self.last_set_frame = Some(frame);
    }
}
