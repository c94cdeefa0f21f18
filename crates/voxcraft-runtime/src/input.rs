use voxcraft_geom::Vec3;

/// Edge-aware key state sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Idle,
    /// Went down this frame.
    Pressed,
    Held,
    /// Went up this frame.
    Released,
}

impl KeyState {
    #[inline]
    pub fn is_down(self) -> bool {
        matches!(self, KeyState::Pressed | KeyState::Held)
    }

    /// State for the next frame if the key is still in the same physical position.
    #[inline]
    pub fn settle(self) -> KeyState {
        match self {
            KeyState::Pressed | KeyState::Held => KeyState::Held,
            KeyState::Released | KeyState::Idle => KeyState::Idle,
        }
    }
}

/// Everything the player did during one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameInput {
    pub attack: KeyState,
    pub use_key: KeyState,
    /// New view direction; need not be normalized.
    pub look: Option<Vec3>,
    /// Teleport the player's feet to this world position.
    pub move_to: Option<Vec3>,
    /// Hotbar slot 1..=9.
    pub select: Option<usize>,
    pub scroll: i32,
    /// Drop-key on the selected slot; `true` drops the whole stack.
    pub drop: Option<bool>,
    /// Seconds since the previous frame.
    pub dt: f32,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            attack: KeyState::Idle,
            use_key: KeyState::Idle,
            look: None,
            move_to: None,
            select: None,
            scroll: 0,
            drop: None,
            dt: 1.0 / 60.0,
        }
    }
}
