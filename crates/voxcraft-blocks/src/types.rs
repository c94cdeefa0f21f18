use serde::Deserialize;

macro_rules! block_ids {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Terrain variant stored in every grid cell. `AIR` (0) is empty.
        #[repr(u8)]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[allow(non_camel_case_types)]
        pub enum BlockTypeId {
            #[default]
            $($variant),+
        }

        impl BlockTypeId {
            /// Every id in ascending numeric order.
            pub const ALL: &'static [BlockTypeId] = &[$(BlockTypeId::$variant),+];

            /// Lowercase key, used for sprite paths and catalog files.
            pub const fn name(self) -> &'static str {
                match self {
                    $(BlockTypeId::$variant => $name),+
                }
            }
        }
    };
}

block_ids! {
    AIR => "air",
    BEDROCK => "bedrock",
    DIRT => "dirt",
    GRASS_TOP => "grass_top",
    GRASS_SIDE => "grass_side",
    GRASS_BOTTOM => "grass_bottom",
    WATER => "water",
    LAVA => "lava",
    OBSIDIAN => "obsidian",
    STONE => "stone",
    COBBLESTONE => "cobblestone",
    STONE_ANDESITE => "stone_andesite",
    STONE_DIORITE => "stone_diorite",
    STONE_GRANITE => "stone_granite",
    COAL_ORE => "coal_ore",
    IRON_ORE => "iron_ore",
    GOLD_ORE => "gold_ore",
    DIAMOND_ORE => "diamond_ore",
    EMERALD_ORE => "emerald_ore",
    LAPIS_ORE => "lapis_ore",
    LEAVES => "leaves",
    LOG_OAK_TOP => "log_oak_top",
    LOG_OAK => "log_oak",
    LOG_OAK_BOTTOM => "log_oak_bottom",
    PLANKS_OAK => "planks_oak",
    PLANKS_BIRCH => "planks_birch",
    LOG_BIRCH_TOP => "log_birch_top",
    LOG_BIRCH => "log_birch",
    LOG_BIRCH_BOTTOM => "log_birch_bottom",
    GRAVEL => "gravel",
    HARDENED_CLAY => "hardened_clay",
    HARDENED_CLAY_STAINED_BLACK => "hardened_clay_stained_black",
    HARDENED_CLAY_STAINED_BLUE => "hardened_clay_stained_blue",
    HARDENED_CLAY_STAINED_BROWN => "hardened_clay_stained_brown",
    HARDENED_CLAY_STAINED_CYAN => "hardened_clay_stained_cyan",
    HARDENED_CLAY_STAINED_GRAY => "hardened_clay_stained_gray",
    HARDENED_CLAY_STAINED_GREEN => "hardened_clay_stained_green",
    HARDENED_CLAY_STAINED_LIGHT_BLUE => "hardened_clay_stained_light_blue",
    HARDENED_CLAY_STAINED_LIME => "hardened_clay_stained_lime",
    HARDENED_CLAY_STAINED_MAGENTA => "hardened_clay_stained_magenta",
    HARDENED_CLAY_STAINED_ORANGE => "hardened_clay_stained_orange",
    HARDENED_CLAY_STAINED_PINK => "hardened_clay_stained_pink",
    HARDENED_CLAY_STAINED_PURPLE => "hardened_clay_stained_purple",
    HARDENED_CLAY_STAINED_RED => "hardened_clay_stained_red",
    HARDENED_CLAY_STAINED_SILVER => "hardened_clay_stained_silver",
    HARDENED_CLAY_STAINED_WHITE => "hardened_clay_stained_white",
    HARDENED_CLAY_STAINED_YELLOW => "hardened_clay_stained_yellow",
    WOOL_COLORED_BLUE => "wool_colored_blue",
    WOOL_COLORED_BROWN => "wool_colored_brown",
    WOOL_COLORED_CYAN => "wool_colored_cyan",
    WOOL_COLORED_GRAY => "wool_colored_gray",
    WOOL_COLORED_GREEN => "wool_colored_green",
    WOOL_COLORED_LIGHT_BLUE => "wool_colored_light_blue",
    WOOL_COLORED_LIME => "wool_colored_lime",
    WOOL_COLORED_MAGENTA => "wool_colored_magenta",
    WOOL_COLORED_ORANGE => "wool_colored_orange",
    WOOL_COLORED_PINK => "wool_colored_pink",
    WOOL_COLORED_PURPLE => "wool_colored_purple",
    WOOL_COLORED_RED => "wool_colored_red",
    WOOL_COLORED_SILVER => "wool_colored_silver",
    WOOL_COLORED_WHITE => "wool_colored_white",
    WOOL_COLORED_YELLOW => "wool_colored_yellow",
}

pub const SPRITE_ROOT: &str = "Textures/blocks";
pub const SPRITE_NULL: &str = "Textures/null_content";

/// Maximum amount a single slot can hold.
pub const STACK_MAX: u32 = 64;

impl BlockTypeId {
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn from_id(id: u8) -> Option<BlockTypeId> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn from_name(name: &str) -> Option<BlockTypeId> {
        Self::ALL.iter().copied().find(|b| b.name() == name)
    }

    #[inline]
    pub const fn is_air(self) -> bool {
        matches!(self, BlockTypeId::AIR)
    }

    /// Fluids live in the through grid; everything else is solid terrain.
    #[inline]
    pub const fn is_through(self) -> bool {
        matches!(self, BlockTypeId::WATER | BlockTypeId::LAVA)
    }

    /// Ids a player may hold and place. Technical ids are excluded.
    #[inline]
    pub const fn is_placeable(self) -> bool {
        !matches!(
            self,
            BlockTypeId::AIR
                | BlockTypeId::BEDROCK
                | BlockTypeId::GRASS_SIDE
                | BlockTypeId::GRASS_BOTTOM
        )
    }

    /// Hook for items that cannot stack. Every block stacks for now.
    #[inline]
    pub const fn is_stackable(self) -> bool {
        true
    }

    /// Sprite path below `root` for this id.
    pub fn sprite_path_in(self, root: &str) -> String {
        let key = match self {
            BlockTypeId::AIR => return SPRITE_NULL.to_string(),
            BlockTypeId::GRASS_BOTTOM => BlockTypeId::DIRT.name(),
            BlockTypeId::LOG_OAK_BOTTOM => BlockTypeId::LOG_OAK_TOP.name(),
            BlockTypeId::LOG_BIRCH_BOTTOM => BlockTypeId::LOG_BIRCH_TOP.name(),
            other => other.name(),
        };
        format!("{root}/{key}")
    }

    #[inline]
    pub fn sprite_path(self) -> String {
        self.sprite_path_in(SPRITE_ROOT)
    }

    /// Per-face textures in `[front, back, left, right, top, bottom]` order.
    pub fn face_textures(self) -> [BlockTypeId; 6] {
        use BlockTypeId as B;
        let (side, top, bottom) = match self {
            B::GRASS_TOP => (B::GRASS_SIDE, B::GRASS_TOP, B::GRASS_BOTTOM),
            B::LOG_OAK_TOP => (B::LOG_OAK, B::LOG_OAK_TOP, B::LOG_OAK_BOTTOM),
            B::LOG_BIRCH_TOP => (B::LOG_BIRCH, B::LOG_BIRCH_TOP, B::LOG_BIRCH_BOTTOM),
            other => (other, other, other),
        };
        [side, side, side, side, top, bottom]
    }

    /// True when the block shows different textures on top, bottom and sides.
    pub fn has_face_triad(self) -> bool {
        let t = self.face_textures();
        t[0] != t[4] || t[4] != t[5]
    }

    /// Texture for one face role.
    pub fn texture_for(self, role: FaceRole) -> BlockTypeId {
        let t = self.face_textures();
        match role {
            FaceRole::Side => t[0],
            FaceRole::Top => t[4],
            FaceRole::Bottom => t[5],
        }
    }

    /// Mesh shape used when no catalog override is present.
    pub fn default_shape(self) -> Shape {
        if self.has_face_triad() {
            Shape::Grass
        } else {
            Shape::Cube
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceRole {
    Top,
    Bottom,
    Side,
}

/// Source mesh category a block is drawn with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    #[default]
    Cube,
    /// Cube with separate top/side/bottom tiles.
    Grass,
    /// Half-step stairs with extra front, side and top faces.
    Stairs,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Cube, Shape::Grass, Shape::Stairs];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}
