use crate::types::BlockTypeId;

/// Dig sound category played when a block is placed or broken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DigSound {
    #[default]
    None,
    Cloth,
    Grass,
    Stone,
    Wood,
    Gravel,
    Sand,
}

impl DigSound {
    /// Clip name understood by the audio collaborator; empty for `None`.
    pub const fn clip(self) -> &'static str {
        match self {
            DigSound::None => "",
            DigSound::Cloth => "dig_cloth",
            DigSound::Grass => "dig_grass",
            DigSound::Stone => "dig_stone",
            DigSound::Wood => "dig_wood",
            DigSound::Gravel => "dig_gravel",
            DigSound::Sand => "dig_sand",
        }
    }

    pub fn from_clip(clip: &str) -> Option<DigSound> {
        [
            DigSound::None,
            DigSound::Cloth,
            DigSound::Grass,
            DigSound::Stone,
            DigSound::Wood,
            DigSound::Gravel,
            DigSound::Sand,
        ]
        .into_iter()
        .find(|s| s.clip() == clip)
    }

    /// Fixed id to category table.
    pub fn for_block(id: BlockTypeId) -> DigSound {
        use BlockTypeId as B;
        match id {
            B::DIRT | B::LEAVES | B::GRAVEL => DigSound::Gravel,
            B::GRASS_TOP | B::GRASS_SIDE | B::GRASS_BOTTOM => DigSound::Grass,
            B::STONE
            | B::OBSIDIAN
            | B::COBBLESTONE
            | B::STONE_ANDESITE
            | B::STONE_DIORITE
            | B::STONE_GRANITE
            | B::COAL_ORE
            | B::IRON_ORE
            | B::GOLD_ORE
            | B::DIAMOND_ORE
            | B::EMERALD_ORE
            | B::LAPIS_ORE => DigSound::Stone,
            B::LOG_OAK_TOP
            | B::LOG_OAK
            | B::LOG_OAK_BOTTOM
            | B::PLANKS_OAK
            | B::PLANKS_BIRCH
            | B::LOG_BIRCH_TOP
            | B::LOG_BIRCH
            | B::LOG_BIRCH_BOTTOM => DigSound::Wood,
            b if b >= B::HARDENED_CLAY && b <= B::HARDENED_CLAY_STAINED_YELLOW => DigSound::Stone,
            b if b >= B::WOOL_COLORED_BLUE => DigSound::Cloth,
            // air, fluids and bedrock are silent
            _ => DigSound::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_families() {
        assert_eq!(DigSound::for_block(BlockTypeId::AIR), DigSound::None);
        assert_eq!(DigSound::for_block(BlockTypeId::WATER), DigSound::None);
        assert_eq!(DigSound::for_block(BlockTypeId::BEDROCK), DigSound::None);
        assert_eq!(DigSound::for_block(BlockTypeId::DIRT), DigSound::Gravel);
        assert_eq!(DigSound::for_block(BlockTypeId::GRASS_TOP), DigSound::Grass);
        assert_eq!(DigSound::for_block(BlockTypeId::DIAMOND_ORE), DigSound::Stone);
        assert_eq!(
            DigSound::for_block(BlockTypeId::HARDENED_CLAY_STAINED_SILVER),
            DigSound::Stone
        );
        assert_eq!(DigSound::for_block(BlockTypeId::LOG_BIRCH), DigSound::Wood);
        assert_eq!(DigSound::for_block(BlockTypeId::WOOL_COLORED_RED), DigSound::Cloth);
    }

    #[test]
    fn clip_names_round_trip() {
        assert_eq!(DigSound::from_clip("dig_sand"), Some(DigSound::Sand));
        assert_eq!(DigSound::from_clip(""), Some(DigSound::None));
        assert_eq!(DigSound::from_clip("dig_metal"), None);
    }
}
