//! Fixed contents of the two creative palettes.
use voxcraft_blocks::BlockTypeId as B;

use crate::stack::ItemStack;
use crate::store::PALETTE_SLOTS;

/// Tab 0, starting at view slot 10.
pub const TERRAIN: &[B] = &[
    B::DIRT,
    B::GRASS_TOP,
    B::OBSIDIAN,
    B::WATER,
    B::LAVA,
    B::STONE,
    B::COBBLESTONE,
    B::STONE_ANDESITE,
    B::STONE_DIORITE,
    B::STONE_GRANITE,
    B::COAL_ORE,
    B::IRON_ORE,
    B::GOLD_ORE,
    B::DIAMOND_ORE,
    B::EMERALD_ORE,
    B::LAPIS_ORE,
    B::LEAVES,
    B::LOG_OAK_TOP,
    B::PLANKS_OAK,
    B::PLANKS_BIRCH,
    B::LOG_BIRCH_TOP,
    B::GRAVEL,
];

/// Tab 1: stained clay then wool. Silver clay is not offered.
pub const COLORS: &[B] = &[
    B::HARDENED_CLAY,
    B::HARDENED_CLAY_STAINED_BLACK,
    B::HARDENED_CLAY_STAINED_BLUE,
    B::HARDENED_CLAY_STAINED_BROWN,
    B::HARDENED_CLAY_STAINED_CYAN,
    B::HARDENED_CLAY_STAINED_GRAY,
    B::HARDENED_CLAY_STAINED_GREEN,
    B::HARDENED_CLAY_STAINED_LIGHT_BLUE,
    B::HARDENED_CLAY_STAINED_LIME,
    B::HARDENED_CLAY_STAINED_MAGENTA,
    B::HARDENED_CLAY_STAINED_ORANGE,
    B::HARDENED_CLAY_STAINED_PINK,
    B::HARDENED_CLAY_STAINED_PURPLE,
    B::HARDENED_CLAY_STAINED_RED,
    B::HARDENED_CLAY_STAINED_WHITE,
    B::HARDENED_CLAY_STAINED_YELLOW,
    B::WOOL_COLORED_BLUE,
    B::WOOL_COLORED_BROWN,
    B::WOOL_COLORED_CYAN,
    B::WOOL_COLORED_GRAY,
    B::WOOL_COLORED_GREEN,
    B::WOOL_COLORED_LIGHT_BLUE,
    B::WOOL_COLORED_LIME,
    B::WOOL_COLORED_MAGENTA,
    B::WOOL_COLORED_ORANGE,
    B::WOOL_COLORED_PINK,
    B::WOOL_COLORED_PURPLE,
    B::WOOL_COLORED_RED,
    B::WOOL_COLORED_SILVER,
    B::WOOL_COLORED_WHITE,
    B::WOOL_COLORED_YELLOW,
];

/// One of each id, remaining slots empty. Ids past the palette size are dropped.
pub fn fill(ids: &[B]) -> [ItemStack; PALETTE_SLOTS] {
    let mut out = [ItemStack::EMPTY; PALETTE_SLOTS];
    for (slot, &id) in out.iter_mut().zip(ids) {
        *slot = ItemStack::new(id, 1);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_fit_and_hold_placeable_blocks() {
        assert!(TERRAIN.len() <= PALETTE_SLOTS);
        assert!(COLORS.len() <= PALETTE_SLOTS);
        assert_eq!(TERRAIN.len(), 22);
        assert_eq!(COLORS.len(), 31);
        for id in TERRAIN.iter().chain(COLORS) {
            assert!(id.is_placeable(), "{:?}", id);
        }
    }

    #[test]
    fn fill_pads_with_empty() {
        let p = fill(TERRAIN);
        assert_eq!(p[0], ItemStack::new(B::DIRT, 1));
        assert_eq!(p[21], ItemStack::new(B::GRAVEL, 1));
        assert!(p[22..].iter().all(|s| s.is_empty()));
    }
}
