use proptest::prelude::*;
use voxcraft_blocks::{BlockTypeId, FaceRole, TextureAtlas};

fn arb_block() -> impl Strategy<Value = BlockTypeId> {
    (0usize..BlockTypeId::ALL.len()).prop_map(|i| BlockTypeId::ALL[i])
}

proptest! {
    // Names resolve back to the same id
    #[test]
    fn name_round_trip(b in arb_block()) {
        prop_assert_eq!(BlockTypeId::from_name(b.name()), Some(b));
    }

    // Side faces share one texture and top/bottom come from the same family
    #[test]
    fn face_textures_shape(b in arb_block()) {
        let t = b.face_textures();
        prop_assert!(t[..4].iter().all(|s| *s == t[0]));
        prop_assert_eq!(b.texture_for(FaceRole::Top), t[4]);
        prop_assert_eq!(b.texture_for(FaceRole::Bottom), t[5]);
        if !b.has_face_triad() {
            prop_assert_eq!(t, [b; 6]);
        }
    }

    // Distinct ids never share an atlas tile in the default layout
    #[test]
    fn atlas_tiles_unique(a in arb_block(), b in arb_block()) {
        let atlas = TextureAtlas::default();
        prop_assert_eq!(a == b, atlas.tile_of(a) == atlas.tile_of(b));
    }
}
