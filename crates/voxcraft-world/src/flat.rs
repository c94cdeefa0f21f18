use voxcraft_blocks::BlockTypeId;

use crate::grid::Terrain;

/// Layers of the flat preset, bottom up.
pub const FLAT_LAYERS: [BlockTypeId; 4] = [
    BlockTypeId::BEDROCK,
    BlockTypeId::DIRT,
    BlockTypeId::DIRT,
    BlockTypeId::GRASS_TOP,
];

/// Bedrock at y=0, dirt at y=1..=2, grass at y=3, air above.
pub fn generate_flat(terrain: &mut Terrain) {
    for (y, id) in FLAT_LAYERS.iter().enumerate() {
        terrain.solid.fill_layer(y as i32, *id);
    }
    log::info!(target: "config", "flat world generated ({} solid cells)", terrain.solid.count_non_air());
}

/// Height of the first air layer above the flat preset.
#[inline]
pub fn flat_surface_y() -> i32 {
    FLAT_LAYERS.len() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use voxcraft_geom::IVec3;

    #[test]
    fn layers_match_preset() {
        let mut t = Terrain::new(&WorldConfig::small(5, 8));
        generate_flat(&mut t);
        for x in 0..5 {
            for z in 0..5 {
                assert_eq!(t.solid.get(IVec3::new(x, 0, z)), BlockTypeId::BEDROCK);
                assert_eq!(t.solid.get(IVec3::new(x, 1, z)), BlockTypeId::DIRT);
                assert_eq!(t.solid.get(IVec3::new(x, 2, z)), BlockTypeId::DIRT);
                assert_eq!(t.solid.get(IVec3::new(x, 3, z)), BlockTypeId::GRASS_TOP);
                assert_eq!(t.solid.get(IVec3::new(x, 4, z)), BlockTypeId::AIR);
            }
        }
        assert_eq!(t.solid.count_non_air(), 5 * 5 * 4);
        assert_eq!(t.through.count_non_air(), 0);
    }

    #[test]
    fn short_world_truncates_layers() {
        let mut t = Terrain::new(&WorldConfig::small(3, 2));
        generate_flat(&mut t);
        assert_eq!(t.solid.count_non_air(), 3 * 3 * 2);
    }
}
