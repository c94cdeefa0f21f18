use voxcraft_blocks::BlockTypeId;
use voxcraft_geom::{IVec3, Vec3};
use voxcraft_world::{
    Placement, RaycastQuery, Raycaster, Terrain, WorldConfig, generate_flat,
};

fn flat_world() -> (Terrain, WorldConfig) {
    let cfg = WorldConfig::small(9, 16);
    let mut t = Terrain::new(&cfg);
    generate_flat(&mut t);
    (t, cfg)
}

#[test]
fn straight_down_selects_grass_and_places_above() {
    let (t, cfg) = flat_world();
    let r = Raycaster::from_config(&cfg).cast(
        &t,
        &RaycastQuery {
            origin: Vec3::new(0.5, 10.0, 0.5),
            direction: Vec3::DOWN,
            max_distance: 10.0,
        },
    );
    let sel = r.selected.expect("grass should be hit");
    assert_eq!(sel.block, BlockTypeId::GRASS_TOP);
    assert_eq!(sel.cell, IVec3::new(4, 3, 4));
    assert_eq!(r.placement, Placement::Cell(IVec3::new(4, 4, 4)));
}

#[test]
fn default_reach_stops_short_of_distant_ground() {
    let (t, cfg) = flat_world();
    let r = Raycaster::from_config(&cfg).cast(
        &t,
        &RaycastQuery {
            origin: Vec3::new(0.5, 10.0, 0.5),
            direction: Vec3::DOWN,
            max_distance: cfg.player.reach,
        },
    );
    assert_eq!(r.selected_block(), BlockTypeId::AIR);
    assert_eq!(r.placement, Placement::CantSet);
}

#[test]
fn horizontal_hit_within_reach() {
    let (mut t, cfg) = flat_world();
    t.update_cell(IVec3::new(7, 5, 4), BlockTypeId::COBBLESTONE);
    let r = Raycaster::from_config(&cfg).cast(
        &t,
        &RaycastQuery {
            origin: Vec3::new(0.5, 5.5, 0.5),
            direction: Vec3::new(1.0, 0.0, 0.0),
            max_distance: 5.0,
        },
    );
    assert_eq!(r.selected_block(), BlockTypeId::COBBLESTONE);
    assert_eq!(r.frame_cell(), Some(IVec3::new(7, 5, 4)));
    assert_eq!(r.placement.cell(), Some(IVec3::new(6, 5, 4)));
}

#[test]
fn open_air_for_full_reach_is_miss() {
    let (t, cfg) = flat_world();
    let r = Raycaster::from_config(&cfg).cast(
        &t,
        &RaycastQuery {
            origin: Vec3::new(0.5, 5.0, 0.5),
            direction: Vec3::UP,
            max_distance: 5.0,
        },
    );
    assert_eq!(r.selected_block(), BlockTypeId::AIR);
    assert!(r.selected.is_none());
}

#[test]
fn fluids_do_not_stop_the_ray() {
    let (mut t, cfg) = flat_world();
    t.update_cell(IVec3::new(4, 4, 4), BlockTypeId::WATER);
    let r = Raycaster::from_config(&cfg).cast(
        &t,
        &RaycastQuery {
            origin: Vec3::new(0.5, 7.0, 0.5),
            direction: Vec3::DOWN,
            max_distance: 5.0,
        },
    );
    assert_eq!(r.selected_block(), BlockTypeId::GRASS_TOP);
    assert_eq!(r.placement.cell(), Some(IVec3::new(4, 4, 4)));
}
