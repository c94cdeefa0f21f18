use voxcraft_blocks::{BlockCatalog, BlockTypeId, DigSound};
use voxcraft_geom::{IVec3, Vec3};
use voxcraft_inventory::{ContainerView, ItemStack};
use voxcraft_runtime::{Event, FrameInput, KeyState, RuntimeOptions, World};
use voxcraft_world::WorldConfig;

fn world() -> World {
    let opts = RuntimeOptions {
        seed: Some(5),
        ..RuntimeOptions::default()
    };
    World::new(WorldConfig::small(33, 16), BlockCatalog::new(), opts)
}

fn look(dir: Vec3) -> FrameInput {
    FrameInput {
        look: Some(dir),
        ..FrameInput::default()
    }
}

fn names_at(world: &World, tick: u64) -> Vec<&'static str> {
    world
        .events()
        .pending()
        .iter()
        .filter(|e| e.tick == tick)
        .map(|e| e.kind.name())
        .filter(|n| *n != "TargetChanged" && *n != "FluidContact")
        .collect()
}

#[test]
fn looking_down_targets_grass_under_feet() {
    let mut w = world();
    let h = w.terrain().half_size();
    let r = w.step(&look(Vec3::DOWN));
    let hit = r.raycast.unwrap();
    assert_eq!(hit.selected_block(), BlockTypeId::GRASS_TOP);
    assert_eq!(hit.frame_cell(), Some(IVec3::new(h, 3, h)));
    assert_eq!(hit.placement.cell(), Some(IVec3::new(h, 4, h)));
}

#[test]
fn mesh_rebuilds_only_when_needed() {
    let mut w = world();
    let first = w.step(&FrameInput::default());
    let (solid, _) = first.remeshed.unwrap();
    assert!(solid.faces > 0);
    assert_eq!(solid.indices, solid.faces * 6);
    assert!(w.step(&FrameInput::default()).remeshed.is_none());
}

#[test]
fn cannot_place_inside_own_body() {
    let mut w = world();
    w.store_mut()
        .set_slot(ContainerView::HotBar, 1, ItemStack::new(BlockTypeId::DIRT, 3));
    let r = w.step(&FrameInput {
        look: Some(Vec3::DOWN),
        use_key: KeyState::Pressed,
        ..FrameInput::default()
    });
    assert!(r.placed.is_none());
    assert_eq!(w.store().get(ContainerView::HotBar, 1).amount, 3);
}

#[test]
fn place_consumes_one_and_remeshes() {
    let mut w = world();
    let h = w.terrain().half_size();
    w.step(&FrameInput::default());
    w.store_mut()
        .set_slot(ContainerView::HotBar, 1, ItemStack::new(BlockTypeId::DIRT, 3));
    let r = w.step(&FrameInput {
        look: Some(Vec3::new(1.0, -1.0, 0.0)),
        use_key: KeyState::Pressed,
        ..FrameInput::default()
    });
    let cell = IVec3::new(h + 2, 4, h);
    assert_eq!(r.placed, Some(cell));
    assert!(r.remeshed.is_some());
    assert_eq!(w.terrain().block_at(cell), BlockTypeId::DIRT);
    assert_eq!(
        w.store().get(ContainerView::HotBar, 1),
        ItemStack::new(BlockTypeId::DIRT, 2)
    );
    assert_eq!(
        names_at(&w, r.tick),
        vec!["SetRequested", "BlockPlaced", "MeshRebuilt", "SoundPlayed"]
    );
    assert!(w.events().pending().iter().any(|e| e.kind
        == Event::SoundPlayed {
            sound: DigSound::Gravel
        }));
    assert_eq!(w.admin().revision(), 1);
}

#[test]
fn placing_fluid_into_same_fluid_is_cancelled() {
    let mut w = world();
    let h = w.terrain().half_size();
    let cell = IVec3::new(h + 2, 4, h);
    w.terrain_mut().update_cell(cell, BlockTypeId::WATER);
    w.step(&FrameInput::default());
    w.store_mut()
        .set_slot(ContainerView::HotBar, 1, ItemStack::new(BlockTypeId::WATER, 3));
    let r = w.step(&FrameInput {
        look: Some(Vec3::new(1.0, -1.0, 0.0)),
        use_key: KeyState::Pressed,
        ..FrameInput::default()
    });
    assert_eq!(r.raycast.and_then(|h| h.placement.cell()), Some(cell));
    assert!(r.placed.is_none());
    assert!(w.admin().pending_set().is_none());
    assert_eq!(w.admin().revision(), 0);
    assert_eq!(
        w.store().get(ContainerView::HotBar, 1),
        ItemStack::new(BlockTypeId::WATER, 3)
    );
    assert_eq!(names_at(&w, r.tick), vec!["SetRequested"]);
}

#[test]
fn creative_stack_from_palette_is_placeable() {
    let mut w = world();
    assert!(w.store_mut().quick_move(ContainerView::CreativeTerrain, 12));
    w.step(&FrameInput {
        look: Some(Vec3::new(1.0, -1.0, 0.0)),
        use_key: KeyState::Pressed,
        ..FrameInput::default()
    });
    assert_eq!(
        w.store().get(ContainerView::HotBar, 1),
        ItemStack::new(BlockTypeId::OBSIDIAN, 63)
    );
    assert_eq!(
        w.store().get(ContainerView::CreativeTerrain, 12),
        ItemStack::new(BlockTypeId::OBSIDIAN, 1)
    );
}

#[test]
fn holding_attack_breaks_then_item_is_picked_up() {
    let mut w = world();
    let h = w.terrain().half_size();
    let mut attack = KeyState::Pressed;
    let mut broke_at = None;
    for _ in 0..6 {
        let r = w.step(&FrameInput {
            look: Some(Vec3::DOWN),
            attack,
            ..FrameInput::default()
        });
        attack = attack.settle();
        if r.broken.is_some() {
            broke_at = Some(r.tick);
            let b = r.broken.unwrap();
            assert_eq!(b.cell, IVec3::new(h, 3, h));
            assert_eq!(b.block, BlockTypeId::GRASS_TOP);
        }
    }
    let tick = broke_at.expect("block should break on the sixth frame");
    assert_eq!(tick, 6);
    assert_eq!(
        names_at(&w, tick),
        vec![
            "BreakRequested",
            "BlockRemoved",
            "MeshRebuilt",
            "ItemSpawned",
            "SoundPlayed"
        ]
    );
    assert_eq!(w.terrain().block_at(IVec3::new(h, 3, h)), BlockTypeId::AIR);

    for _ in 0..120 {
        w.step(&FrameInput::default());
    }
    let first_pos = w.items().iter().next().map(|item| item.pos);
    if let Some(pos) = first_pos {
        w.step(&FrameInput {
            move_to: Some(pos),
            ..FrameInput::default()
        });
    }
    assert!(w.items().is_empty());
    assert_eq!(w.events().total("ItemPickedUp"), 1);
    assert_eq!(
        w.store().get(ContainerView::HotBar, 1),
        ItemStack::new(BlockTypeId::GRASS_TOP, 1)
    );
    assert!(w.hitboxes().len() == 1);
}

#[test]
fn bedrock_is_not_breakable() {
    let mut w = world();
    let h = w.terrain().half_size();
    // dig straight down to bedrock by clearing the column
    for y in 1..=3 {
        w.terrain_mut().update_cell(IVec3::new(h, y, h), BlockTypeId::AIR);
    }
    let mut attack = KeyState::Pressed;
    for _ in 0..10 {
        w.step(&FrameInput {
            move_to: Some(Vec3::new(0.5, 1.0, 0.5)),
            look: Some(Vec3::DOWN),
            attack,
            ..FrameInput::default()
        });
        attack = attack.settle();
    }
    assert_eq!(w.terrain().block_at(IVec3::new(h, 0, h)), BlockTypeId::BEDROCK);
    assert!(w.events().total("EditRejected") >= 1);
    assert_eq!(w.events().total("BlockRemoved"), 0);
}

#[test]
fn drop_key_and_scroll() {
    let mut w = world();
    w.store_mut()
        .set_slot(ContainerView::HotBar, 1, ItemStack::new(BlockTypeId::DIRT, 3));
    w.step(&FrameInput {
        drop: Some(false),
        ..FrameInput::default()
    });
    assert_eq!(w.store().get(ContainerView::HotBar, 1).amount, 2);
    w.step(&FrameInput {
        drop: Some(true),
        ..FrameInput::default()
    });
    assert!(w.store().get(ContainerView::HotBar, 1).is_empty());
    w.step(&FrameInput {
        scroll: -1,
        ..FrameInput::default()
    });
    assert_eq!(w.store().selected(), 9);
    assert_eq!(w.events().total("StackDropped"), 2);
}

#[test]
fn dedicated_pool_matches_global_pool() {
    let mut a = world();
    let mut b = World::new(
        WorldConfig::small(33, 16),
        BlockCatalog::new(),
        RuntimeOptions {
            workers: 2,
            seed: Some(5),
            flat: true,
        },
    );
    let ra = a.step(&look(Vec3::DOWN));
    let rb = b.step(&look(Vec3::DOWN));
    assert_eq!(ra.remeshed, rb.remeshed);
    assert_eq!(a.mesh_buffers().0.pos, b.mesh_buffers().0.pos);
}
