mod cli;
mod script;

use std::error::Error;
use std::time::Instant;

use clap::Parser;
use voxcraft_blocks::{BlockCatalog, BlockTypeId};
use voxcraft_inventory::{ContainerView, SlotStore};
use voxcraft_runtime::{RuntimeOptions, World};
use voxcraft_world::WorldConfig;

use crate::cli::Args;
use crate::script::{Script, ScriptRunner};

const SESSION_WORLD_SIZE: i32 = 129;
const SESSION_WORLD_HEIGHT: i32 = 64;
const STARTER_DIRT: u32 = 16;

fn load_config(args: &Args) -> Result<WorldConfig, Box<dyn Error>> {
    let mut cfg = match &args.config {
        Some(path) => {
            log::info!(target: "config", "loading world config from {}", path.display());
            WorldConfig::load_from_path(path)?
        }
        None => WorldConfig::small(SESSION_WORLD_SIZE, SESSION_WORLD_HEIGHT),
    };
    if let Some(s) = args.world_size {
        cfg.world.size = s;
    }
    if let Some(h) = args.height {
        cfg.world.height = h;
    }
    if let Some(r) = args.render_distance {
        cfg.video.render_distance = r;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn fill_hotbar(store: &mut SlotStore, creative: bool) {
    if creative {
        // dirt is the first palette entry
        store.quick_move(ContainerView::CreativeTerrain, 10);
    } else {
        for _ in 0..STARTER_DIRT {
            store.add_content(ContainerView::Inventory, BlockTypeId::DIRT);
        }
    }
}

fn log_summary(world: &World, elapsed_ms: u128) {
    let (solid, through) = world.mesh().counts();
    log::info!(
        "{} frames in {} ms; mesh solid faces={} verts={} through faces={}",
        world.tick(),
        elapsed_ms,
        solid.faces,
        solid.vertices,
        through.faces
    );
    for (name, n) in world.events().totals() {
        log::info!(target: "events", "{:<16} {}", name, n);
    }
    let store = world.store();
    for (i, s) in store.stacks(ContainerView::Inventory).iter().enumerate() {
        if !s.is_empty() {
            log::info!(target: "inventory", "slot {:>2}: {:?} x{}", i + 1, s.id, s.amount);
        }
    }
    log::info!(
        target: "inventory",
        "selected slot {} holds {:?}; {} units total; {} items on the ground",
        store.selected(),
        store.selected_stack().id,
        store.total_units(),
        world.items().len()
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .format_timestamp_millis()
        .init();

    let cfg = load_config(&args)?;
    let catalog = match &args.blocks {
        Some(path) => BlockCatalog::load_from_path(path)?,
        None => BlockCatalog::new(),
    };
    let script = match &args.script {
        Some(path) => Script::load_from_path(path)?,
        None => Script::dig_and_place(),
    };
    let frames = args.frames.unwrap_or_else(|| script.frame_count());

    let opts = RuntimeOptions {
        workers: args.workers,
        seed: args.seed,
        flat: true,
    };
    let mut world = World::new(cfg, catalog, opts);
    fill_hotbar(world.store_mut(), args.creative);

    let mut runner = ScriptRunner::new(script);
    let start = Instant::now();
    for _ in 0..frames {
        let input = runner.next_input(&world);
        let report = world.step(&input);
        if let Some((solid, through)) = report.remeshed {
            log::info!(
                "[tick {}] mesh solid={}f/{}v through={}f/{}v",
                report.tick,
                solid.faces,
                solid.vertices,
                through.faces,
                through.vertices
            );
        }
        world.events_mut().drain();
    }
    if !runner.is_done() {
        log::info!("stopped after {} frames with script steps remaining", frames);
    }
    log_summary(&world, start.elapsed().as_millis());
    Ok(())
}
