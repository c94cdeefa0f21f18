use std::path::PathBuf;

use clap::Parser;

/// Headless voxel world session: builds a flat world and runs scripted frames.
#[derive(Parser, Debug, Clone)]
#[command(name = "voxcraft", version, about)]
pub struct Args {
    /// World configuration TOML (`[world]`, `[video]`, `[player]`, `[atlas]`, `[items]`).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Block catalog TOML with sprite root, shape and sound overrides.
    #[arg(long)]
    pub blocks: Option<PathBuf>,

    /// Session script TOML; the built-in dig-and-place script runs otherwise.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Run exactly this many frames, padding the script with idle frames.
    #[arg(long)]
    pub frames: Option<u64>,

    /// Horizontal world size in cells.
    #[arg(long)]
    pub world_size: Option<i32>,

    /// World height in cells.
    #[arg(long)]
    pub height: Option<i32>,

    /// View window radius in chunks.
    #[arg(long)]
    pub render_distance: Option<i32>,

    /// Fill the hotbar from the creative palette instead of the starter kit.
    #[arg(long, default_value_t = false)]
    pub creative: bool,

    /// Dedicated worker threads for meshing; 0 uses the global rayon pool.
    #[arg(long, default_value_t = 0)]
    pub workers: usize,

    /// Seed for dropped item impulses.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Default log filter when RUST_LOG is unset (e.g. `debug`, `events=debug`).
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
