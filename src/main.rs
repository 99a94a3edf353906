use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use simplelog::{LevelFilter, WriteLogger};

use potion_snake::game::GameConfig;
use potion_snake::modes::{PlayMode, SketchMode};
use potion_snake::sketch::SketchConfig;

#[derive(Parser)]
#[command(name = "potion_snake")]
#[command(version, about = "Terminal snake with poison and speed potions, plus a turtle sketch toy")]
struct Cli {
    /// What to run
    #[arg(long, default_value = "play")]
    mode: Mode,

    /// Side length of the square snake grid
    #[arg(long, default_value = "16")]
    grid_size: usize,

    /// Write an info-level log to this file (stderr is taken by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// The snake game
    Play,
    /// The turtle drawing toy
    Sketch,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        WriteLogger::init(LevelFilter::Info, simplelog::Config::default(), file)
            .context("Failed to initialize logger")?;
        info!("starting potion_snake");
    }

    match cli.mode {
        Mode::Play => {
            let config = GameConfig::new(cli.grid_size);
            let mut play_mode = PlayMode::new(config);
            play_mode.run().await?;
        }
        Mode::Sketch => {
            let mut sketch_mode = SketchMode::new(SketchConfig::default());
            sketch_mode.run().await?;
        }
    }

    Ok(())
}
