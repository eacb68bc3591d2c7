//! Hexboard CLI - Two-player Hex in a window
//!
//! Options:
//! - --config: JSON configuration file
//! - --seed: fix the first-player draw
//! - --width/--height: window size

mod app;
mod play;
mod surface;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use play::PlayArgs;

#[derive(Parser)]
#[command(name = "hex")]
#[command(about = "Two-player Hex on an 11x11 board")]
struct Cli {
    #[command(flatten)]
    play: PlayArgs,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    play::run(cli.play)
}
