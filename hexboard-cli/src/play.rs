//! Play command - open the game window
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_game(), start_window()
//! - Level 3: (delegated to app::HexApp)
//! - Level 4: argument overrides

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;

use hexboard_core::{GameConfig, TurnController};

use crate::app::HexApp;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for choosing who moves first
    #[arg(long)]
    pub seed: Option<u64>,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<f32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<f32>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run the game
///
/// 1. Resolve configuration
/// 2. Open the window (blocking until closed)
pub fn run(args: PlayArgs) -> Result<()> {
    let config = configure_game(&args)?;

    tracing::info!(
        "Opening {}x{} window, hex radius {:.1}",
        config.window.width,
        config.window.height,
        config.layout().radius
    );

    start_window(config)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Build configuration: file (if any), then command-line overrides
fn configure_game(args: &PlayArgs) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            GameConfig::load(path)?
        }
        None => GameConfig::default(),
    };

    apply_overrides(&mut config, args);
    config.validate()?;
    Ok(config)
}

/// Run the eframe loop until the window closes
fn start_window(config: GameConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title(config.window.title.clone()),
        multisampling: 4,
        ..Default::default()
    };

    let controller = TurnController::with_seed(config.layout(), config.seed);
    let title = config.window.title.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(HexApp::new(controller, config.window)))),
    )
    .map_err(|e| anyhow!("failed to open window: {e}"))
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn apply_overrides(config: &mut GameConfig, args: &PlayArgs) {
    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
}

// ============================================================================
// TESTS
// ============================================================================
