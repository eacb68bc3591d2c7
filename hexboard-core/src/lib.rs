//! Hexboard Core - Hex game engine
//!
//! This crate provides the core game logic for a two-player Hex game:
//! - Board geometry (fixed 11x11 grid with row/column coordinates)
//! - Screen layout for the parallelogram hex arrangement
//! - Connection search for win detection
//! - Turn state machine driven by per-frame input
//! - Declarative scene drawing against an abstract surface

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod layout;
pub mod scene;
pub mod turn;
pub mod win;

// Re-exports for convenient access
pub use board::{Board, Cell, CellState, Coord, BOARD_SIZE, NEIGHBORS};
pub use config::{GameConfig, LayoutConfig, WindowConfig};
pub use error::MoveError;
pub use game::{GameSession, GameState, Phase, Player};
pub use layout::{Layout, Point};
pub use scene::{draw_scene, Color, Surface};
pub use turn::{FrameInput, FrameReport, Placement, TurnController};
pub use win::{has_won, winning_path};
