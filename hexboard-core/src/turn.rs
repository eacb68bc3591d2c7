//! Turn controller - per-frame game orchestration
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: frame() - one loop iteration
//! - Level 2: restart(), assign_first_player(), click_at()
//! - Level 3: place() - board mutation and win check
//! - Level 4: input/report types
//!
//! Within a frame the restart check always runs before the first-player
//! draw, which always runs before placement.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::board::Coord;
use crate::error::MoveError;
use crate::game::{GameSession, Phase, Player};
use crate::layout::{Layout, Point};
use crate::win::has_won;

// ============================================================================
// INPUT / REPORT TYPES (Level 4)
// ============================================================================

/// Input sampled once per frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Restart key went down this frame
    pub restart_pressed: bool,
    /// Pointer position, if over the window
    pub pointer: Option<Point>,
    /// Primary button was released this frame
    pub primary_released: bool,
}

/// A stone that was placed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub coord: Coord,
    pub player: Player,
    pub won: bool,
}

/// What happened during one frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub restarted: bool,
    /// Set on the frame the first player was drawn
    pub first_player: Option<Player>,
    /// Cell under the pointer
    pub hovered: Option<Coord>,
    /// Outcome of a click, if there was one
    pub placement: Option<Result<Placement, MoveError>>,
}

// ============================================================================
// CONTROLLER
// ============================================================================

/// Owns a game session and drives it from per-frame input
pub struct TurnController<R = ChaCha8Rng> {
    session: GameSession,
    rng: R,
}

impl TurnController<ChaCha8Rng> {
    /// Controller with a seeded RNG (None = from entropy)
    pub fn with_seed(layout: Layout, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::new(layout, rng)
    }
}

impl<R: Rng> TurnController<R> {
    pub fn new(layout: Layout, rng: R) -> Self {
        Self {
            session: GameSession::new(layout),
            rng,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    // ========================================================================
    // LEVEL 1 - FRAME
    // ========================================================================

    /// Run one frame: restart, first-player draw, then at most one placement
    pub fn frame(&mut self, input: FrameInput) -> FrameReport {
        let mut report = FrameReport::default();

        if input.restart_pressed {
            self.restart();
            report.restarted = true;
        }

        report.first_player = self.assign_first_player();

        report.hovered = input
            .pointer
            .and_then(|point| self.session.board().cell_at_point(point));

        if input.primary_released {
            let outcome = match report.hovered {
                Some(coord) => self.place(coord),
                None => Err(MoveError::NoCellUnderPointer),
            };
            if let Err(err) = &outcome {
                tracing::debug!("Ignoring click: {}", err);
            }
            report.placement = Some(outcome);
        }

        report
    }

    // ========================================================================
    // LEVEL 2 - TRANSITIONS
    // ========================================================================

    /// Clear the board and return to awaiting a first player
    pub fn restart(&mut self) {
        self.session.reset();
        tracing::info!("Game restarted");
    }

    /// Pick who moves first, once per game. Returns the player only on the
    /// call that made the choice.
    pub fn assign_first_player(&mut self) -> Option<Player> {
        if self.phase() != Phase::AwaitingFirstPlayer {
            return None;
        }

        let first = if self.rng.gen_bool(0.5) {
            Player::Blue
        } else {
            Player::Red
        };
        let (_, state) = self.session.parts_mut();
        state.begin(first);

        tracing::info!("New game, {} moves first", first);
        Some(first)
    }

    /// Place a stone on the cell under `point`
    pub fn click_at(&mut self, point: Point) -> Result<Placement, MoveError> {
        let coord = self
            .session
            .board()
            .cell_at_point(point)
            .ok_or(MoveError::NoCellUnderPointer)?;
        self.place(coord)
    }

    // ========================================================================
    // LEVEL 3 - PLACEMENT
    // ========================================================================

    /// Place the active player's stone at `coord`, then either pass the turn
    /// or end the game
    pub fn place(&mut self, coord: Coord) -> Result<Placement, MoveError> {
        let player = match self.phase() {
            Phase::InProgress(player) => player,
            Phase::Won(_) => return Err(MoveError::GameOver),
            Phase::AwaitingFirstPlayer => return Err(MoveError::NoActivePlayer),
        };

        let (board, state) = self.session.parts_mut();
        board.place_at(coord, player)?;

        let won = has_won(board, player);
        if won {
            state.declare_win();
            tracing::info!("{} won with a stone at {}", player, coord);
        } else {
            state.pass_turn();
            tracing::debug!("{} placed at {}", player, coord);
        }

        Ok(Placement { coord, player, won })
    }
}
