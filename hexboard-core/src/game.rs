//! Players, game phase and session state

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::layout::Layout;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player color
///
/// Blue connects the left and right columns; Red connects the top and
/// bottom rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Blue = 0,
    Red = 1,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Blue, Player::Red];

    pub fn opponent(self) -> Self {
        match self {
            Player::Blue => Player::Red,
            Player::Red => Player::Blue,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Blue => "Blue",
            Player::Red => "Red",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the game is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Nobody has been picked to move first yet
    AwaitingFirstPlayer,
    /// Given player is to move
    InProgress(Player),
    /// Given player connected their edges
    Won(Player),
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Turn bookkeeping: whose move it is and whether they have won
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    current_player: Option<Player>,
    won: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_player(&self) -> Option<Player> {
        self.current_player
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn phase(&self) -> Phase {
        match (self.current_player, self.won) {
            (None, _) => Phase::AwaitingFirstPlayer,
            (Some(player), false) => Phase::InProgress(player),
            (Some(player), true) => Phase::Won(player),
        }
    }

    pub(crate) fn begin(&mut self, first: Player) {
        self.current_player = Some(first);
        self.won = false;
    }

    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.map(Player::opponent);
    }

    pub(crate) fn declare_win(&mut self) {
        self.won = self.current_player.is_some();
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// SESSION
// ============================================================================

/// One game: board plus turn state
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    board: Board,
    state: GameState,
}

impl GameSession {
    pub fn new(layout: Layout) -> Self {
        Self {
            board: Board::new(layout),
            state: GameState::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut Board, &mut GameState) {
        (&mut self.board, &mut self.state)
    }

    /// Empty board, no active player
    pub fn reset(&mut self) {
        self.board.reset();
        self.state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Blue.opponent(), Player::Red);
        assert_eq!(Player::Red.opponent(), Player::Blue);
        assert_eq!(Player::Red.opponent().opponent(), Player::Red);
    }

    #[test]
    fn test_state_phases() {
        let mut state = GameState::new();
        assert_eq!(state.phase(), Phase::AwaitingFirstPlayer);

        state.begin(Player::Red);
        assert_eq!(state.phase(), Phase::InProgress(Player::Red));

        state.pass_turn();
        assert_eq!(state.phase(), Phase::InProgress(Player::Blue));

        state.declare_win();
        assert_eq!(state.phase(), Phase::Won(Player::Blue));

        state.reset();
        assert_eq!(state.phase(), Phase::AwaitingFirstPlayer);
        assert!(!state.is_won());
    }

    #[test]
    fn test_declare_win_without_player_is_ignored() {
        let mut state = GameState::new();
        state.declare_win();
        assert!(!state.is_won());
        assert_eq!(state.phase(), Phase::AwaitingFirstPlayer);
    }
}
