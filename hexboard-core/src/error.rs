//! Move errors
//!
//! Every rejected placement is reported with one of these. The frame loop
//! treats all of them as a no-op click.

use crate::board::Coord;

/// Reasons a placement can be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Coordinate lies outside the board
    #[error("cell {0} is off the board")]
    OutOfBounds(Coord),

    /// Cell already holds a stone
    #[error("cell {0} is already occupied")]
    Occupied(Coord),

    /// A player has already won; restart to play again
    #[error("game is over")]
    GameOver,

    /// First player has not been assigned yet
    #[error("no active player")]
    NoActivePlayer,

    /// Pointer is not over any cell
    #[error("no cell under pointer")]
    NoCellUnderPointer,
}
