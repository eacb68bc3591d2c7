//! Hex board geometry and cell occupancy

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MoveError;
use crate::game::Player;
use crate::layout::{Layout, Point};

/// Board side length (cells per row and per column)
pub const BOARD_SIZE: i8 = 11;

const N: usize = BOARD_SIZE as usize;

/// Row/column coordinates
///
/// Components are signed so that neighbours of edge cells can be named
/// without wrapping; such coordinates are simply not valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Check if this coordinate is on the board
    pub fn is_valid(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Get neighbor in direction (0-5), see [`NEIGHBORS`]
    pub fn neighbor(&self, direction: u8) -> Coord {
        let (dr, dc) = NEIGHBORS[direction as usize % 6];
        Coord::new(self.row.saturating_add(dr), self.col.saturating_add(dc))
    }

    /// All six neighbors, including off-board ones
    pub fn neighbors(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..6u8).map(move |direction| self.neighbor(direction))
    }

    fn index(&self) -> Option<(usize, usize)> {
        self.is_valid()
            .then(|| (self.row as usize, self.col as usize))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Neighbor offsets (drow, dcol) for this offset scheme.
/// (-1, -1) and (1, 1) are not adjacent.
pub const NEIGHBORS: [(i8, i8); 6] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, -1),
    (-1, 1),
];

/// Occupancy of a single cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Empty,
    Stone(Player),
}

impl CellState {
    pub fn owner(&self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::Stone(player) => Some(*player),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellState::Empty)
    }
}

/// A board cell: occupancy plus where it sits on screen
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cell {
    pub state: CellState,
    pub center: Point,
}

/// Fixed-size board (clone to snapshot)
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: [[Cell; N]; N],
    layout: Layout,
}

impl Board {
    /// Create an empty board laid out with `layout`
    pub fn new(layout: Layout) -> Self {
        let mut board = Self {
            cells: [[Cell::default(); N]; N],
            layout,
        };
        board.initialize();
        board
    }

    /// Clear every cell and recompute screen positions
    pub fn initialize(&mut self) {
        for (row, cells) in self.cells.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                let coord = Coord::new(row as i8, col as i8);
                cell.state = CellState::Empty;
                cell.center = self.layout.center(coord);
            }
        }
    }

    /// Same as [`Board::initialize`]
    pub fn reset(&mut self) {
        self.initialize();
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Occupancy at `coord`, or `None` when off the board
    pub fn state_at(&self, coord: Coord) -> Option<CellState> {
        self.cell(coord).map(|cell| cell.state)
    }

    /// Owner of the stone at `coord`; `None` for empty or off-board cells
    pub fn owner_at(&self, coord: Coord) -> Option<Player> {
        self.state_at(coord).and_then(|state| state.owner())
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        let (row, col) = coord.index()?;
        Some(&self.cells[row][col])
    }

    /// Screen centre of a cell
    pub fn center_of(&self, coord: Coord) -> Option<Point> {
        self.cell(coord).map(|cell| cell.center)
    }

    /// Iterate cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (Coord::new(row as i8, col as i8), cell))
        })
    }

    pub fn stone_count(&self) -> usize {
        self.cells().filter(|(_, cell)| !cell.state.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.stone_count() == N * N
    }

    /// Cell whose hit circle contains `point`; where circles overlap, the
    /// one with the nearest centre
    pub fn cell_at_point(&self, point: Point) -> Option<Coord> {
        let hit_radius = self.layout.hit_radius();
        self.cells()
            .map(|(coord, cell)| (coord, cell.center.distance_to(point)))
            .filter(|&(_, distance)| distance <= hit_radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(coord, _)| coord)
    }

    // ========================================================================
    // MUTATION
    // ========================================================================

    /// Put `player`'s stone on an empty cell
    pub fn place_at(&mut self, coord: Coord, player: Player) -> Result<(), MoveError> {
        let (row, col) = coord.index().ok_or(MoveError::OutOfBounds(coord))?;
        let cell = &mut self.cells[row][col];
        if !cell.state.is_empty() {
            return Err(MoveError::Occupied(coord));
        }
        cell.state = CellState::Stone(player);
        Ok(())
    }
}
