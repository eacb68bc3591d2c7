//! Win detection
//!
//! A player wins once a chain of their stones links their two edges:
//! Blue joins column 0 to the last column, Red joins row 0 to the last row.
//! The search is a depth-first walk from every cell on the starting edge.
//! Visited cells are tracked in a set local to one call, so the board is
//! only ever borrowed immutably.

use rustc_hash::FxHashSet;

use crate::board::{Board, Coord, BOARD_SIZE};
use crate::game::Player;

const LAST: i8 = BOARD_SIZE - 1;

/// Check whether `player` has connected their edges
pub fn has_won(board: &Board, player: Player) -> bool {
    winning_path(board, player).is_some()
}

/// One chain of `player`'s stones from their starting edge to their target
/// edge, in walk order
pub fn winning_path(board: &Board, player: Player) -> Option<Vec<Coord>> {
    let mut visited = FxHashSet::default();
    let mut path = Vec::new();

    // A seed that fails leaves its whole group visited, and that group
    // cannot reach the target from any other seed either.
    for seed in start_edge(player) {
        if search_from(board, seed, player, &mut visited, &mut path) {
            return Some(path);
        }
    }
    None
}

/// Cells a search for `player` starts from
pub fn start_edge(player: Player) -> impl Iterator<Item = Coord> {
    (0..BOARD_SIZE).map(move |i| match player {
        Player::Blue => Coord::new(i, 0),
        Player::Red => Coord::new(0, i),
    })
}

/// Whether `coord` lies on the edge `player` is trying to reach
pub fn on_target_edge(coord: Coord, player: Player) -> bool {
    match player {
        Player::Blue => coord.col == LAST,
        Player::Red => coord.row == LAST,
    }
}

fn search_from(
    board: &Board,
    coord: Coord,
    player: Player,
    visited: &mut FxHashSet<Coord>,
    path: &mut Vec<Coord>,
) -> bool {
    // Off-board and foreign cells read as no owner
    if board.owner_at(coord) != Some(player) || !visited.insert(coord) {
        return false;
    }

    path.push(coord);
    if on_target_edge(coord, player) {
        return true;
    }

    for next in coord.neighbors() {
        if search_from(board, next, player, visited, path) {
            return true;
        }
    }

    path.pop();
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Layout, Point};

    fn board() -> Board {
        Board::new(Layout::new(18.0, Point::new(70.0, 70.0)))
    }

    fn place_all(board: &mut Board, player: Player, coords: &[(i8, i8)]) {
        for &(row, col) in coords {
            board.place_at(Coord::new(row, col), player).unwrap();
        }
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = board();
        assert!(!has_won(&board, Player::Blue));
        assert!(!has_won(&board, Player::Red));
    }

    #[test]
    fn test_row_of_blue_wins_for_blue_only() {
        let mut board = board();
        let row: Vec<_> = (0..BOARD_SIZE).map(|col| (0, col)).collect();
        place_all(&mut board, Player::Blue, &row);

        assert!(has_won(&board, Player::Blue));
        assert!(!has_won(&board, Player::Red));
    }

    #[test]
    fn test_column_of_red_wins_for_red() {
        let mut board = board();
        let column: Vec<_> = (0..BOARD_SIZE).map(|row| (row, 4)).collect();
        place_all(&mut board, Player::Red, &column);

        assert!(has_won(&board, Player::Red));
        assert!(!has_won(&board, Player::Blue));
    }

    #[test]
    fn test_disconnected_ends_do_not_win() {
        let mut board = board();
        place_all(&mut board, Player::Red, &[(0, 5), (10, 5)]);
        assert!(!has_won(&board, Player::Red));
    }

    #[test]
    fn test_diagonal_chain_along_hex_adjacency() {
        // (r, c) -> (r + 1, c - 1) is adjacent in this scheme
        let mut board = board();
        let chain: Vec<_> = (0..BOARD_SIZE).map(|row| (row, LAST - row)).collect();
        place_all(&mut board, Player::Red, &chain);
        assert!(has_won(&board, Player::Red));
    }

    #[test]
    fn test_anti_diagonal_is_not_connected() {
        // (r, c) -> (r + 1, c + 1) is not adjacent
        let mut board = board();
        let chain: Vec<_> = (0..BOARD_SIZE).map(|row| (row, row)).collect();
        place_all(&mut board, Player::Red, &chain);
        assert!(!has_won(&board, Player::Red));
    }

    #[test]
    fn test_opponent_stone_breaks_chain() {
        let mut board = board();
        let row: Vec<_> = (0..BOARD_SIZE).filter(|&col| col != 6).map(|col| (3, col)).collect();
        place_all(&mut board, Player::Blue, &row);
        place_all(&mut board, Player::Red, &[(3, 6)]);
        assert!(!has_won(&board, Player::Blue));

        // Detour through the row below
        place_all(&mut board, Player::Blue, &[(4, 5), (4, 6)]);
        assert!(has_won(&board, Player::Blue));
    }

    #[test]
    fn test_winding_path_with_dead_ends() {
        let mut board = board();
        // Zig-zag with a dead-end spur off row 2
        place_all(
            &mut board,
            Player::Red,
            &[
                (0, 2), (1, 2), (2, 2), (2, 3), (2, 4), (3, 4), (4, 4),
                (4, 3), (4, 2), (5, 2), (6, 2), (7, 2), (8, 2), (9, 2),
                (10, 2), (2, 5), (2, 6), (1, 6),
            ],
        );
        assert!(has_won(&board, Player::Red));
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let mut board = board();
        place_all(&mut board, Player::Blue, &[(0, 0), (0, 1), (1, 1), (5, 5)]);
        place_all(&mut board, Player::Red, &[(2, 2), (0, 3)]);
        let before = board.clone();

        for _ in 0..3 {
            assert!(!has_won(&board, Player::Blue));
            assert!(!has_won(&board, Player::Red));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_winning_path_is_connected() {
        let mut board = board();
        place_all(
            &mut board,
            Player::Blue,
            &[
                (5, 0), (5, 1), (4, 2), (4, 3), (4, 4), (5, 4), (6, 4),
                (6, 5), (6, 6), (6, 7), (6, 8), (6, 9), (6, 10), (7, 0),
            ],
        );

        let path = winning_path(&board, Player::Blue).expect("blue should have won");
        assert_eq!(path.first().map(|c| c.col), Some(0));
        assert_eq!(path.last().map(|c| c.col), Some(LAST));
        for pair in path.windows(2) {
            assert!(pair[0].neighbors().any(|n| n == pair[1]));
        }
        assert!(path.iter().all(|&c| board.owner_at(c) == Some(Player::Blue)));
    }

    #[test]
    fn test_start_and_target_edges() {
        assert!(start_edge(Player::Blue).all(|c| c.col == 0));
        assert!(start_edge(Player::Red).all(|c| c.row == 0));
        assert_eq!(start_edge(Player::Red).count(), BOARD_SIZE as usize);
        assert!(on_target_edge(Coord::new(3, LAST), Player::Blue));
        assert!(!on_target_edge(Coord::new(3, LAST), Player::Red));
        assert!(on_target_edge(Coord::new(LAST, 0), Player::Red));
    }
}
