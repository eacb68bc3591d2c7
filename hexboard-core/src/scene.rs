//! Scene drawing
//!
//! The core does not render anything itself. It describes each frame as a
//! sequence of calls on a [`Surface`], which the frontend maps onto its
//! graphics library.

use crate::board::{Coord, BOARD_SIZE};
use crate::config::WindowConfig;
use crate::game::{GameSession, Phase, Player};
use crate::layout::Point;
use crate::win::winning_path;

const BORDER_THICKNESS: f32 = 3.0;
const BORDER_EXTRA: f32 = 15.0;
const BORDER_SLANT: f32 = 8.0;

/// Inset of the winning-chain outline inside a cell
const HIGHLIGHT_INSET: f32 = 4.0;

/// Text column on the right-hand side of the window
const SIDEBAR_WIDTH: f32 = 200.0;

/// Palette entries; the frontend picks actual colors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Player(Player),
    Hover,
    Outline,
    Title,
    Hint,
    WinHighlight,
}

/// Drawing primitives provided by the frontend
pub trait Surface {
    fn fill_hexagon(&mut self, center: Point, radius: f32, color: Color);
    fn outline_hexagon(&mut self, center: Point, radius: f32, color: Color);
    fn line(&mut self, from: Point, to: Point, thickness: f32, color: Color);
    /// `pos` is the top-left corner of the text
    fn text(&mut self, pos: Point, size: f32, color: Color, text: &str);
}

/// Draw one frame of `session`
pub fn draw_scene<S: Surface>(
    session: &GameSession,
    hovered: Option<Coord>,
    window: &WindowConfig,
    surface: &mut S,
) {
    draw_text_group(session, window, surface);
    draw_border(session, surface);
    draw_board(session, hovered, surface);
}

fn draw_text_group<S: Surface>(session: &GameSession, window: &WindowConfig, surface: &mut S) {
    let left = window.width - SIDEBAR_WIDTH;

    match session.phase() {
        Phase::InProgress(player) => {
            let status = format!("{}'s turn.", player);
            surface.text(Point::new(left, 80.0), 20.0, Color::Player(player), &status);
        }
        Phase::Won(player) => {
            let status = format!("{} Won.", player);
            surface.text(Point::new(left, 80.0), 20.0, Color::Player(player), &status);
            surface.text(Point::new(left, 110.0), 30.0, Color::Player(player), "Game Over");
        }
        Phase::AwaitingFirstPlayer => {}
    }

    surface.text(Point::new(left, 20.0), 50.0, Color::Title, &window.title);
    surface.text(
        Point::new(20.0, window.height - 25.0),
        15.0,
        Color::Hint,
        "Press R to restart game.",
    );
}

fn draw_border<S: Surface>(session: &GameSession, surface: &mut S) {
    let board = session.board();
    let radius = board.layout().radius;
    let n = BOARD_SIZE - 1;
    let corner = |row, col| board.layout().center(Coord::new(row, col));

    let top_left = corner(0, 0).offset(-radius - BORDER_EXTRA, -radius);
    let bottom_left = corner(n, 0).offset(-radius + BORDER_EXTRA - BORDER_SLANT, radius);
    let top_right = corner(0, n).offset(radius - BORDER_EXTRA + BORDER_SLANT, -radius);
    let bottom_right = corner(n, n).offset(radius + BORDER_EXTRA, radius);

    let blue = Color::Player(Player::Blue);
    let red = Color::Player(Player::Red);
    surface.line(top_left, bottom_left, BORDER_THICKNESS, blue);
    surface.line(top_right, bottom_right, BORDER_THICKNESS, blue);
    surface.line(top_left, top_right, BORDER_THICKNESS, red);
    surface.line(bottom_left, bottom_right, BORDER_THICKNESS, red);
}

fn draw_board<S: Surface>(session: &GameSession, hovered: Option<Coord>, surface: &mut S) {
    let board = session.board();
    let radius = board.layout().radius;
    let won = session.state().is_won();

    for (coord, cell) in board.cells() {
        match cell.state.owner() {
            Some(player) => surface.fill_hexagon(cell.center, radius, Color::Player(player)),
            None if !won && hovered == Some(coord) => {
                surface.fill_hexagon(cell.center, radius, Color::Hover)
            }
            None => {}
        }
        surface.outline_hexagon(cell.center, radius, Color::Outline);
    }

    if let Phase::Won(player) = session.phase() {
        for coord in winning_path(board, player).unwrap_or_default() {
            if let Some(center) = board.center_of(coord) {
                surface.outline_hexagon(center, radius - HIGHLIGHT_INSET, Color::WinHighlight);
            }
        }
    }
}
