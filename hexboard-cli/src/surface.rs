//! egui-backed drawing surface

use egui::{Align2, Color32, FontId, Painter, Pos2, Shape, Stroke};

use hexboard_core::{Color, Layout, Player, Point, Surface};

const OUTLINE_WIDTH: f32 = 1.0;
const HIGHLIGHT_WIDTH: f32 = 2.5;

pub const BACKGROUND: Color32 = Color32::from_rgb(245, 245, 245);

/// Palette lookup
pub fn color32(color: Color) -> Color32 {
    match color {
        Color::Player(Player::Blue) => Color32::from_rgb(0, 121, 241),
        Color::Player(Player::Red) => Color32::from_rgb(230, 41, 55),
        Color::Hover => Color32::from_gray(200),
        Color::Outline | Color::Title => Color32::BLACK,
        Color::Hint => Color32::from_gray(80),
        Color::WinHighlight => Color32::from_rgb(255, 203, 0),
    }
}

fn pos(point: Point) -> Pos2 {
    Pos2::new(point.x, point.y)
}

fn hexagon(center: Point, radius: f32) -> Vec<Pos2> {
    Layout::hexagon_corners(center, radius)
        .into_iter()
        .map(pos)
        .collect()
}

/// Draws scene primitives through an egui painter
pub struct PainterSurface<'a> {
    painter: &'a Painter,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter) -> Self {
        Self { painter }
    }
}

impl Surface for PainterSurface<'_> {
    fn fill_hexagon(&mut self, center: Point, radius: f32, color: Color) {
        self.painter.add(Shape::convex_polygon(
            hexagon(center, radius),
            color32(color),
            Stroke::NONE,
        ));
    }

    fn outline_hexagon(&mut self, center: Point, radius: f32, color: Color) {
        let width = match color {
            Color::WinHighlight => HIGHLIGHT_WIDTH,
            _ => OUTLINE_WIDTH,
        };
        self.painter.add(Shape::closed_line(
            hexagon(center, radius),
            Stroke::new(width, color32(color)),
        ));
    }

    fn line(&mut self, from: Point, to: Point, thickness: f32, color: Color) {
        self.painter
            .line_segment([pos(from), pos(to)], Stroke::new(thickness, color32(color)));
    }

    fn text(&mut self, at: Point, size: f32, color: Color, text: &str) {
        self.painter.text(
            pos(at),
            Align2::LEFT_TOP,
            text,
            FontId::proportional(size),
            color32(color),
        );
    }
}
