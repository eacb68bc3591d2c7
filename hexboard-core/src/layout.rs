//! Screen layout for the hex grid
//!
//! Cells are pointy-top hexagons. Columns are spaced `1.75 * radius` apart
//! and rows `1.5 * radius`; every row is pushed right by `radius - 2`
//! relative to the one above it, which produces the parallelogram board.

use crate::board::Coord;

/// Horizontal distance between column centres, in radii
const COLUMN_SPACING: f32 = 1.75;

/// Vertical distance between row centres, in radii
const ROW_SPACING: f32 = 1.50;

/// Extra shift applied per row is `radius - ROW_SHIFT_INSET`
const ROW_SHIFT_INSET: f32 = 2.0;

/// Pointer must land this far inside the radius to count as a hit
const HIT_INSET: f32 = 3.0;

/// Screen position in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Resolved layout parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Hexagon circumradius
    pub radius: f32,
    /// Centre of cell (0, 0)
    pub origin: Point,
}

impl Layout {
    pub const fn new(radius: f32, origin: Point) -> Self {
        Self { radius, origin }
    }

    /// Screen centre of a cell
    pub fn center(&self, coord: Coord) -> Point {
        let row = coord.row as f32;
        let col = coord.col as f32;
        let row_shift = row * (self.radius - ROW_SHIFT_INSET);
        Point::new(
            self.origin.x + row_shift + col * self.radius * COLUMN_SPACING,
            self.origin.y + row * self.radius * ROW_SPACING,
        )
    }

    /// Smallest radius that still leaves a clickable hit circle
    pub const fn min_radius() -> f32 {
        HIT_INSET
    }

    /// Radius of the circle used for pointer hit-testing
    pub fn hit_radius(&self) -> f32 {
        self.radius - HIT_INSET
    }

    /// Corner points of a pointy-top hexagon, clockwise from the top
    pub fn hexagon_corners(center: Point, radius: f32) -> [Point; 6] {
        let mut corners = [Point::default(); 6];
        for (i, corner) in corners.iter_mut().enumerate() {
            let angle = (60.0 * i as f32 - 90.0).to_radians();
            *corner = center.offset(radius * angle.cos(), radius * angle.sin());
        }
        corners
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::new(20.0, Point::new(70.0, 70.0))
    }

    #[test]
    fn test_origin_cell_center() {
        assert_eq!(layout().center(Coord::new(0, 0)), Point::new(70.0, 70.0));
    }

    #[test]
    fn test_column_and_row_spacing() {
        let layout = layout();
        let right = layout.center(Coord::new(0, 1));
        assert_eq!(right, Point::new(70.0 + 35.0, 70.0));

        // Next row is shifted right by radius - 2
        let below = layout.center(Coord::new(1, 0));
        assert_eq!(below, Point::new(70.0 + 18.0, 70.0 + 30.0));
    }

    #[test]
    fn test_hexagon_corners() {
        let corners = Layout::hexagon_corners(Point::new(0.0, 0.0), 10.0);
        assert!((corners[0].x).abs() < 1e-4);
        assert!((corners[0].y + 10.0).abs() < 1e-4);
        for corner in corners {
            assert!((corner.distance_to(Point::default()) - 10.0).abs() < 1e-4);
        }
    }
}
