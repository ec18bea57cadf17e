use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

pub mod hit_testing;

/// An immutable position on the drawing surface, in surface-local units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Length when the point is read as an offset from the origin.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn to_pos2(self) -> egui::Pos2 {
        egui::pos2(self.x as f32, self.y as f32)
    }
}

impl From<egui::Pos2> for Point2D {
    fn from(pos: egui::Pos2) -> Self {
        Self::new(f64::from(pos.x), f64::from(pos.y))
    }
}

impl Add for Point2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned box with non-negative extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn min(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    pub fn max(&self) -> Point2D {
        Point2D::new(self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, point: Point2D) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn expand(&self, amount: f64) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }

    pub fn translate(&self, offset: Point2D) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    pub fn to_rect(&self) -> egui::Rect {
        egui::Rect::from_min_max(self.min().to_pos2(), self.max().to_pos2())
    }
}

/// Rectangle spanned by two opposite corners, whichever way the drag went.
pub fn normalized_rect(anchor: Point2D, current: Point2D) -> Bounds {
    Bounds::new(
        anchor.x.min(current.x),
        anchor.y.min(current.y),
        (current.x - anchor.x).abs(),
        (current.y - anchor.y).abs(),
    )
}

/// Square whose side follows the horizontal drag distance. The square grows
/// away from the anchor in the vertical direction of the drag, so the anchor
/// stays a corner: dragging up gives `y = anchor.y - side`, not the smaller of
/// the two y coordinates.
pub fn normalized_square(anchor: Point2D, current: Point2D) -> Bounds {
    let side = (current.x - anchor.x).abs();
    let y = if current.y < anchor.y {
        anchor.y - side
    } else {
        anchor.y
    };
    Bounds::new(anchor.x.min(current.x), y, side, side)
}

/// Ellipse inscribed in the normalized rectangle: `(center, radius_x, radius_y)`.
pub fn normalized_ellipse(anchor: Point2D, current: Point2D) -> (Point2D, f64, f64) {
    let bounds = normalized_rect(anchor, current);
    (bounds.center(), bounds.width / 2.0, bounds.height / 2.0)
}

/// Circle centered in the normalized rectangle, sized by its larger half extent.
pub fn normalized_circle(anchor: Point2D, current: Point2D) -> (Point2D, f64) {
    let bounds = normalized_rect(anchor, current);
    let radius = (bounds.width / 2.0).max(bounds.height / 2.0);
    (bounds.center(), radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2D {
        Point2D::new(x, y)
    }

    #[test]
    fn rect_is_the_same_for_every_drag_direction() {
        let expected = Bounds::new(2.0, 2.0, 8.0, 8.0);
        assert_eq!(normalized_rect(p(10.0, 10.0), p(2.0, 2.0)), expected);
        assert_eq!(normalized_rect(p(2.0, 2.0), p(10.0, 10.0)), expected);
        assert_eq!(normalized_rect(p(2.0, 10.0), p(10.0, 2.0)), expected);
        assert_eq!(normalized_rect(p(10.0, 2.0), p(2.0, 10.0)), expected);
    }

    #[test]
    fn square_side_follows_horizontal_delta() {
        // down-right
        assert_eq!(
            normalized_square(p(10.0, 10.0), p(20.0, 40.0)),
            Bounds::new(10.0, 10.0, 10.0, 10.0)
        );
        // up-right
        assert_eq!(
            normalized_square(p(10.0, 10.0), p(20.0, 0.0)),
            Bounds::new(10.0, 0.0, 10.0, 10.0)
        );
        // down-left
        assert_eq!(
            normalized_square(p(10.0, 10.0), p(4.0, 30.0)),
            Bounds::new(4.0, 10.0, 6.0, 6.0)
        );
        // up-left
        assert_eq!(
            normalized_square(p(10.0, 10.0), p(4.0, 9.0)),
            Bounds::new(4.0, 4.0, 6.0, 6.0)
        );
    }

    #[test]
    fn ellipse_and_circle_center_on_the_drag_box() {
        let (center, rx, ry) = normalized_ellipse(p(10.0, 20.0), p(0.0, 0.0));
        assert_eq!(center, p(5.0, 10.0));
        assert_eq!((rx, ry), (5.0, 10.0));

        let (center, r) = normalized_circle(p(0.0, 0.0), p(10.0, 4.0));
        assert_eq!(center, p(5.0, 2.0));
        assert_eq!(r, 5.0);
    }

    #[test]
    fn point_arithmetic() {
        assert_eq!(p(70.0, 65.0) - p(50.0, 50.0), p(20.0, 15.0));
        assert_eq!(p(1.0, 2.0) + p(3.0, 4.0), p(4.0, 6.0));
        assert_eq!(p(0.0, 0.0).distance(p(3.0, 4.0)), 5.0);
    }
}
