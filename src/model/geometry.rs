//! Integer pixel geometry shared by every layout element.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in absolute, non-negative pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset from the left image edge
    pub x: u32,
    /// Vertical offset from the top image edge
    pub y: u32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle with inclusive edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Rect {
    /// Create a rectangle from its edges.
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Four-point outline: top-left, top-right, bottom-right, bottom-left.
    pub fn to_polygon(&self) -> Polygon {
        Polygon::from_points(vec![
            Point::new(self.left, self.top),
            Point::new(self.right, self.top),
            Point::new(self.right, self.bottom),
            Point::new(self.left, self.bottom),
        ])
    }
}

/// An outline made of ordered pixel points.
///
/// A polygon with two points or fewer has no area and is treated as
/// degenerate; the mapper never attaches one to a layout element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Create an empty polygon.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a polygon from points.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Append a point.
    pub fn add_point(&mut self, x: u32, y: u32) {
        self.points.push(Point::new(x, y));
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut Vec<Point> {
        &mut self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the polygon has too few points to enclose an area.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() <= 2
    }

    /// Bounding rectangle, or `None` for an empty polygon.
    pub fn bounding_box(&self) -> Option<Rect> {
        let first = self.points.first()?;
        let init = Rect::new(first.x, first.y, first.x, first.y);
        Some(self.points.iter().skip(1).fold(init, |r, p| Rect {
            left: r.left.min(p.x),
            top: r.top.min(p.y),
            right: r.right.max(p.x),
            bottom: r.bottom.max(p.y),
        }))
    }
}

/// PAGE `points` attribute form: `x1,y1 x2,y2 ...`.
impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{},{}", p.x, p.y)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate() {
        let mut poly = Polygon::new();
        assert!(poly.is_degenerate());
        poly.add_point(0, 0);
        poly.add_point(10, 0);
        assert!(poly.is_degenerate());
        poly.add_point(10, 10);
        assert!(!poly.is_degenerate());
    }

    #[test]
    fn test_bounding_box() {
        let poly = Polygon::from_points(vec![
            Point::new(5, 9),
            Point::new(20, 3),
            Point::new(14, 30),
        ]);
        assert_eq!(poly.bounding_box(), Some(Rect::new(5, 3, 20, 30)));
        assert_eq!(Polygon::new().bounding_box(), None);
    }

    #[test]
    fn test_rect_to_polygon_order() {
        let poly = Rect::new(1, 2, 3, 4).to_polygon();
        assert_eq!(
            poly.points(),
            &[
                Point::new(1, 2),
                Point::new(3, 2),
                Point::new(3, 4),
                Point::new(1, 4)
            ]
        );
    }

    #[test]
    fn test_rect_union() {
        let a = Rect::new(10, 10, 20, 20);
        let b = Rect::new(5, 15, 18, 40);
        assert_eq!(a.union(&b), Rect::new(5, 10, 20, 40));
        assert_eq!(a.width(), 10);
    }

    #[test]
    fn test_points_attribute() {
        let poly = Rect::new(0, 0, 2, 1).to_polygon();
        assert_eq!(poly.to_string(), "0,0 2,0 2,1 0,1");
    }
}
