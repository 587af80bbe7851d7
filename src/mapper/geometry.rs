//! Conversion of service bounding shapes to pixel polygons.

use crate::model::Polygon;
use crate::vision::BoundingPoly;

/// Pixel size that normalized vertices are scaled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleBasis {
    pub width: u32,
    pub height: u32,
}

impl ScaleBasis {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for ScaleBasis {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// Convert a bounding shape to a polygon with non-negative pixel points.
///
/// Absolute vertices win over normalized ones. Negative pixel coordinates,
/// which the service reports for text touching the image border, are
/// clamped to zero. A missing or empty shape yields an empty polygon.
pub fn to_polygon(shape: Option<&BoundingPoly>, basis: ScaleBasis) -> Polygon {
    let mut polygon = Polygon::new();
    let Some(shape) = shape else {
        return polygon;
    };

    if !shape.vertices.is_empty() {
        for v in &shape.vertices {
            polygon.add_point(clamp(v.x), clamp(v.y));
        }
    } else {
        for v in &shape.normalized_vertices {
            polygon.add_point(scale(v.x, basis.width), scale(v.y, basis.height));
        }
    }

    polygon
}

#[inline]
fn clamp(value: i32) -> u32 {
    value.max(0) as u32
}

/// Float-to-int `as` truncates toward zero and saturates, so negatives and
/// NaN land on 0.
#[inline]
fn scale(value: f32, extent: u32) -> u32 {
    (value * extent as f32) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;
    use crate::vision::{NormalizedVertex, Vertex};

    fn absolute(points: &[(i32, i32)]) -> BoundingPoly {
        BoundingPoly {
            vertices: points.iter().map(|&(x, y)| Vertex { x, y }).collect(),
            normalized_vertices: Vec::new(),
        }
    }

    fn normalized(points: &[(f32, f32)]) -> BoundingPoly {
        BoundingPoly {
            vertices: Vec::new(),
            normalized_vertices: points
                .iter()
                .map(|&(x, y)| NormalizedVertex { x, y })
                .collect(),
        }
    }

    #[test]
    fn test_absolute_vertices_are_clamped() {
        let shape = absolute(&[(-3, 4), (10, -1), (10, 20), (0, 20)]);
        let poly = to_polygon(Some(&shape), ScaleBasis::new(50, 50));
        assert_eq!(
            poly.points(),
            &[
                Point::new(0, 4),
                Point::new(10, 0),
                Point::new(10, 20),
                Point::new(0, 20)
            ]
        );
    }

    #[test]
    fn test_normalized_vertices_are_scaled() {
        let shape = normalized(&[(0.5, 0.25)]);
        let poly = to_polygon(Some(&shape), ScaleBasis::new(200, 100));
        assert_eq!(poly.points(), &[Point::new(100, 25)]);
    }

    #[test]
    fn test_normalized_truncates_and_clamps() {
        let shape = normalized(&[(0.999, 0.0049), (-0.2, 1.0)]);
        let poly = to_polygon(Some(&shape), ScaleBasis::new(100, 100));
        assert_eq!(poly.points(), &[Point::new(99, 0), Point::new(0, 100)]);
    }

    #[test]
    fn test_absolute_preferred_over_normalized() {
        let shape = BoundingPoly {
            vertices: vec![Vertex { x: 7, y: 8 }],
            normalized_vertices: vec![NormalizedVertex { x: 0.5, y: 0.5 }],
        };
        let poly = to_polygon(Some(&shape), ScaleBasis::new(100, 100));
        assert_eq!(poly.points(), &[Point::new(7, 8)]);
    }

    #[test]
    fn test_missing_or_empty_shape() {
        let basis = ScaleBasis::new(10, 10);
        assert!(to_polygon(None, basis).is_empty());
        assert!(to_polygon(Some(&BoundingPoly::default()), basis).is_empty());
    }
}
