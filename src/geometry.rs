// src/geometry.rs
//
// Pure 2-D helpers shared by the landmark layer and the hold tracker.

use crate::types::Point2D;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("cannot compute the centroid of an empty point set")]
    EmptyPointSet,
}

/// Euclidean distance between two points.
pub fn distance(p1: Point2D, p2: Point2D) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    dx.hypot(dy)
}

/// Arithmetic mean of a point set. An empty set is a caller bug and
/// fails fast rather than returning NaN coordinates.
pub fn centroid(points: &[Point2D]) -> Result<Point2D, GeometryError> {
    if points.is_empty() {
        return Err(GeometryError::EmptyPointSet);
    }
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    let n = points.len() as f64;
    Ok(Point2D::new(sx / n, sy / n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert_eq!(distance(a, b), 5.0);
        assert_eq!(distance(b, a), 5.0);
    }

    #[test]
    fn distance_of_coincident_points_is_zero() {
        let p = Point2D::new(17.5, -2.0);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn centroid_averages_coordinates() {
        let points = [
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 2.0),
            Point2D::new(0.0, 2.0),
        ];
        let center = centroid(&points).unwrap();
        assert_eq!(center, Point2D::new(2.0, 1.0));
    }

    #[test]
    fn centroid_of_single_point_is_that_point() {
        let p = Point2D::new(12.0, 34.0);
        assert_eq!(centroid(&[p]).unwrap(), p);
    }

    #[test]
    fn centroid_of_empty_set_is_an_error() {
        assert_eq!(centroid(&[]), Err(GeometryError::EmptyPointSet));
    }
}
