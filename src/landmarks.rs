// src/landmarks.rs
//
// Typed lip and fingertip landmarks in frame pixel space, plus the
// adapters that project MediaPipe's normalized output into them.
// Everything downstream (hold tracker, chew detector) works from these
// structs; raw mesh indices never leak past this module.

use crate::geometry::{self, GeometryError};
use crate::types::Point2D;
use serde::{Deserialize, Serialize};

/// Inner-lip contour of the 468-point Face Mesh, used as the ring whose
/// centroid is the mouth center.
pub const LIP_RING_INDICES: [usize; 16] = [
    // inner upper
    78, 191, 80, 81, 82, 13, 312, 311, 310,
    // inner lower
    178, 88, 95, 402, 318, 324, 308,
];

pub const UPPER_LIP_INDEX: usize = 13;
pub const LOWER_LIP_INDEX: usize = 14;
pub const LEFT_CORNER_INDEX: usize = 61;
pub const RIGHT_CORNER_INDEX: usize = 291;

pub const INDEX_TIP_INDEX: usize = 8;
pub const THUMB_TIP_INDEX: usize = 4;

const FACE_MESH_POINTS: usize = 468;
const HAND_POINTS: usize = 21;

/// A landmark as emitted by the upstream models: coordinates normalized
/// to [0, 1] over the frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NormalizedLandmark {
    pub x: f64,
    pub y: f64,
}

impl NormalizedLandmark {
    fn to_pixels(self, width: f64, height: f64) -> Point2D {
        Point2D::new(self.x * width, self.y * height)
    }
}

/// The lip points a frame's mouth geometry is computed from,
/// already projected to pixel space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LipLandmarks {
    pub ring: Vec<Point2D>,
    pub upper_lip: Point2D,
    pub lower_lip: Point2D,
    pub left_corner: Point2D,
    pub right_corner: Point2D,
}

impl LipLandmarks {
    /// Extract the lip set from a full face mesh. Returns `None` when the
    /// mesh is too short to index, which callers treat the same as an
    /// absent face.
    pub fn from_face_mesh(mesh: &[NormalizedLandmark], width: f64, height: f64) -> Option<Self> {
        if mesh.len() < FACE_MESH_POINTS {
            return None;
        }
        let ring = LIP_RING_INDICES
            .iter()
            .map(|&i| mesh[i].to_pixels(width, height))
            .collect();
        Some(Self {
            ring,
            upper_lip: mesh[UPPER_LIP_INDEX].to_pixels(width, height),
            lower_lip: mesh[LOWER_LIP_INDEX].to_pixels(width, height),
            left_corner: mesh[LEFT_CORNER_INDEX].to_pixels(width, height),
            right_corner: mesh[RIGHT_CORNER_INDEX].to_pixels(width, height),
        })
    }

    /// Centroid of the inner-lip ring.
    pub fn mouth_center(&self) -> Result<Point2D, GeometryError> {
        geometry::centroid(&self.ring)
    }

    /// Mouth-gap-to-mouth-width ratio. The width is clamped to at least
    /// one pixel so a degenerate corner detection cannot blow the ratio up.
    pub fn openness_ratio(&self) -> f64 {
        let width = geometry::distance(self.left_corner, self.right_corner).max(1.0);
        let gap = geometry::distance(self.upper_lip, self.lower_lip);
        gap / width
    }
}

/// The two fingertips gating wafer-to-mouth contact, in pixel space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HandTips {
    pub index_tip: Point2D,
    pub thumb_tip: Point2D,
}

impl HandTips {
    /// Extract the fingertips from a full 21-point hand landmark set.
    pub fn from_hand_landmarks(
        landmarks: &[NormalizedLandmark],
        width: f64,
        height: f64,
    ) -> Option<Self> {
        if landmarks.len() < HAND_POINTS {
            return None;
        }
        Some(Self {
            index_tip: landmarks[INDEX_TIP_INDEX].to_pixels(width, height),
            thumb_tip: landmarks[THUMB_TIP_INDEX].to_pixels(width, height),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_mesh(n: usize) -> Vec<NormalizedLandmark> {
        (0..n)
            .map(|i| NormalizedLandmark {
                x: (i % 100) as f64 / 100.0,
                y: (i / 100) as f64 / 10.0,
            })
            .collect()
    }

    #[test]
    fn face_mesh_projection_scales_to_pixels() {
        let mut mesh = flat_mesh(468);
        mesh[UPPER_LIP_INDEX] = NormalizedLandmark { x: 0.5, y: 0.4 };
        mesh[LOWER_LIP_INDEX] = NormalizedLandmark { x: 0.5, y: 0.5 };
        let lips = LipLandmarks::from_face_mesh(&mesh, 640.0, 480.0).unwrap();
        assert_eq!(lips.upper_lip, Point2D::new(320.0, 192.0));
        assert_eq!(lips.lower_lip, Point2D::new(320.0, 240.0));
        assert_eq!(lips.ring.len(), LIP_RING_INDICES.len());
    }

    #[test]
    fn short_mesh_is_treated_as_absent() {
        let mesh = flat_mesh(100);
        assert!(LipLandmarks::from_face_mesh(&mesh, 640.0, 480.0).is_none());
    }

    #[test]
    fn openness_ratio_is_gap_over_width() {
        let lips = LipLandmarks {
            ring: vec![Point2D::new(0.0, 0.0)],
            upper_lip: Point2D::new(50.0, 100.0),
            lower_lip: Point2D::new(50.0, 108.0),
            left_corner: Point2D::new(10.0, 104.0),
            right_corner: Point2D::new(110.0, 104.0),
        };
        assert!((lips.openness_ratio() - 0.08).abs() < 1e-12);
    }

    #[test]
    fn openness_width_is_clamped_to_one_pixel() {
        let corner = Point2D::new(50.0, 104.0);
        let lips = LipLandmarks {
            ring: vec![corner],
            upper_lip: Point2D::new(50.0, 100.0),
            lower_lip: Point2D::new(50.0, 102.0),
            left_corner: corner,
            right_corner: corner,
        };
        // Width collapses to 0 but the clamp keeps the ratio finite.
        assert_eq!(lips.openness_ratio(), 2.0);
    }

    #[test]
    fn hand_tips_come_from_fixed_indices() {
        let mut landmarks = flat_mesh(21);
        landmarks[INDEX_TIP_INDEX] = NormalizedLandmark { x: 0.25, y: 0.5 };
        landmarks[THUMB_TIP_INDEX] = NormalizedLandmark { x: 0.75, y: 0.5 };
        let tips = HandTips::from_hand_landmarks(&landmarks, 100.0, 100.0).unwrap();
        assert_eq!(tips.index_tip, Point2D::new(25.0, 50.0));
        assert_eq!(tips.thumb_tip, Point2D::new(75.0, 50.0));
    }

    #[test]
    fn short_hand_landmarks_are_absent() {
        assert!(HandTips::from_hand_landmarks(&flat_mesh(20), 100.0, 100.0).is_none());
    }
}
