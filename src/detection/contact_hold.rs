// src/detection/contact_hold.rs
//
// Tracks whether both fingertips sit in an annular band around the mouth
// long enough to conclude the wafer was taken to the mouth. The hold must
// be one contiguous run: a single out-of-band or detector-dropout frame
// discards all accumulated progress.

use crate::geometry;
use crate::types::{ContactConfig, Point2D};
use tracing::{debug, info};

/// Per-frame geometry for the contact check. `None` upstream (no face or
/// no hand this frame) is fed to the tracker as an absent sample.
#[derive(Debug, Clone, Copy)]
pub struct ContactSample {
    pub mouth_center: Point2D,
    pub index_tip: Point2D,
    pub thumb_tip: Point2D,
}

pub struct ContactHoldTracker {
    config: ContactConfig,
    contact_start_ms: Option<f64>,
    accumulated_hold_ms: f64,
    latched: bool,
}

impl ContactHoldTracker {
    pub fn new(config: ContactConfig) -> Self {
        Self {
            config,
            contact_start_ms: None,
            accumulated_hold_ms: 0.0,
            latched: false,
        }
    }

    /// Feed one frame. Returns the current hold progress in ms.
    pub fn observe(&mut self, sample: Option<ContactSample>, now_ms: f64) -> f64 {
        if self.latched {
            return self.accumulated_hold_ms;
        }

        let holding = sample.is_some_and(|s| self.both_tips_in_band(&s));

        if holding {
            let start = *self.contact_start_ms.get_or_insert_with(|| {
                debug!(now_ms, "hold started, tips near lips");
                now_ms
            });
            self.accumulated_hold_ms = now_ms - start;
            if self.accumulated_hold_ms >= self.config.required_hold_ms {
                self.latched = true;
                info!(
                    hold_ms = self.accumulated_hold_ms,
                    "wafer taken to mouth, hold latch set"
                );
            }
        } else {
            if self.contact_start_ms.is_some() {
                debug!(now_ms, "hold reset");
            }
            self.contact_start_ms = None;
            self.accumulated_hold_ms = 0.0;
        }

        self.accumulated_hold_ms
    }

    fn both_tips_in_band(&self, sample: &ContactSample) -> bool {
        self.in_band(geometry::distance(sample.mouth_center, sample.index_tip))
            && self.in_band(geometry::distance(sample.mouth_center, sample.thumb_tip))
    }

    fn in_band(&self, distance_px: f64) -> bool {
        distance_px >= self.config.min_distance_px && distance_px <= self.config.max_distance_px
    }

    pub fn latched(&self) -> bool {
        self.latched
    }

    pub fn hold_progress_ms(&self) -> f64 {
        self.accumulated_hold_ms
    }
}
