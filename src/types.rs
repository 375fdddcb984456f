use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub presence: PresenceConfig,
    pub contact: ContactConfig,
    pub chew: ChewConfig,
    pub eating: EatingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceConfig {
    /// Primary-class probability a frame must exceed to count as a hit
    pub accept_threshold: f64,
    /// Consecutive accepting frames needed before the presence latch sets
    pub required_run_length: u32,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            accept_threshold: 0.8,
            required_run_length: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Inner radius of the acceptable tip-to-mouth band, pixels
    pub min_distance_px: f64,
    /// Outer radius of the acceptable tip-to-mouth band, pixels
    pub max_distance_px: f64,
    /// Contiguous in-band hold time required before the hold latch sets
    pub required_hold_ms: f64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            min_distance_px: 1.0,
            max_distance_px: 60.0,
            required_hold_ms: 100.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChewConfig {
    /// Openness ratio above which the mouth counts as open
    pub open_threshold: f64,
    /// Openness ratio below which the mouth counts as closed again.
    /// Lower than open_threshold; the gap between them is a dead band.
    pub close_threshold: f64,
}

impl Default for ChewConfig {
    fn default() -> Self {
        Self {
            open_threshold: 0.08,
            close_threshold: 0.04,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EatingConfig {
    /// Sliding window over chew events, milliseconds
    pub window_ms: f64,
    /// Chew events required inside the window to confirm eating
    pub chew_target: usize,
}

impl Default for EatingConfig {
    fn default() -> Self {
        Self {
            window_ms: 8000.0,
            chew_target: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// A 2-D point in the current frame's pixel coordinate space.
/// Recomputed every frame, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Per-frame classifier output for the two fixed classes
/// (target-present, target-absent). Probabilities are each in [0, 1]
/// but are not required to sum to 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassificationFrame {
    pub primary_prob: f64,
    pub secondary_prob: f64,
}

/// Composite session state exposed to the presentation layer,
/// recomputed every frame. Read-only from the consumer's side.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CompositeState {
    pub object_detected: bool,
    pub object_at_mouth: bool,
    pub eating_confirmed: bool,
    pub chew_count_in_window: usize,
    pub hold_progress_ms: f64,
    pub openness_ratio: f64,
}
