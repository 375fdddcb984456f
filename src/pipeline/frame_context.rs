// src/pipeline/frame_context.rs
//
// Single source of truth for one frame's detector outputs. Every stage
// reads from the same bundle instead of stale cached values, which keeps
// the face and hand results temporally aligned with the timestamp they
// were captured at.

use crate::landmarks::{HandTips, LipLandmarks};
use crate::types::ClassificationFrame;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameInput {
    /// Monotonic capture timestamp, milliseconds. Non-decreasing across
    /// frames; the core never reads a clock of its own.
    pub timestamp_ms: f64,

    /// Wafer classifier output, when that stage ran this frame.
    #[serde(default)]
    pub classification: Option<ClassificationFrame>,

    /// Lip landmarks, absent when no face was found this frame.
    #[serde(default)]
    pub face: Option<LipLandmarks>,

    /// Fingertips, absent when no hand was found this frame.
    #[serde(default)]
    pub hand: Option<HandTips>,
}

impl FrameInput {
    pub fn has_face(&self) -> bool {
        self.face.is_some()
    }

    pub fn has_hand(&self) -> bool {
        self.hand.is_some()
    }
}
