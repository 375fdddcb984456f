// src/detection/presence_gate.rs
//
// Debounces the per-frame wafer classifier into a one-shot latch.
// A frame counts as a hit when the primary class both beats the
// secondary class and clears the acceptance threshold; any miss resets
// the run. Once the latch sets, the classifier stage is done for the
// session and the orchestrator stops invoking it.

use crate::types::{ClassificationFrame, PresenceConfig};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum PresenceStatus {
    Searching {
        primary_prob: f64,
        consecutive_hits: u32,
        required: u32,
    },
    Latched,
}

impl PresenceStatus {
    /// Human-readable confidence label for the status display.
    pub fn confidence_label(&self) -> String {
        match self {
            PresenceStatus::Searching {
                primary_prob,
                consecutive_hits,
                required,
            } => format!(
                "Searching... wafer {:.1}% ({}/{})",
                primary_prob * 100.0,
                consecutive_hits,
                required
            ),
            PresenceStatus::Latched => "WAFER DETECTED".to_string(),
        }
    }
}

pub struct PresenceGate {
    config: PresenceConfig,
    consecutive_hits: u32,
    latched: bool,
}

impl PresenceGate {
    pub fn new(config: PresenceConfig) -> Self {
        Self {
            config,
            consecutive_hits: 0,
            latched: false,
        }
    }

    /// Feed one classification frame. No-op once latched.
    pub fn observe(&mut self, frame: ClassificationFrame) -> PresenceStatus {
        if self.latched {
            return PresenceStatus::Latched;
        }

        let accepted = frame.primary_prob > frame.secondary_prob
            && frame.primary_prob > self.config.accept_threshold;

        if accepted {
            self.consecutive_hits += 1;
            debug!(
                primary = frame.primary_prob,
                hits = self.consecutive_hits,
                "presence hit"
            );
        } else {
            self.consecutive_hits = 0;
        }

        if self.consecutive_hits >= self.config.required_run_length {
            self.latched = true;
            info!("wafer detected, presence latch set");
            return PresenceStatus::Latched;
        }

        PresenceStatus::Searching {
            primary_prob: frame.primary_prob,
            consecutive_hits: self.consecutive_hits,
            required: self.config.required_run_length,
        }
    }

    pub fn latched(&self) -> bool {
        self.latched
    }
}
