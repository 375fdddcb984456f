// src/detection/chew_cycle.rs
//
// Open/closed hysteresis over the per-frame mouth openness ratio.
// Distinct enter/leave thresholds keep the machine from chattering when
// the ratio hovers near a single boundary; the range between them holds
// the current state. A chew is the Open→Closed edge, counted only once
// the wafer-at-mouth latch has granted eligibility.

use crate::types::ChewConfig;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouthState {
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChewEvent {
    pub timestamp_ms: f64,
}

pub struct ChewCycleDetector {
    config: ChewConfig,
    state: MouthState,
}

impl ChewCycleDetector {
    pub fn new(config: ChewConfig) -> Self {
        Self {
            config,
            state: MouthState::Closed,
        }
    }

    /// Feed one openness sample. Emits an event only on the Open→Closed
    /// edge, and only while eligible; ineligible edges are dropped and
    /// never credited later.
    pub fn observe(&mut self, openness_ratio: f64, now_ms: f64, eligible: bool) -> Option<ChewEvent> {
        match self.state {
            MouthState::Closed if openness_ratio > self.config.open_threshold => {
                self.state = MouthState::Open;
                debug!(openness_ratio, "mouth opened");
                None
            }
            MouthState::Open if openness_ratio < self.config.close_threshold => {
                self.state = MouthState::Closed;
                debug!(openness_ratio, eligible, "mouth closed");
                eligible.then_some(ChewEvent {
                    timestamp_ms: now_ms,
                })
            }
            // Dead band or no threshold crossed: hold the current state.
            _ => None,
        }
    }

    pub fn state(&self) -> MouthState {
        self.state
    }
}
