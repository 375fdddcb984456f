// src/pipeline/orchestrator.rs
//
// Drives the three verification stages once per frame, in fixed order,
// with strict latch precedence: until the wafer is sighted nothing else
// runs, and no latch ever clears for the lifetime of the session.

use crate::detection::{
    ChewCycleDetector, ContactHoldTracker, ContactSample, EatingWindowCounter, PresenceGate,
};
use crate::geometry::GeometryError;
use crate::pipeline::frame_context::FrameInput;
use crate::pipeline::metrics::SessionMetrics;
use crate::types::{CompositeState, Config};

pub struct SessionOrchestrator {
    presence: PresenceGate,
    contact: ContactHoldTracker,
    chew: ChewCycleDetector,
    eating: EatingWindowCounter,
    metrics: SessionMetrics,
}

impl SessionOrchestrator {
    pub fn new(config: &Config) -> Self {
        Self {
            presence: PresenceGate::new(config.presence.clone()),
            contact: ContactHoldTracker::new(config.contact.clone()),
            chew: ChewCycleDetector::new(config.chew.clone()),
            eating: EatingWindowCounter::new(config.eating.clone()),
            metrics: SessionMetrics::new(),
        }
    }

    /// One full pass for one frame. Returns the composite state the
    /// presentation layer renders from.
    pub fn process_frame(&mut self, input: &FrameInput) -> Result<CompositeState, GeometryError> {
        let now_ms = input.timestamp_ms;
        self.metrics.total_frames += 1;
        if input.has_face() {
            self.metrics.frames_with_face += 1;
        }
        if input.has_hand() {
            self.metrics.frames_with_hand += 1;
        }

        // Stage 1: wafer sighting. Until this latches, the face and hand
        // stages stay idle (upstream does not even run those models).
        if !self.presence.latched() {
            if let Some(classification) = input.classification {
                self.metrics.frames_with_classification += 1;
                self.presence.observe(classification);
            }
            return Ok(self.pre_sighting_state());
        }

        // Stage 2: mouth geometry. No face this frame means no mouth
        // data, which breaks any contact run in progress.
        let mouth = match &input.face {
            Some(lips) => Some((lips.mouth_center()?, lips.openness_ratio())),
            None => None,
        };

        // Stage 3: wafer-to-mouth hold, fed the absent sample whenever
        // either the hand or the mouth is missing.
        let contact_sample = match (&input.hand, &mouth) {
            (Some(tips), Some((center, _))) => Some(ContactSample {
                mouth_center: *center,
                index_tip: tips.index_tip,
                thumb_tip: tips.thumb_tip,
            }),
            _ => None,
        };
        let hold_progress_ms = self.contact.observe(contact_sample, now_ms);

        // Stage 4: chew cycles, counted only once the hold latch is set.
        let mut openness_ratio = 0.0;
        if let Some((_, openness)) = mouth {
            openness_ratio = openness;
            let eligible = self.contact.latched();
            if let Some(event) = self.chew.observe(openness, now_ms, eligible) {
                self.metrics.chew_events += 1;
                self.eating.record(event.timestamp_ms);
            }
        }
        // Evaluate every frame, not just on chew events: it is idempotent,
        // the latch is sticky, and it keeps the window count current for
        // the display even while no chews arrive.
        self.eating.evaluate(now_ms);

        Ok(CompositeState {
            object_detected: true,
            object_at_mouth: self.contact.latched(),
            eating_confirmed: self.eating.latched(),
            chew_count_in_window: self.eating.count_in_window(),
            hold_progress_ms,
            openness_ratio,
        })
    }

    fn pre_sighting_state(&self) -> CompositeState {
        CompositeState {
            object_detected: self.presence.latched(),
            object_at_mouth: false,
            eating_confirmed: false,
            chew_count_in_window: 0,
            hold_progress_ms: 0.0,
            openness_ratio: 0.0,
        }
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }
}
