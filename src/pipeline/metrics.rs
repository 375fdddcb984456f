// src/pipeline/metrics.rs
//
// Per-session observability. The session is driven by a single call
// path, so plain counters are enough; there is nothing to share across
// threads.

use std::time::Instant;

#[derive(Debug)]
pub struct SessionMetrics {
    pub total_frames: u64,
    pub frames_with_classification: u64,
    pub frames_with_face: u64,
    pub frames_with_hand: u64,
    pub chew_events: u64,
    started_at: Instant,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            total_frames: 0,
            frames_with_classification: 0,
            frames_with_face: 0,
            frames_with_hand: 0,
            chew_events: 0,
            started_at: Instant::now(),
        }
    }

    pub fn fps(&self) -> f64 {
        let elapsed = self.started_at.elapsed().as_secs_f64();
        if elapsed > 0.01 {
            self.total_frames as f64 / elapsed
        } else {
            0.0
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "frames={} classified={} face={} hand={} chews={} fps={:.1}",
            self.total_frames,
            self.frames_with_classification,
            self.frames_with_face,
            self.frames_with_hand,
            self.chew_events,
            self.fps()
        )
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
