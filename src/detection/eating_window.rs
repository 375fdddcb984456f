// src/detection/eating_window.rs
//
// Sliding-window count of chew events. Timestamps arrive in
// non-decreasing order, so the log prunes lazily from the front. The
// window count is only the trigger for the eating latch, not a live
// gate: once set, the latch survives the window emptying. The log keeps
// pruning after that purely so the display count stays honest.

use crate::types::EatingConfig;
use std::collections::VecDeque;
use tracing::info;

pub struct EatingWindowCounter {
    config: EatingConfig,
    events: VecDeque<f64>,
    latched: bool,
}

impl EatingWindowCounter {
    pub fn new(config: EatingConfig) -> Self {
        Self {
            config,
            events: VecDeque::new(),
            latched: false,
        }
    }

    /// Append one chew event timestamp.
    pub fn record(&mut self, timestamp_ms: f64) {
        self.events.push_back(timestamp_ms);
        self.prune(timestamp_ms);
    }

    /// Re-check the latch condition against the current window contents.
    /// Idempotent for a fixed `now` with no intervening `record`.
    pub fn evaluate(&mut self, now_ms: f64) -> bool {
        self.prune(now_ms);
        if !self.latched && self.events.len() >= self.config.chew_target {
            self.latched = true;
            info!(
                chews = self.events.len(),
                window_ms = self.config.window_ms,
                "eating confirmed"
            );
        }
        self.latched
    }

    fn prune(&mut self, now_ms: f64) {
        let cutoff = now_ms - self.config.window_ms;
        while self.events.front().is_some_and(|&ts| ts < cutoff) {
            self.events.pop_front();
        }
    }

    pub fn latched(&self) -> bool {
        self.latched
    }

    /// Events currently inside the window, for display.
    pub fn count_in_window(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter_with_target(chew_target: usize) -> EatingWindowCounter {
        EatingWindowCounter::new(EatingConfig {
            window_ms: 8000.0,
            chew_target,
        })
    }

    #[test]
    fn single_event_latches_with_target_one() {
        // Scenario: one chew at t=0, target 1, 8 s window.
        let mut counter = counter_with_target(1);
        counter.record(0.0);
        assert!(counter.evaluate(0.0));
        assert!(counter.latched());
    }

    #[test]
    fn latch_requires_target_events_inside_the_window() {
        let mut counter = counter_with_target(3);
        counter.record(0.0);
        counter.record(1000.0);
        assert!(!counter.evaluate(1000.0));

        // Third chew lands 9 s after the first; the first has aged out,
        // so only two remain in the window.
        counter.record(9000.0);
        assert!(!counter.evaluate(9000.0));
        assert_eq!(counter.count_in_window(), 2);

        counter.record(9500.0);
        assert!(counter.evaluate(9500.0));
    }

    #[test]
    fn latch_survives_the_window_emptying() {
        let mut counter = counter_with_target(1);
        counter.record(0.0);
        assert!(counter.evaluate(0.0));

        assert!(counter.evaluate(60_000.0));
        assert_eq!(counter.count_in_window(), 0);
        assert!(counter.latched());
    }

    #[test]
    fn evaluate_is_idempotent() {
        let mut counter = counter_with_target(2);
        counter.record(0.0);
        for _ in 0..5 {
            assert!(!counter.evaluate(100.0));
        }
        assert_eq!(counter.count_in_window(), 1);
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let mut counter = counter_with_target(2);
        counter.record(0.0);
        // Exactly WINDOW_MS old: still retained.
        assert!(!counter.evaluate(8000.0));
        assert_eq!(counter.count_in_window(), 1);
        // One ms past the window: pruned.
        assert!(!counter.evaluate(8001.0));
        assert_eq!(counter.count_in_window(), 0);
    }

    #[test]
    fn display_count_keeps_pruning_after_latch() {
        let mut counter = counter_with_target(1);
        counter.record(0.0);
        assert!(counter.evaluate(0.0));

        counter.record(5000.0);
        assert_eq!(counter.count_in_window(), 2);
        assert!(counter.evaluate(20_000.0));
        assert_eq!(counter.count_in_window(), 0);
    }
}
