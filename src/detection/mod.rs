// src/detection/mod.rs

pub mod chew_cycle;
pub mod contact_hold;
pub mod eating_window;
pub mod presence_gate;

pub use chew_cycle::{ChewCycleDetector, ChewEvent, MouthState};
pub use contact_hold::{ContactHoldTracker, ContactSample};
pub use eating_window::EatingWindowCounter;
pub use presence_gate::{PresenceGate, PresenceStatus};
