// src/pipeline/mod.rs

pub mod frame_context;
pub mod metrics;
pub mod orchestrator;

pub use frame_context::FrameInput;
pub use metrics::SessionMetrics;
pub use orchestrator::SessionOrchestrator;
