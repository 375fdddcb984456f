// src/main.rs

mod config;
mod detection;
mod geometry;
mod landmarks;
mod pipeline;
mod replay;
mod types;

use anyhow::{Context, Result};
use pipeline::SessionOrchestrator;
use tracing::info;
use types::{CompositeState, Config};

fn main() -> Result<()> {
    let config = Config::load("config.yaml").unwrap_or_else(|_| {
        eprintln!("config.yaml not found, using built-in defaults");
        Config::default()
    });

    tracing_subscriber::fmt()
        .with_env_filter(format!("intake_detection={}", config.logging.level))
        .init();

    info!("intake detection session starting");
    info!(
        accept_threshold = config.presence.accept_threshold,
        run_length = config.presence.required_run_length,
        hold_ms = config.contact.required_hold_ms,
        chew_target = config.eating.chew_target,
        "thresholds loaded"
    );

    let trace_path = std::env::args()
        .nth(1)
        .context("usage: intake-detection <trace.jsonl>")?;
    let frames = replay::load_trace(&trace_path)?;
    info!(frames = frames.len(), trace = %trace_path, "trace loaded");

    let mut session = SessionOrchestrator::new(&config);
    let mut last_state: Option<CompositeState> = None;

    for frame in &frames {
        let state = session
            .process_frame(frame)
            .with_context(|| format!("processing frame at t={}ms", frame.timestamp_ms))?;

        let changed = |get: fn(&CompositeState) -> bool| {
            get(&state) && !last_state.as_ref().is_some_and(get)
        };
        if changed(|s| s.object_detected) {
            info!(t_ms = frame.timestamp_ms, "step 1 complete: wafer detected");
        }
        if changed(|s| s.object_at_mouth) {
            info!(t_ms = frame.timestamp_ms, "step 2 complete: wafer taken to mouth");
        }
        if changed(|s| s.eating_confirmed) {
            info!(t_ms = frame.timestamp_ms, "step 3 complete: eating confirmed");
        }
        last_state = Some(state);
    }

    info!(summary = %session.metrics().summary(), "session finished");
    if let Some(state) = last_state {
        println!("{}", serde_json::to_string_pretty(&state)?);
    }
    Ok(())
}
