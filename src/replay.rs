// src/replay.rs
//
// Loads a recorded session as a JSONL trace, one FrameInput per line.
// Lets the decision core be replayed deterministically without the
// camera or the upstream models.

use crate::pipeline::frame_context::FrameInput;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn load_trace(path: impl AsRef<Path>) -> Result<Vec<FrameInput>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading trace file {}", path.display()))?;

    let mut frames = Vec::new();
    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let frame: FrameInput = serde_json::from_str(line)
            .with_context(|| format!("parsing {} line {}", path.display(), line_no + 1))?;
        frames.push(frame);
    }
    Ok(frames)
}
