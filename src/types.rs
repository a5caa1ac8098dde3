//! Core types for the blockscribe formatting pipeline

use anyhow::{ensure, Result};
use serde::Deserialize;

/// A single timestamped unit of transcript text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedFragment {
    pub text: String,
    /// Start time relative to the recording, in milliseconds.
    /// Expected to be non-decreasing across a transcript.
    pub offset_ms: u64,
    /// Spoken length of the fragment in milliseconds
    pub duration_ms: u64,
}

/// A contiguous run of fragments grouped under one displayed timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockBoundary {
    /// Offset of the block's first fragment; the displayed header is
    /// computed from this instant.
    pub start_offset_ms: u64,
    /// Indices of the fragments that belong to this block
    pub fragment_ids: Vec<usize>,
}

/// Configuration for the block planner
#[derive(Debug, Clone, Copy)]
pub struct FormatConfig {
    /// Minimum accumulated spoken duration (seconds) a block must reach
    /// before the next fragment opens a new block. Values <= 0.0 make
    /// every fragment open its own block.
    pub interval_seconds: f64,
}

/// Default header spacing: roughly every 10 seconds of spoken content
pub const DEFAULT_INTERVAL_SECONDS: f64 = 10.0;

impl FormatConfig {
    pub fn new(interval_seconds: f64) -> Self {
        Self { interval_seconds }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_SECONDS)
    }
}

/// Runtime transcript parsed from JSON input
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeTranscript {
    #[serde(alias = "lines")]
    pub fragments: Vec<RuntimeFragment>,
}

impl RuntimeTranscript {
    pub fn validate(&self) -> Result<()> {
        for (idx, fragment) in self.fragments.iter().enumerate() {
            fragment.validate(idx)?;
        }
        Ok(())
    }

    pub fn to_fragments(&self) -> Vec<TimedFragment> {
        self.fragments
            .iter()
            .map(RuntimeFragment::to_timed_fragment)
            .collect()
    }
}

/// Runtime transcript entry parsed from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeFragment {
    pub text: String,
    #[serde(alias = "offset", alias = "offsetMs")]
    pub offset_ms: u64,
    #[serde(alias = "duration", alias = "durationMs")]
    pub duration_ms: u64,
}

impl RuntimeFragment {
    fn validate(&self, index: usize) -> Result<()> {
        ensure!(
            !self.text.is_empty(),
            "Transcript fragment {} has empty text",
            index
        );
        Ok(())
    }

    fn to_timed_fragment(&self) -> TimedFragment {
        TimedFragment {
            text: self.text.clone(),
            offset_ms: self.offset_ms,
            duration_ms: self.duration_ms,
        }
    }
}
