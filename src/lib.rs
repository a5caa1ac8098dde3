//! Blockscribe - transcript blocking and formatting
//!
//! Groups timestamped transcript fragments into readable blocks and
//! prefixes each block with a compact `minutes:seconds` header.

pub mod chunking;
pub mod config;
pub mod render;
pub mod transcript;
pub mod types;

use types::{FormatConfig, TimedFragment};

/// Format a fragment sequence into the final line sequence: block
/// headers interleaved with fragment text, ready for insertion into a
/// document.
///
/// Pure function of its inputs; formatting the same transcript twice
/// yields identical output. An empty input yields an empty output.
pub fn format_lines(fragments: &[TimedFragment], config: FormatConfig) -> Vec<String> {
    let boundaries = chunking::plan_blocks(fragments, config);
    render::render_lines(fragments, &boundaries)
}
