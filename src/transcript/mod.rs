//! Transcript loading - parses timed fragments from JSON sources
//!
//! Accepts either a bare JSON array of fragments or an object wrapping
//! them in a `fragments` (or `lines`) field; per-field spellings from
//! upstream transcript sources (`offset`/`offsetMs`, `duration`/
//! `durationMs`) are handled by serde aliases on the runtime types.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::warn;

use crate::types::RuntimeTranscript;

/// Load a transcript from a file path or an inline JSON string.
pub fn load_transcript(path: Option<&Path>, json: Option<&str>) -> Result<RuntimeTranscript> {
    if let Some(p) = path {
        let data = fs::read_to_string(p)
            .with_context(|| format!("Failed to read transcript file {:?}", p))?;
        return parse_runtime_transcript(&data);
    }

    if let Some(raw) = json {
        return parse_runtime_transcript(raw);
    }

    bail!("No transcript source provided"); // Should not happen due to validation
}

/// Parse transcript JSON in either the array or the object form.
pub fn parse_runtime_transcript(raw: &str) -> Result<RuntimeTranscript> {
    let transcript = if raw.trim_start().starts_with('[') {
        let fragments = serde_json::from_str(raw).context("Failed to parse transcript JSON")?;
        RuntimeTranscript { fragments }
    } else {
        serde_json::from_str(raw).context("Failed to parse transcript JSON")?
    };
    check_offset_order(&transcript);
    Ok(transcript)
}

/// Fragments are expected to arrive ordered by offset. Out-of-order
/// input still formats, but the emitted header labels stop increasing,
/// so surface it instead of failing.
fn check_offset_order(transcript: &RuntimeTranscript) {
    let out_of_order = transcript
        .fragments
        .windows(2)
        .any(|pair| pair[1].offset_ms < pair[0].offset_ms);
    if out_of_order {
        warn!("transcript offsets are not in non-decreasing order; headers will follow the input order");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_form() {
        let raw = r#"[
            {"text": "Hello", "offset": 0, "duration": 2000},
            {"text": "world", "offset": 2000, "duration": 9000}
        ]"#;
        let transcript = parse_runtime_transcript(raw).unwrap();
        assert_eq!(transcript.fragments.len(), 2);
        assert_eq!(transcript.fragments[0].text, "Hello");
        assert_eq!(transcript.fragments[1].offset_ms, 2000);
    }

    #[test]
    fn parses_object_form_with_lines_alias() {
        let raw = r#"{"lines": [{"text": "Hi", "offsetMs": 500, "durationMs": 1200}]}"#;
        let transcript = parse_runtime_transcript(raw).unwrap();
        assert_eq!(transcript.fragments.len(), 1);
        assert_eq!(transcript.fragments[0].offset_ms, 500);
        assert_eq!(transcript.fragments[0].duration_ms, 1200);
    }

    #[test]
    fn rejects_negative_offsets_at_parse_time() {
        let raw = r#"[{"text": "bad", "offset": -1, "duration": 100}]"#;
        assert!(parse_runtime_transcript(raw).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        let result = parse_runtime_transcript("not json");
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Failed to parse transcript JSON"));
    }

    #[test]
    fn empty_array_is_a_valid_transcript() {
        let transcript = parse_runtime_transcript("[]").unwrap();
        assert!(transcript.fragments.is_empty());
        assert!(transcript.validate().is_ok());
    }

    #[test]
    fn validation_rejects_empty_text() {
        let raw = r#"[{"text": "", "offset": 0, "duration": 100}]"#;
        let transcript = parse_runtime_transcript(raw).unwrap();
        assert!(transcript.validate().is_err());
    }
}
