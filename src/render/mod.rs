//! Document assembly - expands planned blocks into output lines and
//! writes the result

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::chunking::timestamp::block_header;
use crate::types::{BlockBoundary, TimedFragment};

/// Expand planned blocks into the final line sequence: one header line
/// per block followed by each member fragment's text on its own line.
pub fn render_lines(fragments: &[TimedFragment], boundaries: &[BlockBoundary]) -> Vec<String> {
    let mut lines = Vec::new();
    for boundary in boundaries {
        lines.push(block_header(boundary.start_offset_ms));
        for &idx in &boundary.fragment_ids {
            lines.push(fragments[idx].text.clone());
        }
    }
    lines
}

/// Write the document to a file, or to stdout when no path is given.
/// Every line is followed by a line break.
pub fn write_document(lines: &[String], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let mut document = String::new();
            for line in lines {
                document.push_str(line);
                document.push('\n');
            }
            fs::write(path, document)
                .with_context(|| format!("Failed to write document to {:?}", path))
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            for line in lines {
                writeln!(handle, "{}", line).context("Failed to write document to stdout")?;
            }
            Ok(())
        }
    }
}
