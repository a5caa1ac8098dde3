use anyhow::{ensure, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use blockscribe::config::Settings;
use blockscribe::types::{FormatConfig, TimedFragment};
use blockscribe::{chunking, render, transcript};

/// Blockscribe - Transcript blocking and formatting tool
///
/// Reads a transcript of timestamped text fragments, groups the
/// fragments into readable blocks by accumulated spoken duration, and
/// prefixes each block with a compact relative timestamp.
#[derive(Parser, Debug)]
#[command(name = "blockscribe")]
#[command(version = "0.1.0")]
#[command(about = "Transcript blocking and formatting tool", long_about = None)]
struct Args {
    /// Input transcript file (JSON array of timed fragments)
    #[arg(value_name = "TRANSCRIPT")]
    input_file: Option<PathBuf>,

    /// Inline JSON transcript (alternative to the file argument)
    #[arg(long, value_name = "JSON", conflicts_with = "input_file")]
    transcript_json: Option<String>,

    /// Output file path; the document is printed to stdout when omitted
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Header interval in seconds of accumulated spoken content
    /// (overrides the settings file)
    #[arg(long, value_name = "SECONDS")]
    interval: Option<f64>,

    /// Path to a JSON settings file
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Optional trim start time (seconds or HH:MM:SS.mmm)
    #[arg(long, value_name = "TIME")]
    start: Option<String>,

    /// Optional trim end time (seconds or HH:MM:SS.mmm)
    #[arg(long, value_name = "TIME")]
    end: Option<String>,
}

impl Args {
    /// Validate CLI arguments
    fn validate(&self) -> Result<()> {
        if self.input_file.is_none() && self.transcript_json.is_none() {
            anyhow::bail!("Provide a transcript file or --transcript-json");
        }

        if let Some(path) = &self.input_file {
            if !path.exists() {
                anyhow::bail!("Transcript file does not exist: {:?}", path);
            }
            if !path.is_file() {
                anyhow::bail!("Transcript path is not a file: {:?}", path);
            }
        }

        if let Some(interval) = self.interval {
            if interval <= 0.0 {
                anyhow::bail!("Header interval must be positive, got: {}", interval);
            }
        }

        Ok(())
    }

    fn trim_range(&self) -> Result<(Option<u64>, Option<u64>)> {
        let start = parse_optional_time(self.start.as_deref(), "start")?;
        let end = parse_optional_time(self.end.as_deref(), "end")?;

        if let (Some(s), Some(e)) = (start, end) {
            ensure!(e > s, "End time must be greater than start time");
        }

        Ok((start, end))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Validate arguments
    args.validate()
        .context("Failed to validate command-line arguments")?;

    // Pipeline progress goes to stderr so stdout stays a clean document
    eprintln!("Blockscribe v0.1.0 - Transcript Formatter");
    if let Some(path) = &args.input_file {
        eprintln!("Input:  {:?}", path);
    }

    let settings =
        Settings::from_override(args.settings.as_deref()).context("Failed to load settings")?;
    let interval_seconds = args.interval.unwrap_or(settings.interval_seconds);
    eprintln!("Header interval: {} seconds", interval_seconds);

    let (trim_start, trim_end) = args.trim_range()?;
    if let Some(start) = trim_start {
        eprintln!("Trim start: {:.3} seconds", start as f64 / 1000.0);
    }
    if let Some(end) = trim_end {
        eprintln!("Trim end: {:.3} seconds", end as f64 / 1000.0);
    }

    // Pipeline implementation
    eprintln!("\n1. Loading transcript...");
    let runtime = transcript::load_transcript(
        args.input_file.as_deref(),
        args.transcript_json.as_deref(),
    )
    .context("Failed to load transcript")?;
    runtime.validate().context("Transcript validation failed")?;
    let mut fragments = runtime.to_fragments();
    eprintln!("   Loaded {} fragments", fragments.len());

    if trim_start.is_some() || trim_end.is_some() {
        fragments = trim_fragments(fragments, trim_start, trim_end);
        eprintln!("   {} fragments within trim range", fragments.len());
    }

    if fragments.is_empty() {
        eprintln!("\nNothing to format; no output written.");
        return Ok(());
    }

    eprintln!("\n2. Planning blocks...");
    let config = FormatConfig::new(interval_seconds);
    let boundaries = chunking::plan_blocks(&fragments, config);
    eprintln!("   Grouped {} fragments into {} blocks", fragments.len(), boundaries.len());

    eprintln!("\n3. Rendering document...");
    let lines = render::render_lines(&fragments, &boundaries);
    eprintln!("   Rendered {} lines", lines.len());

    render::write_document(&lines, args.output.as_deref())?;
    if let Some(path) = &args.output {
        eprintln!("   Wrote document to {:?}", path);
    }

    eprintln!("\n✓ Formatting complete!");

    Ok(())
}

/// Keep fragments whose offset lies in [start, end). Offsets stay
/// recording-relative, so headers of a trimmed transcript still show
/// the original recording clock.
fn trim_fragments(
    fragments: Vec<TimedFragment>,
    start_ms: Option<u64>,
    end_ms: Option<u64>,
) -> Vec<TimedFragment> {
    let start = start_ms.unwrap_or(0);
    fragments
        .into_iter()
        .filter(|fragment| {
            fragment.offset_ms >= start && end_ms.map_or(true, |end| fragment.offset_ms < end)
        })
        .collect()
}

fn parse_optional_time(value: Option<&str>, label: &str) -> Result<Option<u64>> {
    match value {
        Some(raw) => {
            let millis = parse_time_to_millis(raw)
                .with_context(|| format!("Invalid {} time '{}'", label, raw))?;
            Ok(Some(millis))
        }
        None => Ok(None),
    }
}

fn parse_time_to_millis(raw: &str) -> Result<u64> {
    let seconds = if raw.contains(':') {
        parse_hms_time(raw)?
    } else {
        let value: f64 = raw
            .parse()
            .with_context(|| format!("Failed to parse seconds value '{}'", raw))?;
        ensure!(value >= 0.0, "Time values must be non-negative");
        value
    };
    Ok((seconds * 1000.0).round() as u64)
}

fn parse_hms_time(raw: &str) -> Result<f64> {
    let parts: Vec<&str> = raw.split(':').collect();
    ensure!(
        (2..=3).contains(&parts.len()),
        "Time format must be MM:SS or HH:MM:SS"
    );

    let seconds = parts
        .last()
        .unwrap()
        .parse::<f64>()
        .with_context(|| format!("Invalid seconds component '{}'", parts.last().unwrap()))?;
    let minutes = parts[parts.len() - 2]
        .parse::<f64>()
        .with_context(|| format!("Invalid minutes component '{}'", parts[parts.len() - 2]))?;
    ensure!(minutes >= 0.0, "Minutes must be non-negative");
    ensure!(seconds >= 0.0, "Seconds must be non-negative");

    let hours = if parts.len() == 3 {
        let value = parts[0]
            .parse::<f64>()
            .with_context(|| format!("Invalid hours component '{}'", parts[0]))?;
        ensure!(value >= 0.0, "Hours must be non-negative");
        value
    } else {
        0.0
    };

    Ok(hours * 3600.0 + minutes * 60.0 + seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_time_seconds() {
        let result = parse_optional_time(Some("12.5"), "start").unwrap();
        assert_eq!(result, Some(12_500));
    }

    #[test]
    fn parse_time_hms() {
        let result = parse_optional_time(Some("01:02:03.5"), "end").unwrap();
        assert_eq!(result, Some(3_723_500));
    }

    #[test]
    fn parse_time_rejects_negative() {
        assert!(parse_optional_time(Some("-3"), "start").is_err());
    }

    #[test]
    fn trim_keeps_half_open_range() {
        let fragments = vec![
            TimedFragment {
                text: "a".to_string(),
                offset_ms: 0,
                duration_ms: 1000,
            },
            TimedFragment {
                text: "b".to_string(),
                offset_ms: 2000,
                duration_ms: 1000,
            },
            TimedFragment {
                text: "c".to_string(),
                offset_ms: 4000,
                duration_ms: 1000,
            },
        ];

        let trimmed = trim_fragments(fragments, Some(2000), Some(4000));
        assert_eq!(trimmed.len(), 1);
        assert_eq!(trimmed[0].text, "b");
    }

    #[test]
    fn test_verify_cli_args_compile() {
        // This test just ensures Args can be constructed
        let args = Args {
            input_file: Some(PathBuf::from("transcript.json")),
            transcript_json: None,
            output: None,
            interval: Some(10.0),
            settings: None,
            start: None,
            end: None,
        };

        assert_eq!(args.interval, Some(10.0));
    }
}
