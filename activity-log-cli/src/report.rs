//! Report rendering
//!
//! Turns the scan outcome into a text or JSON report. The absent outcome is
//! rendered explicitly so a missing window is never mistaken for an empty
//! one.

use crate::config::OutputFormat;
use activity_log_core::ActivityWindow;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Render the scan outcome in the requested format
pub fn render(window: Option<&ActivityWindow>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(window),
        OutputFormat::Json => render_json(window),
    }
}

fn render_text(window: Option<&ActivityWindow>) -> String {
    match window {
        Some(w) => format!(
            "Window found\n  start:    {}\n  end:      {}\n  duration: {} s\n",
            w.start_time.to_rfc3339(),
            w.end_time.to_rfc3339(),
            w.duration.num_seconds()
        ),
        None => "No window found: not enough matching records\n".to_string(),
    }
}

fn render_json(window: Option<&ActivityWindow>) -> String {
    // A missing window serializes as null, never as a zeroed window
    let value = serde_json::json!({ "window": window });
    // json! never produces a map with non-string keys
    let mut rendered = serde_json::to_string_pretty(&value).unwrap_or_default();
    rendered.push('\n');
    rendered
}

/// Write the rendered report to a file, or to stdout when no path is given
pub fn write_report(report: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, report)
                .with_context(|| format!("Failed to write report to {:?}", path))?;
            log::info!("Report written to {:?}", path);
        }
        None => print!("{}", report),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use activity_log_core::EventRecord;
    use chrono::{TimeZone, Utc};

    fn sample_window() -> ActivityWindow {
        let first = EventRecord::new(1, Utc.timestamp_opt(0, 0).unwrap());
        let last = EventRecord::new(1, Utc.timestamp_opt(12, 0).unwrap());
        ActivityWindow::spanning(&first, &last)
    }

    #[test]
    fn test_text_report_contains_boundaries() {
        let window = sample_window();
        let report = render(Some(&window), OutputFormat::Text);
        assert!(report.contains("1970-01-01T00:00:00+00:00"));
        assert!(report.contains("1970-01-01T00:00:12+00:00"));
        assert!(report.contains("12 s"));
    }

    #[test]
    fn test_text_report_absent_window() {
        let report = render(None, OutputFormat::Text);
        assert!(report.contains("No window found"));
    }

    #[test]
    fn test_json_report_round_trips() {
        let window = sample_window();
        let report = render(Some(&window), OutputFormat::Json);

        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["window"]["duration_secs"], 12);

        // Timestamps come out as RFC 3339 strings; compare the instants
        // rather than pinning the exact offset spelling.
        let start = chrono::DateTime::parse_from_rfc3339(
            value["window"]["start_time"].as_str().unwrap(),
        )
        .unwrap();
        assert_eq!(start.to_utc(), window.start_time);
        let end = chrono::DateTime::parse_from_rfc3339(
            value["window"]["end_time"].as_str().unwrap(),
        )
        .unwrap();
        assert_eq!(end.to_utc(), window.end_time);
    }

    #[test]
    fn test_json_report_absent_window_is_null() {
        let report = render(None, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert!(value["window"].is_null());
    }
}
