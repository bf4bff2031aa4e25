//! CSV log import and row parsing
//!
//! This layer turns a log file into the clean, ordered `EventRecord`
//! sequence the core expects: read the file, split it into rows, parse each
//! row, and drop malformed rows with a warning so they never reach the
//! scanner.
//!
//! Row format: `activity_id,timestamp` per line. The timestamp field is
//! either Unix epoch seconds (integer or fractional) or an RFC 3339 string.

use activity_log_core::types::{AnalyzerError, Result};
use activity_log_core::{EventRecord, Timestamp};
use anyhow::Context;
use chrono::DateTime;
use std::fs;
use std::path::Path;

/// Read a log file and split it into trimmed, non-empty rows in file order
pub fn import_file(path: &Path) -> anyhow::Result<Vec<String>> {
    log::info!("Importing log file: {:?}", path);

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read log file {:?}", path))?;

    let rows: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    log::info!("Imported {} rows from {:?}", rows.len(), path);
    Ok(rows)
}

/// Parse one CSV row into an event record.
///
/// `line_no` is the 1-based position in the file, used only for error
/// reporting.
pub fn parse_row(row: &str, line_no: usize) -> Result<EventRecord> {
    let mut fields = row.split(',').map(str::trim);

    let id_field = fields.next().filter(|f| !f.is_empty()).ok_or_else(|| {
        AnalyzerError::RowParse {
            line: line_no,
            reason: "missing activity id field".to_string(),
        }
    })?;
    let ts_field = fields.next().filter(|f| !f.is_empty()).ok_or_else(|| {
        AnalyzerError::RowParse {
            line: line_no,
            reason: "missing timestamp field".to_string(),
        }
    })?;

    let activity_id: i64 = id_field.parse().map_err(|_| AnalyzerError::RowParse {
        line: line_no,
        reason: format!("invalid activity id: {:?}", id_field),
    })?;

    let timestamp = parse_timestamp(ts_field).ok_or_else(|| AnalyzerError::RowParse {
        line: line_no,
        reason: format!("invalid timestamp: {:?}", ts_field),
    })?;

    Ok(EventRecord::new(activity_id, timestamp))
}

/// Parse every row, dropping malformed ones with a warning.
///
/// The core assumes a clean input sequence, so filtering happens here and
/// nowhere downstream.
pub fn parse_records(rows: &[String]) -> Vec<EventRecord> {
    let mut records = Vec::with_capacity(rows.len());
    let mut dropped = 0usize;

    for (idx, row) in rows.iter().enumerate() {
        match parse_row(row, idx + 1) {
            Ok(record) => records.push(record),
            Err(e) => {
                log::warn!("Skipping malformed row: {}", e);
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        log::warn!("{} of {} rows were malformed and dropped", dropped, rows.len());
    }
    log::debug!("Parsed {} event records", records.len());
    records
}

/// Accept epoch seconds (integer or fractional) or RFC 3339
fn parse_timestamp(field: &str) -> Option<Timestamp> {
    if let Ok(secs) = field.parse::<i64>() {
        return DateTime::from_timestamp(secs, 0);
    }
    if let Ok(secs) = field.parse::<f64>() {
        // Floor, not trunc: the sub-second part must stay non-negative so
        // values before the epoch keep their exact instant.
        let whole = secs.floor();
        let nanos = ((secs - whole) * 1_000_000_000.0) as u32;
        return DateTime::from_timestamp(whole as i64, nanos);
    }
    DateTime::parse_from_rfc3339(field)
        .ok()
        .map(|dt| dt.to_utc())
}
