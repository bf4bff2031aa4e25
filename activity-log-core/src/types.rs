//! Core types for the activity log analysis library
//!
//! This module defines the value types that flow through a scan: the parsed
//! event record, the reported activity window, and the library error enum.
//! All of them are plain immutable values - nothing in the library mutates a
//! record after the row parser has produced it.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::fmt;

/// Timestamp type used throughout the analyzer
pub type Timestamp = DateTime<Utc>;

/// Result type for analyzer operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// One parsed row of the input log: an activity identifier and the moment
/// it was observed.
///
/// Records are produced once by the row parser, collected into an ordered
/// sequence (file order, non-decreasing timestamps), and handed to the
/// scanner read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRecord {
    /// Identifier of the activity this event belongs to
    pub activity_id: i64,
    /// Absolute timestamp of the event
    pub timestamp: Timestamp,
}

impl EventRecord {
    /// Create a new event record
    pub fn new(activity_id: i64, timestamp: Timestamp) -> Self {
        Self {
            activity_id,
            timestamp,
        }
    }

    /// Signed interval between this record and `other`
    /// (`self.timestamp - other.timestamp`, positive when `self` is later)
    pub fn time_since(&self, other: &EventRecord) -> Duration {
        self.timestamp - other.timestamp
    }
}

/// The time window reported by a completed scan
///
/// Constructed only through [`ActivityWindow::spanning`], so
/// `duration == end_time - start_time` holds for every instance.
/// "No window found" is represented as `Option::None` by the scanner,
/// never as a zero-valued window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityWindow {
    /// Timestamp of the oldest record in the window
    pub start_time: Timestamp,
    /// Timestamp of the newest record in the window
    pub end_time: Timestamp,
    /// `end_time - start_time`, non-negative for ordered input
    #[serde(rename = "duration_secs", serialize_with = "serialize_duration_secs")]
    pub duration: Duration,
}

/// Serialize a duration as whole seconds for report output
fn serialize_duration_secs<S>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_i64(duration.num_seconds())
}

impl ActivityWindow {
    /// Build the window spanning from `first` to `last`
    pub fn spanning(first: &EventRecord, last: &EventRecord) -> Self {
        Self {
            start_time: first.timestamp,
            end_time: last.timestamp,
            duration: last.time_since(first),
        }
    }

    /// Duration in whole seconds, truncated
    pub fn duration_secs(&self) -> i64 {
        self.duration.num_seconds()
    }
}

impl fmt::Display for ActivityWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({} s)",
            self.start_time.to_rfc3339(),
            self.end_time.to_rfc3339(),
            self.duration.num_seconds()
        )
    }
}

/// Errors that can occur during analysis
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("Invalid capacity: {0} (must be positive)")]
    InvalidCapacity(usize),

    #[error("Failed to parse row {line}: {reason}")]
    RowParse { line: usize, reason: String },
}
