//! Activity Log Core Library
//!
//! A small, reusable library for analyzing timestamped activity logs: given
//! an ordered sequence of parsed event records, it reports the time window
//! spanned by the first `capacity` occurrences of a target activity.
//!
//! # Architecture
//!
//! The library is intentionally minimal and focused on the scan itself:
//! - [`EventRecord`] / [`ActivityWindow`] - immutable value types
//! - [`CapacityQueue`] - generic fixed-capacity FIFO with evict-on-insert
//! - [`WindowScanner`] - one-pass scan driving the queue
//!
//! The library does NOT:
//! - Read files or split raw CSV lines
//! - Parse rows into records
//! - Render reports
//!
//! All boundary functionality is in the application layer (activity-log-cli),
//! which hands the core a clean, ordered record sequence.
//!
//! # Example Usage
//!
//! ```
//! use activity_log_core::{EventRecord, ScanConfig, WindowScanner};
//! use chrono::{TimeZone, Utc};
//!
//! let records = vec![
//!     EventRecord::new(1, Utc.timestamp_opt(0, 0).unwrap()),
//!     EventRecord::new(1, Utc.timestamp_opt(5, 0).unwrap()),
//!     EventRecord::new(1, Utc.timestamp_opt(12, 0).unwrap()),
//! ];
//!
//! let scanner = WindowScanner::new(ScanConfig::new(3, 1)).unwrap();
//! let window = scanner.scan(&records).expect("three matching records");
//! assert_eq!(window.duration.num_seconds(), 12);
//! ```

// Public modules
pub mod queue;
pub mod scanner;
pub mod types;

// Re-export main types for convenience
pub use queue::CapacityQueue;
pub use scanner::{ScanConfig, WindowScanner};
pub use types::{ActivityWindow, AnalyzerError, EventRecord, Result, Timestamp};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
