//! Window scanner - the main analysis entry point
//!
//! [`WindowScanner`] consumes an ordered sequence of [`EventRecord`]s in a
//! single left-to-right pass, feeding the records that match the target
//! activity through a [`CapacityQueue`], and reports the first window in
//! which `capacity` matching records have been observed.
//!
//! The scan is deterministic and side-effect free: it owns its queue for the
//! duration of one call and carries no state between calls.

use crate::queue::CapacityQueue;
use crate::types::{ActivityWindow, AnalyzerError, EventRecord, Result};
use serde::{Deserialize, Serialize};

/// Parameters of one scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Number of matching records that form a complete window
    pub capacity: usize,
    /// Activity identifier the scan filters by; records with any other
    /// identifier are skipped entirely (they neither enter nor reset the
    /// window)
    pub target_activity_id: i64,
}

impl ScanConfig {
    /// Create a scan configuration
    pub fn new(capacity: usize, target_activity_id: i64) -> Self {
        Self {
            capacity,
            target_activity_id,
        }
    }

    /// Builder method: set the window capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builder method: set the target activity identifier
    pub fn with_target(mut self, target_activity_id: i64) -> Self {
        self.target_activity_id = target_activity_id;
        self
    }

    /// Check the configuration for values the scanner cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(AnalyzerError::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}

/// One-shot scanner over a parsed record sequence
pub struct WindowScanner {
    config: ScanConfig,
}

impl WindowScanner {
    /// Create a scanner for the given configuration.
    ///
    /// Returns [`AnalyzerError::InvalidCapacity`] if the configured capacity
    /// is zero. Validating here keeps `scan` itself infallible: once a
    /// scanner exists, the only outcomes are a window or no window.
    pub fn new(config: ScanConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Scan `records` and report the window of the first `capacity`
    /// occurrences of the target activity.
    ///
    /// Records are expected in file order with non-decreasing timestamps;
    /// the row parser upholds that before the core sees them. Returns
    /// `None` when fewer than `capacity` matching records exist in the
    /// whole sequence.
    pub fn scan(&self, records: &[EventRecord]) -> Option<ActivityWindow> {
        let capacity = self.config.capacity;
        let target = self.config.target_activity_id;
        let mut queue: CapacityQueue<EventRecord> = CapacityQueue::new(capacity);

        log::debug!(
            "Scanning {} records for activity {} (capacity {})",
            records.len(),
            target,
            capacity
        );

        for record in records {
            if record.activity_id != target {
                log::trace!("Skipping record for activity {}", record.activity_id);
                continue;
            }

            // Once full, every insertion evicts exactly one record, so the
            // overflow value marks the window's old boundary aging out.
            let overflow = queue.add_and_get_overflow(*record);
            if let Some(evicted) = overflow {
                log::trace!(
                    "Window boundary advanced past record at {}",
                    evicted.timestamp
                );
            }

            if queue.is_full() {
                // First window to reach capacity wins; the scan stops here.
                let window = ActivityWindow::spanning(queue.at(0), record);
                log::debug!(
                    "Window found for activity {}: {} matching records over {} s",
                    target,
                    capacity,
                    window.duration.num_seconds()
                );
                return Some(window);
            }
        }

        log::debug!(
            "No window found: fewer than {} records match activity {}",
            capacity,
            target
        );
        None
    }

    /// The configuration this scanner was built with
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }
}
