//! End-to-end scan scenarios over hand-built record sequences

use activity_log_core::{CapacityQueue, EventRecord, ScanConfig, WindowScanner};
use chrono::{TimeZone, Utc};

fn record(activity_id: i64, secs: i64) -> EventRecord {
    EventRecord::new(activity_id, Utc.timestamp_opt(secs, 0).unwrap())
}

fn scan(records: &[EventRecord], capacity: usize, target: i64) -> Option<activity_log_core::ActivityWindow> {
    let scanner = WindowScanner::new(ScanConfig::new(capacity, target)).unwrap();
    scanner.scan(records)
}

#[test]
fn window_over_exactly_capacity_records() {
    let records = vec![record(1, 0), record(1, 5), record(1, 12)];

    let window = scan(&records, 3, 1).expect("window expected");
    assert_eq!(window.start_time, Utc.timestamp_opt(0, 0).unwrap());
    assert_eq!(window.end_time, Utc.timestamp_opt(12, 0).unwrap());
    assert_eq!(window.duration.num_seconds(), 12);
}

#[test]
fn other_activities_are_ignored() {
    // The id-2 record neither enters the window nor resets it, so the
    // result matches the unfiltered three-record sequence exactly.
    let records = vec![record(1, 0), record(2, 1), record(1, 5), record(1, 12)];

    let window = scan(&records, 3, 1).expect("window expected");
    assert_eq!(window.start_time, Utc.timestamp_opt(0, 0).unwrap());
    assert_eq!(window.end_time, Utc.timestamp_opt(12, 0).unwrap());
    assert_eq!(window.duration.num_seconds(), 12);
}

#[test]
fn too_few_matching_records_yields_no_window() {
    let records = vec![record(1, 0), record(1, 5)];
    assert!(scan(&records, 3, 1).is_none());
}

#[test]
fn first_window_to_reach_capacity_wins() {
    // A fourth matching record would evict (1,0) and form a later window,
    // but the scan reports the first one that reached capacity.
    let records = vec![record(1, 0), record(1, 5), record(1, 12), record(1, 20)];

    let window = scan(&records, 3, 1).expect("window expected");
    assert_eq!(window.start_time, Utc.timestamp_opt(0, 0).unwrap());
    assert_eq!(window.end_time, Utc.timestamp_opt(12, 0).unwrap());
    assert_eq!(window.duration.num_seconds(), 12);
}

#[test]
fn scan_is_deterministic() {
    let records = vec![record(1, 0), record(2, 3), record(1, 5), record(1, 9)];

    let first = scan(&records, 2, 1);
    let second = scan(&records, 2, 1);
    assert_eq!(first, second);
}

#[test]
fn every_window_has_consistent_duration() {
    for capacity in 1..=4 {
        let records = vec![record(1, 0), record(1, 5), record(1, 12), record(1, 20)];
        if let Some(window) = scan(&records, capacity, 1) {
            assert_eq!(window.duration, window.end_time - window.start_time);
        }
    }
}

#[test]
fn queue_eviction_matches_add_behavior() {
    // Capacity 2: A, B, C via add leaves [B, C]; pushing D returns B.
    let mut queue = CapacityQueue::new(2);
    queue.add("A");
    queue.add("B");
    queue.add("C");
    let contents: Vec<&str> = queue.iter().copied().collect();
    assert_eq!(contents, vec!["B", "C"]);

    assert_eq!(queue.add_and_get_overflow("D"), Some("B"));
    let contents: Vec<&str> = queue.iter().copied().collect();
    assert_eq!(contents, vec!["C", "D"]);
}

#[test]
fn queue_prefix_eviction() {
    let mut queue = CapacityQueue::new(4);
    for item in ["A", "B", "C", "D"] {
        queue.add(item);
    }
    queue.pop_to_index(2);
    assert_eq!(queue.len(), 2);
    assert_eq!(*queue.at(0), "C");
    assert_eq!(*queue.at(1), "D");
}
