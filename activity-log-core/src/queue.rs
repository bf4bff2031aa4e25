//! Fixed-capacity FIFO queue with evict-on-insert semantics
//!
//! [`CapacityQueue`] holds at most `capacity` elements in insertion order.
//! Inserting into a full queue evicts the oldest element; the caller can
//! choose whether the evicted element is returned ([`add_and_get_overflow`])
//! or silently discarded ([`add`]). A contiguous stale prefix can be dropped
//! in one call with [`pop_to_index`].
//!
//! The container is fully generic and has no notion of timestamps or
//! records - the scanner layers the window semantics on top.
//!
//! [`add`]: CapacityQueue::add
//! [`add_and_get_overflow`]: CapacityQueue::add_and_get_overflow
//! [`pop_to_index`]: CapacityQueue::pop_to_index

use std::collections::VecDeque;

/// A first-in, first-out container bounded by a fixed capacity.
///
/// Invariants: occupancy never exceeds `capacity`, and oldest-first ordering
/// is preserved across all mutations. Index 0 is always the oldest element.
#[derive(Debug, Clone)]
pub struct CapacityQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> CapacityQueue<T> {
    /// Create an empty queue bounded by `capacity`.
    ///
    /// # Panics
    /// Panics if `capacity` is zero; a zero-capacity queue could never hold
    /// a window and always indicates a caller bug.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "CapacityQueue capacity must be positive");
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `element` at the tail, silently evicting the oldest element
    /// first if the queue is already full.
    pub fn add(&mut self, element: T) {
        let _ = self.add_and_get_overflow(element);
    }

    /// Append `element` at the tail and return the evicted oldest element,
    /// or `None` if the queue was not yet full.
    ///
    /// This is the only way to observe exactly which element aged out of
    /// the window.
    pub fn add_and_get_overflow(&mut self, element: T) -> Option<T> {
        let overflow = if self.items.len() == self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(element);
        overflow
    }

    /// Element at the given 0-based position, oldest first.
    ///
    /// # Panics
    /// Panics if `index >= len()`. Callers read window boundaries through
    /// this accessor, so a silent default would corrupt the reported window.
    pub fn at(&self, index: usize) -> &T {
        &self.items[index]
    }

    /// Discard all elements at positions `[0, index)`, so the element
    /// previously at `index` becomes the new front.
    ///
    /// `pop_to_index(0)` is a no-op; `pop_to_index(len())` empties the queue.
    ///
    /// # Panics
    /// Panics if `index > len()`.
    pub fn pop_to_index(&mut self, index: usize) {
        assert!(
            index <= self.items.len(),
            "pop_to_index out of range: {} > {}",
            index,
            self.items.len()
        );
        self.items.drain(..index);
    }

    /// Current occupancy, always `<= capacity()`
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the queue holds no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True if the queue holds exactly `capacity()` elements
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// The fixed capacity set at construction
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over the held elements, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}
