//! Binary min-heap used as the frontier of the cost-ordered strategies
//!
//! There is no decrease-key. When a cost improves the caller inserts a fresh
//! entry and discards stale ones as they surface, so the heap can hold up to
//! O(edges) entries. Equal priorities are extracted in insertion order.

use std::cmp::Ordering;

#[derive(Debug, Clone)]
struct Entry<T> {
    priority: f64,
    seq: u64,
    item: T,
}

impl<T> Entry<T> {
    /// Strict ordering on (priority, insertion sequence)
    fn precedes(&self, other: &Self) -> bool {
        match self.priority.total_cmp(&other.priority) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => self.seq < other.seq,
        }
    }
}

/// Array-backed binary min-heap keyed by an `f64` priority
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    entries: Vec<Entry<T>>,
    next_seq: u64,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Add an item. O(log n)
    pub fn insert(&mut self, item: T, priority: f64) {
        self.entries.push(Entry {
            priority,
            seq: self.next_seq,
            item,
        });
        self.next_seq += 1;
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove the item with the smallest priority. O(log n)
    ///
    /// Returns `None` once the heap is empty.
    pub fn extract_min(&mut self) -> Option<(T, f64)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let entry = self.entries.pop()?;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((entry.item, entry.priority))
    }

    /// Smallest priority currently queued
    pub fn peek_priority(&self) -> Option<f64> {
        self.entries.first().map(|e| e.priority)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[idx].precedes(&self.entries[parent]) {
                self.entries.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smaller = if right < len && self.entries[right].precedes(&self.entries[left]) {
                right
            } else {
                left
            };
            if self.entries[smaller].precedes(&self.entries[idx]) {
                self.entries.swap(idx, smaller);
                idx = smaller;
            } else {
                break;
            }
        }
    }
}
