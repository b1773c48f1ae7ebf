//! Monotonic (non-increasing) deque of indexed values.
//!
//! Keeps `(value, index)` pairs ordered so that values never increase from
//! front to back while indices strictly increase. A new value first evicts
//! every back entry it dominates (`back.value <= value`), because those
//! entries are older and no larger, so they can never again be the maximum of
//! any window that still contains the new value. Stale entries are trimmed
//! from the front by index.
//!
//! ```text
//!   push 5 @ idx 4 into  front [(7,1) (4,2) (2,3)] back
//!                                      ▲     ▲
//!                                 dominated by 5, popped
//!   result               front [(7,1) (5,4)] back
//! ```
//!
//! Each entry is pushed once and popped at most once, so any sequence of
//! `n` pushes costs O(n) total.

use std::collections::VecDeque;

use crate::error::InvariantError;

/// A value paired with its sequential arrival index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indexed<T> {
    pub value: T,
    pub index: u64,
}

#[derive(Debug, Clone)]
pub struct MonotonicDeque<T> {
    entries: VecDeque<Indexed<T>>,
}

impl<T: Ord> MonotonicDeque<T> {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends `value` at `index` after popping every back entry whose value
    /// is `<= value`. Returns how many entries were popped.
    ///
    /// `index` must be greater than every index already stored.
    pub fn push_dominating(&mut self, value: T, index: u64) -> usize {
        let mut popped = 0;
        while self.entries.back().is_some_and(|back| back.value <= value) {
            self.entries.pop_back();
            popped += 1;
        }
        self.entries.push_back(Indexed { value, index });
        popped
    }

    /// Pops front entries with `index <= through`. Returns how many were
    /// popped.
    pub fn expire_through(&mut self, through: u64) -> usize {
        let mut popped = 0;
        while self.entries.front().is_some_and(|front| front.index <= through) {
            self.entries.pop_front();
            popped += 1;
        }
        popped
    }

    /// Largest retained entry.
    pub fn front(&self) -> Option<&Indexed<T>> {
        self.entries.front()
    }

    /// Most recently pushed entry.
    pub fn back(&self) -> Option<&Indexed<T>> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates entries from front (largest) to back (newest).
    pub fn iter(&self) -> impl Iterator<Item = &Indexed<T>> {
        self.entries.iter()
    }

    /// Checks value and index ordering between neighbours.
    pub fn validate(&self) -> Result<(), InvariantError> {
        for (pos, pair) in self.entries.iter().zip(self.entries.iter().skip(1)).enumerate() {
            let (older, newer) = pair;
            if older.value < newer.value {
                return Err(InvariantError::new(format!(
                    "deque values increase between positions {} and {}",
                    pos,
                    pos + 1
                )));
            }
            if older.index >= newer.index {
                return Err(InvariantError::new(format!(
                    "deque indices not increasing at position {} ({} >= {})",
                    pos, older.index, newer.index
                )));
            }
        }
        Ok(())
    }
}

impl<T: Ord> Default for MonotonicDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}
