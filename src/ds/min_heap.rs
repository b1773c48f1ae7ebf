//! Flat array-backed binary min-heap with an explicit ordering.
//!
//! Elements live in a single `Vec<T>` in heap order: the parent of slot `i`
//! is slot `(i - 1) / 2`, and no element orders before its parent. The order
//! is a value of type `O: HeapOrder<T>` held by the heap, which is
//! [`Natural`] (`Ord`) unless a comparator is injected with
//! [`MinHeap::with_order`].
//!
//! ## Architecture
//!
//! ```text
//!   data: [ 1 | 3 | 2 | 7 | 4 | 9 ]
//!
//!                 1            ← peek()
//!               /   \
//!              3     2
//!             / \   /
//!            7   4 9
//! ```
//!
//! ## Operations
//!
//! | Operation        | Description                              | Complexity |
//! |------------------|------------------------------------------|------------|
//! | `push`           | Append, sift up                          | O(log n)   |
//! | `pop`            | Swap root with last, sift down           | O(log n)   |
//! | `peek`           | Read root                                | O(1)       |
//! | `replace_top`    | Overwrite root, sift down (one pass)     | O(log n)   |
//! | `into_sorted_vec`| Drain in ascending order                 | O(n log n) |
//!
//! `replace_top` is what a bounded selector wants: replacing the current
//! minimum costs a single sift instead of a pop followed by a push.
//!
//! ## Example Usage
//!
//! ```
//! use boundkit::ds::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.push(5);
//! heap.push(1);
//! heap.push(3);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.replace_top(4), Some(1));
//! assert_eq!(heap.into_sorted_vec(), vec![3, 4, 5]);
//! ```
//!
//! ## Thread Safety
//!
//! `MinHeap` is not synchronized. Wrap it in a lock for shared mutation.

use std::cmp::Ordering;

use crate::error::InvariantError;

/// Total order used by a [`MinHeap`]; `Less` sorts toward the root.
pub trait HeapOrder<T> {
    fn cmp(&self, a: &T, b: &T) -> Ordering;
}

/// The element type's own `Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord> HeapOrder<T> for Natural {
    #[inline]
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Adapts a comparator closure into a [`HeapOrder`].
///
/// ```
/// use boundkit::ds::{ByFn, MinHeap};
///
/// // Max-heap by reversing the comparator.
/// let mut heap = MinHeap::with_order(ByFn(|a: &i32, b: &i32| b.cmp(a)));
/// heap.push(1);
/// heap.push(9);
/// assert_eq!(heap.pop(), Some(9));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByFn<F>(pub F);

impl<T, F> HeapOrder<T> for ByFn<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// Binary min-heap over a contiguous vector.
#[derive(Debug, Clone)]
pub struct MinHeap<T, O = Natural> {
    data: Vec<T>,
    order: O,
}

impl<T: Ord> MinHeap<T, Natural> {
    /// Creates an empty heap ordered by `T: Ord`.
    pub fn new() -> Self {
        Self::with_order(Natural)
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, Natural)
    }
}

impl<T: Ord> Default for MinHeap<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O> MinHeap<T, O> {
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the minimum without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Iterates in storage (heap) order, not sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the backing vector in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.data.capacity() * std::mem::size_of::<T>()
    }
}

impl<T, O: HeapOrder<T>> MinHeap<T, O> {
    /// Creates an empty heap using `order`.
    pub fn with_order(order: O) -> Self {
        Self {
            data: Vec::new(),
            order,
        }
    }

    pub fn with_capacity_and_order(capacity: usize, order: O) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            order,
        }
    }

    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the minimum.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    /// Replaces the minimum with `value` and returns the old minimum.
    ///
    /// On an empty heap `value` is pushed and `None` is returned.
    pub fn replace_top(&mut self, value: T) -> Option<T> {
        match self.data.first_mut() {
            Some(root) => {
                let old = std::mem::replace(root, value);
                self.sift_down(0);
                Some(old)
            },
            None => {
                self.data.push(value);
                None
            },
        }
    }

    /// Drains the heap in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Some(value) = self.pop() {
            out.push(value);
        }
        out
    }

    /// Checks that no element orders before its parent.
    pub fn validate(&self) -> Result<(), InvariantError> {
        for child in 1..self.data.len() {
            let parent = (child - 1) / 2;
            if self.less(child, parent) {
                return Err(InvariantError::new(format!(
                    "heap slot {} orders before its parent {}",
                    child, parent
                )));
            }
        }
        Ok(())
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.order.cmp(&self.data[a], &self.data[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, pos) {
                break;
            }
            self.data.swap(pos, child);
            pos = child;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_heap_pops_ascending() {
        let mut heap = MinHeap::new();
        for v in [5, 3, 8, 1, 9, 2] {
            heap.push(v);
            heap.validate().unwrap();
        }
        let mut out = Vec::new();
        while let Some(v) = heap.pop() {
            heap.validate().unwrap();
            out.push(v);
        }
        assert_eq!(out, vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn min_heap_peek_and_empty_pop() {
        let mut heap: MinHeap<i32> = MinHeap::with_capacity(4);
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), None);
        heap.push(4);
        assert_eq!(heap.peek(), Some(&4));
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn min_heap_replace_top_keeps_order() {
        let mut heap = MinHeap::new();
        for v in [1, 4, 6, 8] {
            heap.push(v);
        }
        assert_eq!(heap.replace_top(7), Some(1));
        heap.validate().unwrap();
        assert_eq!(heap.peek(), Some(&4));
        assert_eq!(heap.into_sorted_vec(), vec![4, 6, 7, 8]);
    }

    #[test]
    fn min_heap_replace_top_on_empty_pushes() {
        let mut heap = MinHeap::new();
        assert_eq!(heap.replace_top(3), None);
        assert_eq!(heap.peek(), Some(&3));
    }

    #[test]
    fn min_heap_keeps_duplicates() {
        let mut heap = MinHeap::new();
        for v in [2, 2, 1, 2] {
            heap.push(v);
        }
        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 2, 2]);
    }

    #[test]
    fn min_heap_injected_order() {
        let mut heap = MinHeap::with_order(ByFn(|a: &(u8, char), b: &(u8, char)| b.0.cmp(&a.0)));
        heap.push((1, 'l'));
        heap.push((9, 'h'));
        heap.push((5, 'm'));
        assert_eq!(heap.pop().map(|(_, tag)| tag), Some('h'));
        assert_eq!(heap.pop().map(|(_, tag)| tag), Some('m'));
        heap.validate().unwrap();
    }

    #[test]
    fn min_heap_into_vec_and_clear() {
        let mut heap = MinHeap::new();
        heap.push(2);
        heap.push(1);
        assert_eq!(heap.iter().count(), 2);
        assert!(heap.approx_bytes() > 0);
        let raw = heap.clone().into_vec();
        assert_eq!(raw[0], 1);
        heap.clear();
        assert!(heap.is_empty());
    }

    // Inspection must not require the heap order to be usable.
    fn describe<T: std::fmt::Debug, O>(heap: &MinHeap<T, O>) -> String {
        format!("{} {:?} {}", heap.len(), heap.peek(), heap.iter().count())
    }

    #[test]
    fn min_heap_inspection_needs_no_order_bound() {
        let mut heap = MinHeap::new();
        heap.push(4);
        heap.push(2);
        assert_eq!(describe(&heap), "2 Some(2) 2");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[cfg_attr(miri, ignore)]
            #[test]
            fn prop_drains_sorted(values in prop::collection::vec(any::<i16>(), 0..200)) {
                let mut heap = MinHeap::new();
                for v in &values {
                    heap.push(*v);
                }
                prop_assert!(heap.validate().is_ok());
                let mut expected = values.clone();
                expected.sort();
                prop_assert_eq!(heap.into_sorted_vec(), expected);
            }
        }
    }
}
