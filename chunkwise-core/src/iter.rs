//! Iterators over planned chunks

use core::iter::FusedIterator;
use core::ops::Range;

use crate::plan::ChunkPlan;

/// Offsets of every chunk in a [`ChunkPlan`], left to right.
#[derive(Debug, Clone)]
pub struct Ranges {
    plan: ChunkPlan,
    front: usize,
    back: usize,
}

impl Ranges {
    pub(crate) fn new(plan: ChunkPlan) -> Self {
        Self {
            plan,
            front: 0,
            back: plan.count(),
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(ChunkPlan::EMPTY)
    }
}

impl Iterator for Ranges {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let range = self.plan.range(self.front);
        self.front += 1;
        range
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let remaining = self.back - self.front;
        if n >= remaining {
            self.front = self.back;
            return None;
        }
        self.front += n;
        self.next()
    }
}

impl DoubleEndedIterator for Ranges {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.plan.range(self.back)
    }
}

impl ExactSizeIterator for Ranges {}

impl FusedIterator for Ranges {}

/// Balanced sub-slices of a slice, produced lazily.
///
/// Created by [`chunks`](crate::chunks).
#[derive(Debug)]
pub struct Chunks<'a, T> {
    slice: &'a [T],
    ranges: Ranges,
}

// No `T: Clone` bound: only the borrow is copied
impl<T> Clone for Chunks<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slice: self.slice,
            ranges: self.ranges.clone(),
        }
    }
}

impl<'a, T> Chunks<'a, T> {
    pub(crate) fn new(slice: &'a [T], max_size: usize) -> Self {
        let ranges = match ChunkPlan::new(slice.len(), max_size) {
            Some(plan) => plan.ranges(),
            None => Ranges::empty(),
        };
        Self { slice, ranges }
    }
}

impl<'a, T> Iterator for Chunks<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        self.ranges.next().map(|range| &self.slice[range])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ranges.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.ranges.nth(n).map(|range| &self.slice[range])
    }
}

impl<T> DoubleEndedIterator for Chunks<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ranges.next_back().map(|range| &self.slice[range])
    }
}

impl<T> ExactSizeIterator for Chunks<'_, T> {}

impl<T> FusedIterator for Chunks<'_, T> {}
