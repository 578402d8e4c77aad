//! Chunk balancing arithmetic

use core::ops::Range;

use crate::iter::Ranges;

/// The shape of a balanced split.
///
/// A plan is fully described by the input length, the number of chunks and
/// the ideal chunk length. Every chunk but the last holds exactly
/// `ideal_len` elements; the last one takes whatever remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkPlan {
    len: usize,
    count: usize,
    ideal: usize,
}

impl ChunkPlan {
    /// Plan used by iterators over degenerate input. Never handed out.
    pub(crate) const EMPTY: ChunkPlan = ChunkPlan {
        len: 0,
        count: 0,
        ideal: 0,
    };

    /// Compute the plan for `len` elements and a maximum chunk size of `max_size`.
    ///
    /// Returns `None` when there is nothing to split: `len == 0` or
    /// `max_size == 0`.
    pub fn new(len: usize, max_size: usize) -> Option<Self> {
        if len == 0 || max_size == 0 {
            return None;
        }

        if len <= max_size {
            return Some(Self {
                len,
                count: 1,
                ideal: len,
            });
        }

        let count = len.div_ceil(max_size);
        let ideal = ideal_len(len, count);

        Some(Self { len, count, ideal })
    }

    /// Number of elements covered by the plan
    pub const fn input_len(&self) -> usize {
        self.len
    }

    /// Number of chunks
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Length shared by every chunk except the last
    pub const fn ideal_len(&self) -> usize {
        self.ideal
    }

    /// Length of the final chunk
    pub const fn last_len(&self) -> usize {
        self.len - self.ideal * (self.count - 1)
    }

    /// Offsets of the chunk at `index`, or `None` past the last chunk.
    pub fn range(&self, index: usize) -> Option<Range<usize>> {
        if index >= self.count {
            return None;
        }

        let start = index * self.ideal;
        let end = if index + 1 == self.count {
            self.len
        } else {
            start + self.ideal
        };

        Some(start..end)
    }

    /// Iterate over the offsets of every chunk, left to right.
    pub fn ranges(&self) -> Ranges {
        Ranges::new(*self)
    }
}

/// Round `len / count` half up, in integers.
///
/// Matches truncating `len as f64 / count as f64 + 0.5` without the
/// precision loss for large lengths. The last chunk takes whatever the other
/// `count - 1` chunks leave, which lies in `1..=2 * ideal`.
fn ideal_len(len: usize, count: usize) -> usize {
    let quotient = len / count;
    let remainder = len % count;

    // remainder / count >= 1/2, written so it cannot overflow
    if remainder >= count - remainder {
        quotient + 1
    } else {
        quotient
    }
}
