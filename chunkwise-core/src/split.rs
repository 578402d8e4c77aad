//! Splitting entry points

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
#[cfg(feature = "alloc")]
use core::ops::Range;

use crate::iter::Chunks;
use crate::signal::Signal;

#[cfg(feature = "alloc")]
use crate::plan::ChunkPlan;

/// Lazily split `slice` into balanced chunks sized from `max_size`.
///
/// Yields the same chunks as [`split`] without allocating.
pub fn chunks<T>(slice: &[T], max_size: usize) -> Chunks<'_, T> {
    Chunks::new(slice, max_size)
}

/// Split `slice` into balanced chunks sized from `max_size`.
///
/// Empty input or `max_size == 0` yields no chunks. Input no longer than
/// `max_size` comes back as a single chunk. Otherwise the input is spread
/// over `ceil(len / max_size)` chunks: all but the last share the rounded
/// average length and the last absorbs the remainder, so it can be longer
/// than `max_size` (17 elements with `max_size` 4 give `3, 3, 3, 3, 5`).
///
/// ```rust
/// use chunkwise_core::split;
///
/// assert_eq!(split(&[1, 2, 3, 4], 3), [&[1, 2][..], &[3, 4]]);
/// assert_eq!(split(&[1, 2, 3, 4, 5], 3), [&[1, 2, 3][..], &[4, 5]]);
/// assert!(split(&[1, 2, 3], 0).is_empty());
/// ```
#[cfg(feature = "alloc")]
pub fn split<T>(slice: &[T], max_size: usize) -> Vec<&[T]> {
    chunks(slice, max_size).collect()
}

/// Offsets of the chunks [`split`] would produce for `len` elements.
#[cfg(feature = "alloc")]
pub fn split_ranges(len: usize, max_size: usize) -> Vec<Range<usize>> {
    ChunkPlan::new(len, max_size)
        .map(|plan| plan.ranges().collect())
        .unwrap_or_default()
}

/// Visit each chunk [`split`] would produce, in order.
///
/// Iteration ends at the first [`Signal::Stop`] (returning `Ok(())`) or
/// [`Signal::Fail`] (returning its payload). Degenerate input never calls
/// `visit`.
///
/// ```rust
/// use chunkwise_core::{for_each_chunk, Signal};
///
/// let mut seen = Vec::new();
/// let result: Result<(), ()> = for_each_chunk(&[1, 2, 3, 4, 5], 2, |chunk| {
///     seen.push(chunk.len());
///     if seen.len() == 2 { Signal::Stop } else { Signal::Continue }
/// });
///
/// assert_eq!(result, Ok(()));
/// assert_eq!(seen, [2, 2]);
/// ```
pub fn for_each_chunk<'a, T, E, F>(slice: &'a [T], max_size: usize, mut visit: F) -> Result<(), E>
where
    F: FnMut(&'a [T]) -> Signal<E>,
{
    for chunk in chunks(slice, max_size) {
        match visit(chunk) {
            Signal::Continue => {}
            Signal::Stop => return Ok(()),
            Signal::Fail(err) => return Err(err),
        }
    }

    Ok(())
}
