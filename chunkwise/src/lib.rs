//! Public API for balanced slice chunking
//!
//! This crate wraps `chunkwise-core` with a configurable [`Chunker`],
//! TOML configuration, serializable layouts and `tracing` instrumentation.
//!
//! ```rust
//! use chunkwise::{Chunker, Signal};
//!
//! let chunker = Chunker::new(4);
//! let items: Vec<u32> = (1..=10).collect();
//!
//! assert_eq!(chunker.split(&items), [&[1, 2, 3][..], &[4, 5, 6], &[7, 8, 9, 10]]);
//!
//! let mut sums = Vec::new();
//! let result: Result<(), String> = chunker.for_each_chunk(&items, |chunk| {
//!     sums.push(chunk.iter().sum::<u32>());
//!     Signal::Continue
//! });
//! assert!(result.is_ok());
//! assert_eq!(sums, [6, 15, 34]);
//! ```
//!
//! The maximum size is a signed integer here: zero or negative values are
//! accepted and yield no chunks, the same as an empty input.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::ops::Range;

use config::effective_max_size;
use tracing::{debug, warn};

// Re-export key types
pub use chunkwise_core::{ChunkPlan, Chunks, Ranges, Signal};
pub use config::{Config, ConfigBuilder};
pub use dto::{ChunkSpan, Layout};
pub use error::{ApiError, Result};

/// Splits slices according to a [`Config`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Chunker {
    config: Config,
}

impl Chunker {
    /// Create a chunker with the given maximum chunk size
    pub fn new(max_size: i64) -> Self {
        Self::with_config(Config::builder().max_size(max_size).build())
    }

    /// Create a chunker from a configuration
    pub fn with_config(config: Config) -> Self {
        if config.is_degenerate() {
            warn!(
                max_size = config.max_size,
                "non-positive max size, every split will be empty"
            );
        }
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Requested maximum chunk size
    pub fn max_size(&self) -> i64 {
        self.config.max_size
    }

    /// Balancing plan for `len` elements, or `None` if nothing would be produced
    pub fn plan(&self, len: usize) -> Option<ChunkPlan> {
        ChunkPlan::new(len, self.config.effective_max_size())
    }

    /// Lazily iterate over the chunks of `slice`
    pub fn chunks<'a, T>(&self, slice: &'a [T]) -> Chunks<'a, T> {
        chunkwise_core::chunks(slice, self.config.effective_max_size())
    }

    /// Split `slice` into balanced chunks
    pub fn split<'a, T>(&self, slice: &'a [T]) -> Vec<&'a [T]> {
        let chunks = chunkwise_core::split(slice, self.config.effective_max_size());
        debug!(
            len = slice.len(),
            max_size = self.config.max_size,
            chunks = chunks.len(),
            ideal = chunks.first().map_or(0, |chunk| chunk.len()),
            "split slice"
        );
        chunks
    }

    /// Chunk offsets for an input of `len` elements
    pub fn split_ranges(&self, len: usize) -> Vec<Range<usize>> {
        chunkwise_core::split_ranges(len, self.config.effective_max_size())
    }

    /// Visit each chunk of `slice` in order until `visit` stops or fails.
    ///
    /// A [`Signal::Fail`] payload is returned exactly as the visitor produced
    /// it. Chunks borrow from `slice`, so the visitor may keep them.
    pub fn for_each_chunk<'a, T, E, F>(
        &self,
        slice: &'a [T],
        mut visit: F,
    ) -> std::result::Result<(), E>
    where
        F: FnMut(&'a [T]) -> Signal<E>,
    {
        let mut visited = 0usize;
        let mut stopped = false;

        let result = chunkwise_core::for_each_chunk(
            slice,
            self.config.effective_max_size(),
            |chunk| {
                visited += 1;
                let signal = visit(chunk);
                stopped = matches!(signal, Signal::Stop);
                signal
            },
        );

        debug!(
            len = slice.len(),
            max_size = self.config.max_size,
            visited,
            stopped,
            failed = result.is_err(),
            "visited chunks"
        );

        result
    }

    /// Describe the split of an input with `len` elements
    pub fn layout(&self, len: usize) -> Layout {
        let spans = self
            .split_ranges(len)
            .into_iter()
            .enumerate()
            .map(|(index, range)| ChunkSpan::new(index, range))
            .collect();

        Layout {
            len,
            max_size: self.config.max_size,
            spans,
        }
    }
}

// Convenience functions

/// Split `slice` into balanced chunks sized from `max_size`.
///
/// `max_size < 1` yields no chunks.
pub fn split<T>(slice: &[T], max_size: i64) -> Vec<&[T]> {
    chunkwise_core::split(slice, effective_max_size(max_size))
}

/// Visit each chunk [`split`] would produce, stopping on
/// [`Signal::Stop`] or [`Signal::Fail`].
pub fn for_each_chunk<'a, T, E, F>(
    slice: &'a [T],
    max_size: i64,
    visit: F,
) -> std::result::Result<(), E>
where
    F: FnMut(&'a [T]) -> Signal<E>,
{
    chunkwise_core::for_each_chunk(slice, effective_max_size(max_size), visit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunker_plan() {
        let chunker = Chunker::new(4);
        let plan = chunker.plan(10).unwrap();
        assert_eq!(plan.count(), 3);
        assert_eq!(plan.ideal_len(), 3);
        assert_eq!(plan.last_len(), 4);

        assert_eq!(chunker.plan(0), None);
        assert_eq!(Chunker::new(-5).plan(10), None);
    }

    #[test]
    fn test_chunker_chunks_is_lazy_split() {
        let chunker = Chunker::new(3);
        let items = [1, 2, 3, 4, 5];
        let lazy: Vec<&[i32]> = chunker.chunks(&items).collect();
        assert_eq!(lazy, chunker.split(&items));
    }

    #[test]
    fn test_layout() {
        let layout = Chunker::new(3).layout(5);
        assert_eq!(layout.len, 5);
        assert_eq!(layout.max_size, 3);
        assert_eq!(
            layout.spans,
            vec![ChunkSpan::new(0, 0..3), ChunkSpan::new(1, 3..5)]
        );
        assert_eq!(layout.chunk_count(), 2);
    }

    #[test]
    fn test_degenerate_layout() {
        assert!(Chunker::new(0).layout(5).spans.is_empty());
        assert!(Chunker::new(3).layout(0).spans.is_empty());
    }

    #[test]
    fn test_chunker_stops_early() {
        let chunker = Chunker::new(1);
        let mut seen = Vec::new();
        let result: std::result::Result<(), ()> = chunker.for_each_chunk(&[1, 2, 3], |chunk| {
            seen.push(chunk[0]);
            if chunk[0] == 2 {
                Signal::Stop
            } else {
                Signal::Continue
            }
        });
        assert_eq!(result, Ok(()));
        assert_eq!(seen, vec![1, 2]);
    }
}
