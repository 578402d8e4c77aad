//! Serializable descriptions of a split

use serde::{Deserialize, Serialize};
use std::ops::Range;

#[cfg(feature = "json")]
use crate::error::Result;

/// Position of one chunk within the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkSpan {
    /// Zero-based chunk number
    pub index: usize,
    /// Offset of the first element
    pub start: usize,
    /// Offset one past the last element
    pub end: usize,
}

impl ChunkSpan {
    /// Create a new chunk span
    pub fn new(index: usize, range: Range<usize>) -> Self {
        Self {
            index,
            start: range.start,
            end: range.end,
        }
    }

    /// Number of elements in the chunk
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the chunk holds no elements
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Offsets as a range, for slicing
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Every chunk a split of `len` elements would produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Input length
    pub len: usize,
    /// Requested maximum chunk size
    pub max_size: i64,
    /// Chunks in order
    pub spans: Vec<ChunkSpan>,
}

impl Layout {
    /// Number of chunks
    pub fn chunk_count(&self) -> usize {
        self.spans.len()
    }

    /// Serialize the layout as JSON
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize the layout as indented JSON
    #[cfg(feature = "json")]
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
