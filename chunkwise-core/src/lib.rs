//! Balanced chunking of slices
//!
//! This crate splits a slice into contiguous chunks whose sizes are as even
//! as possible while staying within a caller-supplied maximum. Rather than
//! filling every chunk to the maximum and leaving a small leftover, the
//! element count is spread over the minimum number of chunks:
//!
//! ```rust
//! use chunkwise_core::split;
//!
//! let items: Vec<u32> = (1..=10).collect();
//! let chunks = split(&items, 4);
//!
//! assert_eq!(chunks, [&[1, 2, 3][..], &[4, 5, 6], &[7, 8, 9, 10]]);
//! ```
//!
//! Chunks are sub-slices of the input, so nothing is copied. The callback
//! form, [`for_each_chunk`], visits the same chunks in order and lets the
//! visitor stop early or fail through a [`Signal`].
//!
//! # Features
//!
//! - `std` (default): enables `alloc`.
//! - `alloc`: the `Vec`-returning [`split`] and [`split_ranges`]. Without it
//!   the crate is `no_std` and offers the lazy [`chunks`] iterator,
//!   [`for_each_chunk`] and [`ChunkPlan`].

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod iter;
pub mod plan;
pub mod signal;
pub mod split;

pub use iter::{Chunks, Ranges};
pub use plan::ChunkPlan;
pub use signal::Signal;
pub use split::{chunks, for_each_chunk};

#[cfg(feature = "alloc")]
pub use split::{split, split_ranges};
