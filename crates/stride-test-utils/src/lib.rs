//! Test fixtures for Stride development.
//!
//! Provides integer fixtures, little-endian `i32` encoding for exercising
//! the type-erased `ByteSlice`, and a [`DropCounter`] for checking that
//! containers release what they own.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;
use std::rc::Rc;

use stride_core::SliceError;

/// Byte width of an encoded `i32`.
pub const I32_SIZE: usize = std::mem::size_of::<i32>();

/// `1..=n` as a vector. Empty for `n <= 0`.
pub fn ints(n: i32) -> Vec<i32> {
    (1..=n).collect()
}

/// Encode `values` as packed little-endian bytes.
pub fn encode_i32(values: &[i32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Decode one little-endian `i32` element.
///
/// # Panics
///
/// Panics if `bytes` is not exactly [`I32_SIZE`] long.
pub fn decode_i32(bytes: &[u8]) -> i32 {
    let array: [u8; I32_SIZE] = bytes
        .try_into()
        .unwrap_or_else(|_| panic!("expected {I32_SIZE} bytes, got {}", bytes.len()));
    i32::from_le_bytes(array)
}

/// Assert that `result` failed with [`SliceError::IndexOutOfRange`].
#[track_caller]
pub fn assert_out_of_range<T: std::fmt::Debug>(result: Result<T, SliceError>) {
    match result {
        Err(SliceError::IndexOutOfRange { .. }) => {}
        other => panic!("expected IndexOutOfRange, got {other:?}"),
    }
}

/// Counts how many of its [`DropToken`]s have been dropped.
#[derive(Clone, Debug, Default)]
pub struct DropCounter {
    dropped: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that bumps this counter when dropped.
    pub fn token(&self) -> DropToken {
        DropToken {
            dropped: Rc::clone(&self.dropped),
        }
    }

    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }
}

/// Element type that records its own destruction.
#[derive(Debug)]
pub struct DropToken {
    dropped: Rc<Cell<usize>>,
}

impl Clone for DropToken {
    fn clone(&self) -> Self {
        Self {
            dropped: Rc::clone(&self.dropped),
        }
    }
}

impl Drop for DropToken {
    fn drop(&mut self) {
        self.dropped.set(self.dropped.get() + 1);
    }
}
