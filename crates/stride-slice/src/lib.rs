//! Growable owned slices with negative indexing and strided extraction.
//!
//! Two containers share one set of rules from `stride-core`:
//!
//! ```text
//! Slice<T>   (typed; elements are T, callbacks see &T)
//! ByteSlice  (type-erased; elements are element_size-byte blocks)
//! └── both built on
//!     ├── index::resolve        (Python-style negative indices)
//!     ├── SubrangeBounds        (subslice / strided normalization)
//!     ├── StridePlan            (visit order for a strided copy)
//!     └── GrowthPolicy          (capacity in elements, bytes derived)
//! ```
//!
//! Every operation reports failure through [`SliceError`]. Results of
//! `subslice`, `strided`, `map` and `filter` are new containers that never
//! alias the source; if building one fails, the partial result is dropped
//! before the error is returned.
//!
//! # Example
//!
//! ```
//! use stride_slice::Slice;
//!
//! let mut s = Slice::new();
//! s.append_array(&[1, 2, 3, 4]).unwrap();
//! assert_eq!(*s.get(-1).unwrap(), 4);
//!
//! let evens = s.filter(|v| v % 2 == 0).unwrap();
//! let squares = evens.map(|v| v * v).unwrap();
//! assert_eq!(squares.reduce(|acc, v| acc + v), Ok(20));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod bytes;
mod functional;
pub mod slice;
mod subrange;

pub use bytes::ByteSlice;
pub use slice::Slice;
pub use stride_core::{GrowthPolicy, SliceConfig, SliceError};
