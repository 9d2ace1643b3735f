//! Stride: growable slices with Python-style negative indexing, strided
//! subranges, and functional combinators.
//!
//! Pulls the containers from `stride-slice` and the shared index, growth
//! and error types from `stride-core` under one name, with a [`prelude`]
//! for the everyday imports.
//!
//! # Quick start
//!
//! ```rust
//! use stride::prelude::*;
//!
//! let mut temps: Slice<f32> = Slice::with_capacity(4).unwrap();
//! temps.append_array(&[18.5, 21.0, 19.5, 23.0, 17.0]).unwrap();
//!
//! // Negative indices count from the back.
//! assert_eq!(*temps.get(-1).unwrap(), 17.0);
//!
//! // Every other reading, newest first.
//! let sampled = temps.subslice(0, -1, -2).unwrap();
//! assert_eq!(sampled, [17.0, 19.5, 18.5]);
//!
//! let warm = temps.filter(|t| *t > 20.0).unwrap();
//! let total = warm.reduce(|acc, t| acc + t).unwrap();
//! assert_eq!(total, 44.0);
//!
//! match Slice::<f32>::new().reduce(|acc, t| acc + t) {
//!     Err(SliceError::EmptySource) => {}
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `stride-core` | Index resolution, subrange bounds, growth policy, config, errors |
//! | [`slice`] | `stride-slice` | `Slice<T>` and the type-erased `ByteSlice` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Shared rules and error types (`stride-core`).
///
/// Contains [`types::resolve`], [`types::SubrangeBounds`],
/// [`types::StridePlan`], [`types::GrowthPolicy`], and [`types::SliceError`].
pub use stride_core as types;

/// The containers (`stride-slice`).
///
/// [`slice::Slice`] for typed elements, [`slice::ByteSlice`] for opaque
/// fixed-size byte blocks.
pub use stride_slice as slice;

/// Common imports for typical Stride usage.
///
/// ```rust
/// use stride::prelude::*;
/// ```
pub mod prelude {
    // Containers
    pub use stride_slice::{ByteSlice, Slice};

    // Configuration
    pub use stride_core::{GrowthPolicy, SliceConfig};

    // Errors
    pub use stride_core::SliceError;
}
