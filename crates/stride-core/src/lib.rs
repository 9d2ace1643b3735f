//! Core types for the Stride containers.
//!
//! This is the leaf crate with zero internal dependencies. It owns the
//! rules every container shares: Python-style index resolution, subrange
//! normalization and strided traversal, the capacity growth policy, and
//! the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod growth;
pub mod index;

pub use config::SliceConfig;
pub use error::{ConfigError, SliceError};
pub use growth::{byte_len, GrowthPolicy};
pub use index::{resolve, StridePlan, SubrangeBounds};
