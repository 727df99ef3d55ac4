//! Row-by-weight dot product kernels for dotbench (pure Rust, single-threaded)
//!
//! One dense kernel and three sparse-sparse intersection strategies, all
//! writing `out[i] = <row i of A, w>`:
//!
//! - [`sparse_dense_f64_i64`]: direct lookup into a densified `w`
//! - [`sparse_sparse_binary_search_f64_i64`]: binary search of the shorter side
//! - [`sparse_sparse_hash_map_f64_i64`]: hash map of `w`, probed per nonzero
//! - [`sparse_sparse_incremental_f64_i64`]: two-cursor merge of sorted indices
//!
//! Kernels assign every output slot; a reused buffer needs no zeroing.

pub mod binary_search;
pub mod convert;
pub mod dense;
pub mod error;
pub mod hash_map;
pub mod incremental;
pub mod strategy;
pub mod util;

pub use binary_search::{binary_search_row, sparse_sparse_binary_search_f64_i64, BinarySearchDot};
pub use convert::coo_to_csr_f64_i64;
pub use dense::{sparse_dense_f64_i64, sparse_dense_row};
pub use error::KernelError;
pub use hash_map::{sparse_sparse_hash_map_f64_i64, HashMapDot};
pub use incremental::{incremental_row, sparse_sparse_incremental_f64_i64, IncrementalDot};
pub use strategy::{RowDotSparse, Strategy};
