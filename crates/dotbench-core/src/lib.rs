//! Core data structures for dotbench (pure Rust)
//!
//! A [`Csr`] matrix owns all nonzeros in two flat arrays sliced by `indptr`;
//! [`RowView`] borrows one row of it, and [`SparseVec`] owns a single sorted
//! sparse vector (the weight operand).

pub mod coo;
pub mod csr;
pub mod error;
pub mod sparse_vec;

pub use coo::Coo;
pub use csr::Csr;
pub use error::SparseError;
pub use sparse_vec::{RowView, SparseVec};

/// Convert a stored (validated, non-negative) index to `usize`.
#[inline]
#[must_use]
pub fn i64_to_usize(x: i64) -> usize {
    debug_assert!(x >= 0);
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    {
        x as usize
    }
}

#[inline]
#[must_use]
pub fn usize_to_i64(x: usize) -> i64 {
    debug_assert!(i64::try_from(x).is_ok());
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    {
        x as i64
    }
}
