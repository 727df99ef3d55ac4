//! Construction-time validation errors for sparse structures.
//!
//! Every structural rule a kernel relies on is checked here, once, when a
//! [`Csr`](crate::Csr), [`Coo`](crate::Coo) or [`SparseVec`](crate::SparseVec)
//! is built. Kernels do not re-validate element by element.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SparseError {
    #[error("indptr length must be nrows + 1 (expected {expected}, got {got})")]
    IndptrLength { expected: usize, got: usize },

    #[error("indptr first element must be 0")]
    IndptrFirst,

    #[error("indptr last element must equal nnz (nnz = {nnz})")]
    IndptrLast { nnz: usize },

    #[error("indptr must be non-decreasing (at row {row})")]
    IndptrDecreasing { row: usize },

    #[error("indices and data must have equal length ({indices} != {data})")]
    LengthMismatch { indices: usize, data: usize },

    #[error("indices must be non-negative (found {index})")]
    NegativeIndex { index: i64 },

    #[error("column index {col} out of bounds for {ncols} columns")]
    ColumnOutOfBounds { col: i64, ncols: usize },

    #[error("row index {row} out of bounds for {nrows} rows")]
    RowOutOfBounds { row: i64, nrows: usize },

    #[error("column indices must be strictly increasing within each row (row {row})")]
    NotStrictlyIncreasing { row: usize },

    #[error("expected a single-row matrix, got {nrows} rows")]
    NotSingleRow { nrows: usize },

    #[error("dimension overflow")]
    Overflow,
}
