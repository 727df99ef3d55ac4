//! Sorted sparse vectors: an owned weight vector and a borrowed row view

use crate::csr::Csr;
use crate::error::SparseError;
use crate::i64_to_usize;

/// Borrowed `(index, value)` slices of one sparse row.
///
/// Indices are strictly increasing when the owner was validated; kernels rely
/// on that without checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowView<'a> {
    pub indices: &'a [i64],
    pub data: &'a [f64],
}

impl<'a> RowView<'a> {
    #[inline]
    #[must_use]
    pub fn new(indices: &'a [i64], data: &'a [f64]) -> Self {
        debug_assert_eq!(indices.len(), data.len());
        Self { indices, data }
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn iter(self) -> impl Iterator<Item = (i64, f64)> + 'a {
        let (indices, data) = (self.indices, self.data);
        indices.iter().copied().zip(data.iter().copied())
    }
}

/// An owned `1 x dim` sparse vector with sorted, unique indices.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct SparseVec {
    pub dim: usize,
    pub indices: Vec<i64>,
    pub data: Vec<f64>,
}

impl SparseVec {
    /// Validated construction: equal lengths, indices strictly increasing and
    /// within `[0, dim)`.
    pub fn from_parts(dim: usize, indices: Vec<i64>, data: Vec<f64>) -> Result<Self, SparseError> {
        if indices.len() != data.len() {
            return Err(SparseError::LengthMismatch {
                indices: indices.len(),
                data: data.len(),
            });
        }
        let mut prev = -1i64;
        for &j in &indices {
            if j < 0 {
                return Err(SparseError::NegativeIndex { index: j });
            }
            if i64_to_usize(j) >= dim {
                return Err(SparseError::ColumnOutOfBounds { col: j, ncols: dim });
            }
            if j <= prev {
                return Err(SparseError::NotStrictlyIncreasing { row: 0 });
            }
            prev = j;
        }
        Ok(Self { dim, indices, data })
    }

    /// Take the single row of a `1 x n` matrix as a vector of dimension `n`.
    ///
    /// The matrix is re-checked row-wise, so an unsorted input is rejected
    /// here rather than silently mis-scored by the merge kernel.
    pub fn from_csr_row(a: Csr<f64, i64>) -> Result<Self, SparseError> {
        if a.nrows != 1 {
            return Err(SparseError::NotSingleRow { nrows: a.nrows });
        }
        Self::from_parts(a.ncols, a.indices, a.data)
    }

    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn view(&self) -> RowView<'_> {
        RowView::new(&self.indices, &self.data)
    }

    /// Scatter the nonzeros into a zero-filled array of length `dim`.
    #[must_use]
    pub fn to_dense(&self) -> Vec<f64> {
        let mut out = vec![0.0f64; self.dim];
        for (j, v) in self.view().iter() {
            out[i64_to_usize(j)] = v;
        }
        out
    }
}
