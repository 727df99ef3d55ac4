//! CSR format definitions and constructors

use crate::error::SparseError;
use crate::i64_to_usize;
use crate::sparse_vec::RowView;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Csr<T, I> {
    pub nrows: usize,
    pub ncols: usize,
    pub indptr: Vec<I>,  // row pointer, length nrows + 1
    pub indices: Vec<I>, // column indices per row
    pub data: Vec<T>,
}

impl<T, I> Csr<T, I> {
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }
    #[inline]
    #[must_use]
    pub const fn nnz(&self) -> usize {
        self.data.len()
    }
}

impl Csr<f64, i64> {
    /// Build from raw CSR arrays.
    ///
    /// The pointer array shape (`len`, first, last) is always checked. With
    /// `check`, every row is also walked: pointers must be non-decreasing and
    /// column indices strictly increasing and within `[0, ncols)`.
    #[inline]
    pub fn from_parts(
        nrows: usize,
        ncols: usize,
        indptr: Vec<i64>,
        indices: Vec<i64>,
        data: Vec<f64>,
        check: bool,
    ) -> Result<Self, SparseError> {
        let Some(expected_len) = nrows.checked_add(1) else {
            return Err(SparseError::Overflow);
        };
        if indptr.len() != expected_len {
            return Err(SparseError::IndptrLength {
                expected: expected_len,
                got: indptr.len(),
            });
        }
        if indices.len() != data.len() {
            return Err(SparseError::LengthMismatch {
                indices: indices.len(),
                data: data.len(),
            });
        }
        let nnz = indices.len();
        if usize::try_from(indptr.last().copied().unwrap_or(0)).ok() != Some(nnz) {
            return Err(SparseError::IndptrLast { nnz });
        }
        if indptr.first().copied().unwrap_or(0) != 0 {
            return Err(SparseError::IndptrFirst);
        }
        if check {
            for (row, w) in indptr.windows(2).enumerate() {
                if w[0] > w[1] || w[0] < 0 {
                    return Err(SparseError::IndptrDecreasing { row });
                }
            }
            for row in 0..nrows {
                let start = i64_to_usize(indptr[row]);
                let end = i64_to_usize(indptr[row + 1]);
                let mut prev_col = -1i64;
                for &j in &indices[start..end] {
                    if j < 0 {
                        return Err(SparseError::NegativeIndex { index: j });
                    }
                    if i64_to_usize(j) >= ncols {
                        return Err(SparseError::ColumnOutOfBounds { col: j, ncols });
                    }
                    if j <= prev_col {
                        return Err(SparseError::NotStrictlyIncreasing { row });
                    }
                    prev_col = j;
                }
            }
        }
        Ok(Self {
            nrows,
            ncols,
            indptr,
            indices,
            data,
        })
    }

    #[inline]
    #[must_use]
    pub const fn from_parts_unchecked(
        nrows: usize,
        ncols: usize,
        indptr: Vec<i64>,
        indices: Vec<i64>,
        data: Vec<f64>,
    ) -> Self {
        Self {
            nrows,
            ncols,
            indptr,
            indices,
            data,
        }
    }

    /// An `nrows x ncols` matrix with no stored entries.
    #[must_use]
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::from_parts_unchecked(nrows, ncols, vec![0; nrows + 1], Vec::new(), Vec::new())
    }

    /// Borrow row `i` as a sparse view into the shared storage.
    ///
    /// # Panics
    ///
    /// Panics if `i >= nrows`.
    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> RowView<'_> {
        let s = i64_to_usize(self.indptr[i]);
        let e = i64_to_usize(self.indptr[i + 1]);
        RowView::new(&self.indices[s..e], &self.data[s..e])
    }

    #[inline]
    #[must_use]
    pub fn row_nnz(&self, i: usize) -> usize {
        i64_to_usize(self.indptr[i + 1]) - i64_to_usize(self.indptr[i])
    }

    /// Fraction of stored entries over `nrows * ncols` (0 for an empty shape).
    #[must_use]
    pub fn density(&self) -> f64 {
        let cells = self.nrows.saturating_mul(self.ncols);
        if cells == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        {
            self.nnz() as f64 / cells as f64
        }
    }

    /// True when every row has strictly increasing column indices.
    #[must_use]
    pub fn has_sorted_indices(&self) -> bool {
        (0..self.nrows).all(|i| self.row(i).indices.windows(2).all(|w| w[0] < w[1]))
    }

    /// Sort the column indices of every row in place, carrying values along.
    ///
    /// Rows that are already ordered are left untouched. Duplicates are not
    /// merged; build through [`Coo`](crate::Coo) conversion to coalesce them.
    pub fn sort_indices(&mut self) {
        let mut scratch: Vec<(i64, f64)> = Vec::new();
        let mut touched = 0usize;
        for i in 0..self.nrows {
            let s = i64_to_usize(self.indptr[i]);
            let e = i64_to_usize(self.indptr[i + 1]);
            let cols = &self.indices[s..e];
            if cols.windows(2).all(|w| w[0] <= w[1]) {
                continue;
            }
            scratch.clear();
            scratch.extend(cols.iter().copied().zip(self.data[s..e].iter().copied()));
            scratch.sort_unstable_by_key(|&(j, _)| j);
            for (p, &(j, v)) in (s..e).zip(scratch.iter()) {
                self.indices[p] = j;
                self.data[p] = v;
            }
            touched += 1;
        }
        log::debug!("sort_indices: reordered {touched} of {} rows", self.nrows);
    }
}
