//! COO (triplet) format definitions and constructors
//!
//! Triplets may arrive in any order and may repeat a coordinate; conversion to
//! CSR (`dotbench_kernels::convert::coo_to_csr_f64_i64`) sorts and coalesces.

use crate::error::SparseError;

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Coo<T, I> {
    pub data: Vec<T>,
    pub row: Vec<I>, // length nnz
    pub col: Vec<I>, // length nnz
    pub ncols: usize,
    pub nrows: usize,
}

impl<T, I> Coo<T, I> {
    #[inline]
    #[must_use]
    pub const fn nnz(&self) -> usize {
        self.data.len()
    }
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }
}

impl Coo<f64, i64> {
    #[inline]
    pub fn from_parts(
        nrows: usize,
        ncols: usize,
        row: Vec<i64>,
        col: Vec<i64>,
        data: Vec<f64>,
        check: bool,
    ) -> Result<Self, SparseError> {
        if row.len() != data.len() {
            return Err(SparseError::LengthMismatch {
                indices: row.len(),
                data: data.len(),
            });
        }
        if col.len() != data.len() {
            return Err(SparseError::LengthMismatch {
                indices: col.len(),
                data: data.len(),
            });
        }
        if check {
            for (&i, &j) in row.iter().zip(col.iter()) {
                if i < 0 {
                    return Err(SparseError::NegativeIndex { index: i });
                }
                if j < 0 {
                    return Err(SparseError::NegativeIndex { index: j });
                }
                if !usize::try_from(i).is_ok_and(|ii| ii < nrows) {
                    return Err(SparseError::RowOutOfBounds { row: i, nrows });
                }
                if !usize::try_from(j).is_ok_and(|jj| jj < ncols) {
                    return Err(SparseError::ColumnOutOfBounds { col: j, ncols });
                }
            }
        }
        Ok(Self {
            data,
            row,
            col,
            ncols,
            nrows,
        })
    }
}
