use crate::error::{check_shapes, KernelError};
use crate::strategy::RowDotSparse;
use dotbench_core::{Csr, RowView, SparseVec};
use std::cmp::Ordering;

/// Merge-walk two sorted index lists, accumulating on equal indices.
///
/// O(|row| + |w|). Both lists must be strictly increasing; on a tie both
/// cursors advance.
#[inline]
#[must_use]
pub fn incremental_row(row: RowView<'_>, w: RowView<'_>) -> f64 {
    let (ri, rv) = (row.indices, row.data);
    let (wi, wv) = (w.indices, w.data);
    let mut acc = 0.0f64;
    let mut p = 0usize;
    let mut q = 0usize;
    while p < ri.len() && q < wi.len() {
        match ri[p].cmp(&wi[q]) {
            Ordering::Less => p += 1,
            Ordering::Greater => q += 1,
            Ordering::Equal => {
                acc += rv[p] * wv[q];
                p += 1;
                q += 1;
            }
        }
    }
    acc
}

pub struct IncrementalDot<'w> {
    w: RowView<'w>,
}

impl<'w> IncrementalDot<'w> {
    #[inline]
    #[must_use]
    pub fn new(w: &'w SparseVec) -> Self {
        Self { w: w.view() }
    }
}

impl RowDotSparse for IncrementalDot<'_> {
    #[inline]
    fn row_dot(&self, row: RowView<'_>) -> f64 {
        incremental_row(row, self.w)
    }
}

/// out = A @ w, intersecting each row with `w` by a linear merge.
pub fn sparse_sparse_incremental_f64_i64(
    a: &Csr<f64, i64>,
    w: &SparseVec,
    out: &mut [f64],
) -> Result<(), KernelError> {
    check_shapes(a, w.dim, out)?;
    IncrementalDot::new(w).fill(a, out);
    Ok(())
}
