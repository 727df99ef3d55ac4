use crate::error::{check_shapes, KernelError};
use crate::strategy::RowDotSparse;
use dotbench_core::{Csr, RowView, SparseVec};

/// Probe the shorter operand's indices in the longer one's sorted index list.
///
/// Costs O(min * log max) comparisons; an empty side returns 0 without
/// searching.
#[inline]
#[must_use]
pub fn binary_search_row(row: RowView<'_>, w: RowView<'_>) -> f64 {
    if row.is_empty() || w.is_empty() {
        return 0.0;
    }
    let (probe, target) = if row.len() <= w.len() { (row, w) } else { (w, row) };
    let mut acc = 0.0f64;
    for (j, v) in probe.iter() {
        if let Ok(p) = target.indices.binary_search(&j) {
            acc += v * target.data[p];
        }
    }
    acc
}

pub struct BinarySearchDot<'w> {
    w: RowView<'w>,
}

impl<'w> BinarySearchDot<'w> {
    #[inline]
    #[must_use]
    pub fn new(w: &'w SparseVec) -> Self {
        Self { w: w.view() }
    }
}

impl RowDotSparse for BinarySearchDot<'_> {
    #[inline]
    fn row_dot(&self, row: RowView<'_>) -> f64 {
        binary_search_row(row, self.w)
    }
}

/// out = A @ w, intersecting each row with `w` by binary search.
pub fn sparse_sparse_binary_search_f64_i64(
    a: &Csr<f64, i64>,
    w: &SparseVec,
    out: &mut [f64],
) -> Result<(), KernelError> {
    check_shapes(a, w.dim, out)?;
    BinarySearchDot::new(w).fill(a, out);
    Ok(())
}
