#![allow(
    clippy::many_single_char_names,
    reason = "Math kernels conventionally use i/j/k/p to denote indices and pointers"
)]
use crate::error::{check_shapes, KernelError};
use dotbench_core::{i64_to_usize, Csr, RowView};

/// Dot one sparse row against a dense weight array by direct offset lookup.
///
/// Accumulates in row order with separate multiply and add, the same rounding
/// as the sparse-sparse kernels.
#[inline]
#[must_use]
pub fn sparse_dense_row(row: RowView<'_>, w: &[f64]) -> f64 {
    let idx = row.indices;
    let val = row.data;
    let len = idx.len();
    let mut acc = 0.0f64;

    let mut t = 0usize;
    let limit4 = len & !3;
    while t < limit4 {
        let j0 = i64_to_usize(idx[t]);
        let j1 = i64_to_usize(idx[t + 1]);
        let j2 = i64_to_usize(idx[t + 2]);
        let j3 = i64_to_usize(idx[t + 3]);
        acc += val[t] * w[j0];
        acc += val[t + 1] * w[j1];
        acc += val[t + 2] * w[j2];
        acc += val[t + 3] * w[j3];
        t += 4;
    }
    while t < len {
        acc += val[t] * w[i64_to_usize(idx[t])];
        t += 1;
    }
    acc
}

/// out = A @ w, with `w` densified to length `ncols`.
///
/// Every slot of `out` is assigned, so the buffer does not need zeroing.
pub fn sparse_dense_f64_i64(
    a: &Csr<f64, i64>,
    w: &[f64],
    out: &mut [f64],
) -> Result<(), KernelError> {
    check_shapes(a, w.len(), out)?;
    for (i, oi) in out.iter_mut().enumerate() {
        *oi = sparse_dense_row(a.row(i), w);
    }
    Ok(())
}
