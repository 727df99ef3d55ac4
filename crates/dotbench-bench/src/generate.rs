//! Random sparse test data
//
// Each row draws `floor(ncols * sparsity)` distinct columns uniformly without
// replacement and uniform values in [0, 1). Rows are generated in parallel,
// each from its own seeded RNG, so output does not depend on thread count.

use dotbench_core::{usize_to_i64, Coo, Csr, SparseError, SparseVec};
use dotbench_kernels::coo_to_csr_f64_i64;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Nonzeros per row for a requested sparsity (truncating, like `int()`).
#[must_use]
pub fn nnz_per_row(ncols: usize, sparsity: f64) -> usize {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let n = (ncols as f64 * sparsity) as usize;
    n.min(ncols)
}

#[inline]
fn row_seed(seed: u64, row: usize) -> u64 {
    seed ^ (row as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Generate an `nrows x ncols` CSR matrix with a fixed nonzero count per row.
pub fn gen_sparse_matrix(
    nrows: usize,
    ncols: usize,
    sparsity: f64,
    seed: u64,
) -> Result<Csr<f64, i64>, SparseError> {
    let nnz = nnz_per_row(ncols, sparsity);
    let rows: Vec<(Vec<i64>, Vec<f64>)> = (0..nrows)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(row_seed(seed, i));
            let cols: Vec<i64> = index::sample(&mut rng, ncols, nnz)
                .into_iter()
                .map(usize_to_i64)
                .collect();
            let vals: Vec<f64> = (0..nnz).map(|_| rng.random::<f64>()).collect();
            (cols, vals)
        })
        .collect();

    let total = nrows * nnz;
    let mut row = Vec::with_capacity(total);
    let mut col = Vec::with_capacity(total);
    let mut data = Vec::with_capacity(total);
    for (i, (cols, vals)) in rows.into_iter().enumerate() {
        row.extend(std::iter::repeat(usize_to_i64(i)).take(cols.len()));
        col.extend(cols);
        data.extend(vals);
    }
    let coo = Coo::from_parts(nrows, ncols, row, col, data, true)?;
    Ok(coo_to_csr_f64_i64(&coo))
}

/// Generate a `1 x dim` weight vector the same way as a matrix row.
pub fn gen_sparse_weights(dim: usize, sparsity: f64, seed: u64) -> Result<SparseVec, SparseError> {
    SparseVec::from_csr_row(gen_sparse_matrix(1, dim, sparsity, seed)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_have_requested_nnz() {
        let a = gen_sparse_matrix(20, 100, 0.1, 3).unwrap();
        assert_eq!(a.shape(), (20, 100));
        assert_eq!(a.nnz(), 200);
        assert!((0..a.nrows).all(|i| a.row_nnz(i) == 10));
        assert!(a.has_sorted_indices());
        assert!(a.data.iter().all(|&v| (0.0..1.0).contains(&v)));
        assert!((a.density() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn same_seed_same_matrix() {
        let a = gen_sparse_matrix(16, 64, 0.25, 42).unwrap();
        let b = gen_sparse_matrix(16, 64, 0.25, 42).unwrap();
        assert_eq!(a, b);
        let c = gen_sparse_matrix(16, 64, 0.25, 43).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn sparsity_edges() {
        assert_eq!(nnz_per_row(10, 0.0), 0);
        assert_eq!(nnz_per_row(10, 1.0), 10);
        assert_eq!(nnz_per_row(10, 0.19), 1);
        let full = gen_sparse_matrix(2, 5, 1.0, 0).unwrap();
        assert_eq!(full.indices, vec![0i64, 1, 2, 3, 4, 0, 1, 2, 3, 4]);
        let empty = gen_sparse_matrix(3, 5, 0.0, 0).unwrap();
        assert_eq!(empty.nnz(), 0);
        assert_eq!(empty.indptr, vec![0i64, 0, 0, 0]);
    }

    #[test]
    fn weights_are_single_sorted_row() {
        let w = gen_sparse_weights(50, 0.7, 9).unwrap();
        assert_eq!(w.dim, 50);
        assert_eq!(w.nnz(), 35);
        assert!(w.indices.windows(2).all(|p| p[0] < p[1]));
    }
}
