//! Property-based agreement tests across the four dot kernels

use dotbench_core::{Csr, SparseVec};
use dotbench_kernels::{sparse_dense_f64_i64, Strategy as Kernel};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/// Rows as dense masks: `Some(v)` at column j marks a nonzero.
type Pattern = Vec<Option<f64>>;

fn pattern(ncols: usize) -> impl Strategy<Value = Pattern> {
    prop::collection::vec(prop::option::weighted(0.3, -100.0..100.0f64), ncols)
}

fn problem() -> impl Strategy<Value = (usize, Vec<Pattern>, Pattern)> {
    (1usize..40).prop_flat_map(|ncols| {
        (
            Just(ncols),
            prop::collection::vec(pattern(ncols), 0..8),
            pattern(ncols),
        )
    })
}

fn build(ncols: usize, rows: &[Pattern], weights: &Pattern) -> (Csr<f64, i64>, SparseVec) {
    let mut indptr = vec![0i64];
    let mut indices = Vec::new();
    let mut data = Vec::new();
    for row in rows {
        for (j, v) in row.iter().enumerate() {
            if let Some(v) = v {
                indices.push(j as i64);
                data.push(*v);
            }
        }
        indptr.push(indices.len() as i64);
    }
    let a = Csr::from_parts(rows.len(), ncols, indptr, indices, data, true).unwrap();
    let (wi, wv): (Vec<i64>, Vec<f64>) = weights
        .iter()
        .enumerate()
        .filter_map(|(j, v)| v.map(|v| (j as i64, v)))
        .unzip();
    let w = SparseVec::from_parts(ncols, wi, wv).unwrap();
    (a, w)
}

proptest! {
    /// Property: every sparse-sparse strategy agrees with sparse-dense
    #[test]
    fn prop_kernels_agree((ncols, rows, weights) in problem()) {
        let (a, w) = build(ncols, &rows, &weights);
        let mut reference = vec![0.0f64; a.nrows];
        sparse_dense_f64_i64(&a, &w.to_dense(), &mut reference).unwrap();
        for s in Kernel::ALL {
            let mut out = vec![0.0f64; a.nrows];
            s.run(&a, &w, &mut out).unwrap();
            for (i, (&got, &want)) in out.iter().zip(reference.iter()).enumerate() {
                prop_assert!(close(got, want), "{} row {}: {} vs {}", s, i, got, want);
            }
        }
    }

    /// Property: rows sharing no index with w score exactly zero
    #[test]
    fn prop_disjoint_support_zero((ncols, rows, weights) in problem()) {
        let (a, w) = build(ncols, &rows, &weights);
        for s in Kernel::ALL {
            let mut out = vec![f64::NAN; a.nrows];
            s.run(&a, &w, &mut out).unwrap();
            for i in 0..a.nrows {
                let shared = a.row(i).indices.iter().any(|j| w.indices.binary_search(j).is_ok());
                if !shared {
                    prop_assert_eq!(out[i], 0.0);
                }
            }
        }
    }
}
