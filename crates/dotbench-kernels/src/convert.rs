//! Format conversions feeding the kernels

use dotbench_core::{i64_to_usize, usize_to_i64, Coo, Csr};

/// Convert COO -> CSR (f64/i64) with canonical rows.
///
/// Each row's column indices come out strictly increasing; repeated
/// coordinates are coalesced by summing their values.
#[must_use]
pub fn coo_to_csr_f64_i64(a: &Coo<f64, i64>) -> Csr<f64, i64> {
    let nrows = a.nrows;
    let nnz = a.data.len();

    // Count per row
    let mut counts = vec![0usize; nrows + 1];
    for &i in &a.row {
        counts[i64_to_usize(i) + 1] += 1;
    }
    for r in 0..nrows {
        counts[r + 1] += counts[r];
    }

    // Scatter (col, value) pairs into row buckets
    let mut next = counts.clone();
    let mut pairs = vec![(0i64, 0.0f64); nnz];
    for k in 0..nnz {
        let i = i64_to_usize(a.row[k]);
        pairs[next[i]] = (a.col[k], a.data[k]);
        next[i] += 1;
    }

    let mut indptr = Vec::with_capacity(nrows + 1);
    let mut indices = Vec::with_capacity(nnz);
    let mut data = Vec::with_capacity(nnz);
    indptr.push(0i64);
    for r in 0..nrows {
        let bucket = &mut pairs[counts[r]..counts[r + 1]];
        bucket.sort_unstable_by_key(|&(j, _)| j);
        let row_start = indices.len();
        for &(j, v) in bucket.iter() {
            if indices.len() > row_start && indices.last() == Some(&j) {
                if let Some(last) = data.last_mut() {
                    *last += v;
                }
            } else {
                indices.push(j);
                data.push(v);
            }
        }
        indptr.push(usize_to_i64(indices.len()));
    }

    if indices.len() < nnz {
        log::debug!("coo_to_csr: coalesced {} duplicate entries", nnz - indices.len());
    }
    Csr::from_parts_unchecked(nrows, a.ncols, indptr, indices, data)
}
