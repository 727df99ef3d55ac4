use dotbench_core::{Coo, Csr, SparseError};

#[test]
fn from_parts_ok() {
    let nrows = 2usize;
    let ncols = 3usize;
    let indptr = vec![0i64, 2, 3];
    let indices = vec![0i64, 2, 1];
    let data = vec![1.0f64, 2.0, 3.0];
    let csr = Csr::from_parts(nrows, ncols, indptr, indices, data, true).unwrap();
    assert_eq!(csr.nnz(), 3);
    assert_eq!(csr.shape(), (2, 3));
    assert_eq!(csr.row_nnz(0), 2);
    assert_eq!(csr.row(1).indices, &[1i64]);
    assert_eq!(csr.row(1).data, &[3.0f64]);
}

#[test]
fn indptr_first_must_be_zero() {
    let indptr = vec![1i64, 1]; // first element not zero, but still length 2 and last == 1 == nnz
    let err = Csr::from_parts(1, 3, indptr, vec![0i64], vec![1.0f64], true).unwrap_err();
    assert_eq!(err, SparseError::IndptrFirst);
    assert!(err.to_string().contains("must be 0"));
}

#[test]
fn indptr_length_must_be_nrows_plus_one() {
    let err = Csr::from_parts(2, 3, vec![0i64, 1], vec![0i64], vec![1.0f64], true).unwrap_err();
    assert_eq!(err, SparseError::IndptrLength { expected: 3, got: 2 });
}

#[test]
fn nnz_and_lengths_must_match() {
    // indices/data length mismatch
    let indptr = vec![0i64, 2];
    let indices = vec![0i64, 1];
    let data = vec![1.0f64];
    let err = Csr::from_parts(1, 3, indptr, indices, data, true).unwrap_err();
    assert!(err.to_string().contains("indices and data"));
}

#[test]
fn last_element_must_equal_nnz() {
    let indptr = vec![0i64, 1];
    let indices = vec![0i64, 1];
    let data = vec![1.0f64, 2.0];
    let err = Csr::from_parts(1, 3, indptr, indices, data, true).unwrap_err();
    assert!(err.to_string().contains("last element"));
}

#[test]
fn indptr_non_decreasing_per_row() {
    let indptr = vec![0i64, 2, 1]; // decreasing at the last step; last element 1 == nnz
    let err = Csr::from_parts(2, 3, indptr, vec![0i64], vec![1.0f64], true).unwrap_err();
    assert!(err.to_string().contains("must be non-decreasing"));
}

#[test]
fn strict_increasing_columns_enforced() {
    let indptr = vec![0i64, 2];
    let indices = vec![1i64, 1]; // duplicate within row
    let data = vec![1.0f64, 2.0];
    let err = Csr::from_parts(1, 3, indptr, indices, data, true).unwrap_err();
    assert!(err.to_string().contains("strictly increasing"));
}

#[test]
fn column_index_out_of_bounds() {
    let indptr = vec![0i64, 1];
    let indices = vec![3i64]; // out of bounds (valid: 0..=2)
    let data = vec![1.0f64];
    let err = Csr::from_parts(1, 3, indptr, indices, data, true).unwrap_err();
    assert!(err.to_string().contains("out of bounds"));
}

#[test]
fn unchecked_skips_row_walk() {
    let indptr = vec![0i64, 2];
    let indices = vec![2i64, 0];
    let data = vec![1.0f64, 2.0];
    let csr = Csr::from_parts(1, 3, indptr, indices, data, false).unwrap();
    assert!(!csr.has_sorted_indices());
}

#[test]
fn sort_indices_carries_values() {
    // rows: [(2,1),(0,2)], [], [(1,5),(0,4),(2,6)]
    let indptr = vec![0i64, 2, 2, 5];
    let indices = vec![2i64, 0, 1, 0, 2];
    let data = vec![1.0f64, 2.0, 5.0, 4.0, 6.0];
    let mut csr = Csr::from_parts_unchecked(3, 3, indptr, indices, data);
    csr.sort_indices();
    assert!(csr.has_sorted_indices());
    assert_eq!(csr.indptr, vec![0i64, 2, 2, 5]);
    assert_eq!(csr.indices, vec![0i64, 2, 0, 1, 2]);
    assert_eq!(csr.data, vec![2.0f64, 1.0, 4.0, 5.0, 6.0]);
}

#[test]
fn zeros_and_density() {
    let z = Csr::zeros(4, 5);
    assert_eq!(z.nnz(), 0);
    assert_eq!(z.indptr.len(), 5);
    assert!(z.row(3).is_empty());
    assert!(z.density().abs() < 1e-12);

    let a = Csr::from_parts(2, 2, vec![0i64, 1, 2], vec![0i64, 1], vec![1.0f64, 1.0], true).unwrap();
    assert!((a.density() - 0.5).abs() < 1e-12);
    assert!(Csr::zeros(0, 0).density().abs() < 1e-12);
}

#[test]
fn coo_bounds_checked() {
    let ok = Coo::from_parts(2, 3, vec![0i64, 1], vec![2i64, 0], vec![1.0f64, 2.0], true).unwrap();
    assert_eq!(ok.nnz(), 2);
    assert_eq!(ok.shape(), (2, 3));

    let err = Coo::from_parts(2, 3, vec![2i64], vec![0i64], vec![1.0f64], true).unwrap_err();
    assert!(matches!(err, SparseError::RowOutOfBounds { row: 2, nrows: 2 }));
    let err = Coo::from_parts(2, 3, vec![0i64], vec![-1i64], vec![1.0f64], true).unwrap_err();
    assert!(matches!(err, SparseError::NegativeIndex { index: -1 }));
    let err = Coo::from_parts(2, 3, vec![0i64, 1], vec![0i64], vec![1.0f64, 2.0], true).unwrap_err();
    assert!(matches!(err, SparseError::LengthMismatch { .. }));
}
