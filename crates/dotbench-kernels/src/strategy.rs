//! Interchangeable sparse-sparse intersection strategies
//!
//! Each strategy prepares the weight vector once per call (borrowing it, or
//! building an index from it) and then scores rows one at a time through
//! [`RowDotSparse`]. [`Strategy`] selects one at run time.

use crate::binary_search::{sparse_sparse_binary_search_f64_i64, BinarySearchDot};
use crate::error::KernelError;
use crate::hash_map::{sparse_sparse_hash_map_f64_i64, HashMapDot};
use crate::incremental::{sparse_sparse_incremental_f64_i64, IncrementalDot};
use dotbench_core::{Csr, RowView, SparseVec};
use std::fmt;

/// Row-vs-weight dot product over a prepared sparse weight vector.
pub trait RowDotSparse {
    /// Dot product of one sorted row with the prepared weights.
    fn row_dot(&self, row: RowView<'_>) -> f64;

    /// Score every row of `a` into `out`; callers check shapes first.
    #[inline]
    fn fill(&self, a: &Csr<f64, i64>, out: &mut [f64]) {
        debug_assert_eq!(out.len(), a.nrows);
        for (i, oi) in out.iter_mut().enumerate() {
            *oi = self.row_dot(a.row(i));
        }
    }
}

impl<K: RowDotSparse + ?Sized> RowDotSparse for Box<K> {
    #[inline]
    fn row_dot(&self, row: RowView<'_>) -> f64 {
        (**self).row_dot(row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    BinarySearch,
    HashMap,
    Incremental,
}

impl Strategy {
    pub const ALL: [Self; 3] = [Self::BinarySearch, Self::HashMap, Self::Incremental];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BinarySearch => "sparse-sparse binary search",
            Self::HashMap => "sparse-sparse hash map",
            Self::Incremental => "sparse-sparse incremental",
        }
    }

    /// Prepare `w` for repeated row scoring with this strategy.
    #[must_use]
    pub fn prepare<'w>(self, w: &'w SparseVec) -> Box<dyn RowDotSparse + 'w> {
        match self {
            Self::BinarySearch => Box::new(BinarySearchDot::new(w)),
            Self::HashMap => Box::new(HashMapDot::new(w)),
            Self::Incremental => Box::new(IncrementalDot::new(w)),
        }
    }

    /// out = A @ w using this strategy.
    pub fn run(
        self,
        a: &Csr<f64, i64>,
        w: &SparseVec,
        out: &mut [f64],
    ) -> Result<(), KernelError> {
        match self {
            Self::BinarySearch => sparse_sparse_binary_search_f64_i64(a, w, out),
            Self::HashMap => sparse_sparse_hash_map_f64_i64(a, w, out),
            Self::Incremental => sparse_sparse_incremental_f64_i64(a, w, out),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
