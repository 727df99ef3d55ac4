//! Call-entry errors for the dot kernels.
//!
//! Only O(1) shape checks happen at kernel entry; sparse structure is assumed
//! valid (see `dotbench_core::SparseError` for construction-time checks).

use dotbench_core::Csr;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum KernelError {
    #[error("weight dimension must equal ncols (expected {expected}, got {got})")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("output length must equal nrows (expected {expected}, got {got})")]
    OutputLength { expected: usize, got: usize },
}

/// Reject mismatched weight dimension or output length before any row runs.
#[inline]
pub(crate) fn check_shapes(
    a: &Csr<f64, i64>,
    weight_dim: usize,
    out: &[f64],
) -> Result<(), KernelError> {
    if weight_dim != a.ncols {
        return Err(KernelError::DimensionMismatch {
            expected: a.ncols,
            got: weight_dim,
        });
    }
    if out.len() != a.nrows {
        return Err(KernelError::OutputLength {
            expected: a.nrows,
            got: out.len(),
        });
    }
    Ok(())
}
