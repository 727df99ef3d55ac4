//! Timing and cross-kernel agreement checks

use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AgreementError {
    #[error("{kernel}: output has {got} rows, reference has {expected}")]
    Length {
        kernel: String,
        expected: usize,
        got: usize,
    },

    #[error("{kernel}: row {row} differs from reference ({got} vs {expected})")]
    Mismatch {
        kernel: String,
        row: usize,
        expected: f64,
        got: f64,
    },
}

/// True when `a` and `b` agree to `tol`, relative for large magnitudes and
/// absolute near zero.
#[inline]
#[must_use]
pub fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0)
}

/// Compare a kernel's output row by row against the reference.
pub fn check_agreement(
    kernel: &str,
    reference: &[f64],
    out: &[f64],
    tol: f64,
) -> Result<(), AgreementError> {
    if reference.len() != out.len() {
        return Err(AgreementError::Length {
            kernel: kernel.to_owned(),
            expected: reference.len(),
            got: out.len(),
        });
    }
    for (row, (&expected, &got)) in reference.iter().zip(out.iter()).enumerate() {
        if !close(expected, got, tol) {
            return Err(AgreementError::Mismatch {
                kernel: kernel.to_owned(),
                row,
                expected,
                got,
            });
        }
    }
    Ok(())
}

/// Run `f` `repeat` times (at least once) and return the fastest wall time.
pub fn best_of<E>(repeat: usize, mut f: impl FnMut() -> Result<(), E>) -> Result<Duration, E> {
    let mut best = Duration::MAX;
    for _ in 0..repeat.max(1) {
        let start = Instant::now();
        f()?;
        best = best.min(start.elapsed());
    }
    Ok(best)
}
