//! Benchmark driver for the dotbench kernels
//!
//! Generates a random CSR matrix and sparse weight vector, times the dense
//! reference and each sparse-sparse strategy, and checks they agree.

pub mod config;
pub mod generate;
pub mod report;

pub use config::{BenchConfig, Cli, ConfigError};
pub use generate::{gen_sparse_matrix, gen_sparse_weights};
pub use report::{best_of, check_agreement, AgreementError};

use anyhow::{Context, Result};
use dotbench_kernels::{sparse_dense_f64_i64, Strategy};
use std::time::Duration;
use tracing::info;

/// Best wall time per kernel, reference first.
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub timings: Vec<(String, Duration)>,
}

/// Generate data per `cfg`, run every kernel and validate agreement.
pub fn run(cfg: &BenchConfig) -> Result<BenchReport> {
    info!("Loading matrix...");
    info!("Shape: ({}, {})", cfg.n_samples, cfg.n_features);
    info!("Sparsity: {}", cfg.matrix_sparsity);
    let mut x = gen_sparse_matrix(cfg.n_samples, cfg.n_features, cfg.matrix_sparsity, cfg.seed)
        .context("generating matrix")?;

    info!("Loading vector...");
    info!("Shape: (1, {})", cfg.n_features);
    info!("Sparsity: {}", cfg.weight_sparsity);
    let w = gen_sparse_weights(
        cfg.n_features,
        cfg.weight_sparsity,
        cfg.seed.wrapping_add(1),
    )
    .context("generating weight vector")?;

    info!("Sorting indices...");
    x.sort_indices();
    info!(nnz = x.nnz(), density = x.density(), weight_nnz = w.nnz(), "data ready");

    let mut timings = Vec::with_capacity(1 + Strategy::ALL.len());

    let dense = w.to_dense();
    let mut reference = vec![0.0f64; x.nrows];
    let t = best_of(cfg.repeat, || sparse_dense_f64_i64(&x, &dense, &mut reference))
        .context("sparse-dense")?;
    info!("sparse-dense: {:.6}s", t.as_secs_f64());
    timings.push(("sparse-dense".to_owned(), t));

    for s in Strategy::ALL {
        let mut out = vec![0.0f64; x.nrows];
        let t = best_of(cfg.repeat, || s.run(&x, &w, &mut out)).context(s.name())?;
        info!("{}: {:.6}s", s.name(), t.as_secs_f64());
        check_agreement(s.name(), &reference, &out, cfg.tolerance)?;
        timings.push((s.name().to_owned(), t));
    }

    Ok(BenchReport { timings })
}
