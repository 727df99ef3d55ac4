//! Command-line options and the validated benchmark configuration

use clap::Parser;
use thiserror::Error;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dotbench",
    about = "Compare sparse row-dot-weight kernels on a random sparse matrix"
)]
pub struct Cli {
    /// Number of matrix rows
    #[arg(default_value_t = 1000)]
    pub n_samples: usize,

    /// Number of matrix columns (and weight vector dimension)
    #[arg(default_value_t = 10_000)]
    pub n_features: usize,

    /// Fraction of nonzero columns per matrix row, in [0, 1]
    #[arg(default_value_t = 0.1)]
    pub matrix_sparsity: f64,

    /// Fraction of nonzero entries in the weight vector, in [0, 1]
    #[arg(default_value_t = 0.7)]
    pub weight_sparsity: f64,

    /// Seed for data generation
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Timed runs per kernel; the best is reported
    #[arg(long, default_value_t = 1)]
    pub repeat: usize,

    /// Relative/absolute tolerance when comparing against sparse-dense
    #[arg(long, default_value_t = 1e-9)]
    pub tolerance: f64,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must lie within [0, 1]; got {value}")]
    SparsityRange { name: &'static str, value: f64 },

    #[error("n_features must be positive")]
    NoFeatures,

    #[error("repeat must be at least 1")]
    NoRepeat,

    #[error("tolerance must be finite and non-negative; got {0}")]
    Tolerance(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub n_samples: usize,
    pub n_features: usize,
    pub matrix_sparsity: f64,
    pub weight_sparsity: f64,
    pub seed: u64,
    pub repeat: usize,
    pub tolerance: f64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            n_samples: 1000,
            n_features: 10_000,
            matrix_sparsity: 0.1,
            weight_sparsity: 0.7,
            seed: 0,
            repeat: 1,
            tolerance: 1e-9,
        }
    }
}

fn check_sparsity(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::SparsityRange { name, value })
    }
}

impl TryFrom<Cli> for BenchConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if cli.n_features == 0 {
            return Err(ConfigError::NoFeatures);
        }
        if cli.repeat == 0 {
            return Err(ConfigError::NoRepeat);
        }
        if !cli.tolerance.is_finite() || cli.tolerance < 0.0 {
            return Err(ConfigError::Tolerance(cli.tolerance));
        }
        Ok(Self {
            n_samples: cli.n_samples,
            n_features: cli.n_features,
            matrix_sparsity: check_sparsity("matrix_sparsity", cli.matrix_sparsity)?,
            weight_sparsity: check_sparsity("weight_sparsity", cli.weight_sparsity)?,
            seed: cli.seed,
            repeat: cli.repeat,
            tolerance: cli.tolerance,
        })
    }
}
