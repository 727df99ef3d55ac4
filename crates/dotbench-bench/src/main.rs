use anyhow::Result;
use clap::Parser;
use dotbench_bench::{run, BenchConfig, Cli};
use std::time::Duration;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dotbench=info".parse()?),
        )
        .init();

    let cfg = BenchConfig::try_from(Cli::parse())?;
    let report = run(&cfg)?;

    let reference = report
        .timings
        .first()
        .map_or(Duration::ZERO, |(_, t)| *t);
    for (name, t) in &report.timings {
        let speedup = reference.as_secs_f64() / t.as_secs_f64().max(f64::MIN_POSITIVE);
        info!("{name:<30} {:>10.6}s  x{speedup:.2} vs sparse-dense", t.as_secs_f64());
    }
    Ok(())
}
