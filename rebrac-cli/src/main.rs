use anyhow::Result;
use clap::Parser;
use rebrac_core::{Experiment, run};
use rebrac_d3rlpy::D3rlpy;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

mod cli;

/// `info` unless `directives` (the value of RUST_LOG) says otherwise.
fn env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn main() -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .init();

    let experiment = Experiment::from(cli::Args::parse());
    tracing::info!(
        dataset = %experiment.dataset,
        seed = experiment.seed,
        gpu = ?experiment.gpu,
        "starting ReBRAC run"
    );

    let report = run(&experiment, &mut D3rlpy::new())?;
    match report.final_metrics() {
        Some(metrics) => {
            for (name, value) in metrics {
                tracing::info!(experiment = %report.experiment_name, metric = %name, value, "final");
            }
        }
        None => tracing::warn!(experiment = %report.experiment_name, "no epochs were recorded"),
    }
    Ok(())
}
