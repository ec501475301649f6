//! Convergence and generalization of the Perceptron Learning Algorithm.
//!
//! Runs 1000 trials for training sets of 10 and 100 points and prints the
//! average number of iterations and the average out-of-sample mistake
//! probability (estimated on 1000 held-out points). Set `RUST_LOG=info` to
//! see per-size summaries as they finish, `RUST_LOG=debug` for every trial.

use anyhow::Result;
use perceptron_learning::config::ExperimentConfig;
use perceptron_learning::experiment::run_experiment;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = ExperimentConfig::default();
    for summary in run_experiment(&config)? {
        println!("{summary}\n");
    }
    Ok(())
}
