//! Repeated train/evaluate trials and their averages.
//!
//! Each trial draws a fresh target line and training sample, trains a
//! zero-initialized perceptron on it, then estimates the out-of-sample error
//! on a second, independent sample drawn from its own random line.

use crate::config::{ExperimentConfig, TrainingConfig};
use crate::data::DataGenerator;
use crate::error::Result;
use crate::perceptron::Perceptron;
use crate::random::RngFactory;
use std::fmt;
use tracing::{debug, info};

/// Outcome of one trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialResult {
    pub iterations: usize,
    pub error_probability: f64,
}

/// Averages over all trials for one training set size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentSummary {
    pub sample_size: usize,
    pub trials: usize,
    pub average_iterations: f64,
    pub average_error_probability: f64,
}

impl fmt::Display for ExperimentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "For {} known data points", self.sample_size)?;
        writeln!(
            f,
            "\tAveragely it takes {} iterations to find function",
            self.average_iterations
        )?;
        write!(
            f,
            "\tAverage mistake probability is equal to {}",
            self.average_error_probability
        )
    }
}

/// One trial: train on `sample_size` points, evaluate on `evaluation_points`.
pub fn run_trial(
    sample_size: usize,
    evaluation_points: usize,
    training: TrainingConfig,
    rngs: &mut RngFactory,
) -> Result<TrialResult> {
    let data: DataGenerator<f64> = DataGenerator::new(sample_size, &mut rngs.fresh());
    let mut perceptron: Perceptron<f64, _> = Perceptron::new(rngs.fresh()).with_config(training);
    let iterations = perceptron.train(data.points())?;

    // Held-out set: fresh line, fresh points.
    let held_out: DataGenerator<f64> = DataGenerator::new(evaluation_points, &mut rngs.fresh());
    let error_probability = perceptron.evaluate(held_out.points())?;

    Ok(TrialResult {
        iterations,
        error_probability,
    })
}

/// Runs `config.trials` trials for every sample size and averages them.
///
/// # Panics
/// Panics if `config.trials` is 0.
pub fn run_experiment(config: &ExperimentConfig) -> Result<Vec<ExperimentSummary>> {
    if config.trials == 0 {
        panic!("Experiment needs at least one trial per sample size.");
    }
    let mut rngs = RngFactory::new(config.seed);
    let mut summaries = Vec::with_capacity(config.sample_sizes.len());

    for &sample_size in &config.sample_sizes {
        let mut total_iterations = 0usize;
        let mut total_error = 0.0;
        for trial in 0..config.trials {
            let result = run_trial(
                sample_size,
                config.evaluation_points,
                config.training,
                &mut rngs,
            )?;
            debug!(sample_size, trial, ?result, "trial finished");
            total_iterations += result.iterations;
            total_error += result.error_probability;
        }

        let summary = ExperimentSummary {
            sample_size,
            trials: config.trials,
            average_iterations: total_iterations as f64 / config.trials as f64,
            average_error_probability: total_error / config.trials as f64,
        };
        info!(
            sample_size,
            average_iterations = summary.average_iterations,
            average_error_probability = summary.average_error_probability,
            "experiment summary"
        );
        summaries.push(summary);
    }
    Ok(summaries)
}
