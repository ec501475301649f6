//! Configuration for training runs and for the experiment driver.

/// Options for [`crate::perceptron::perceptron::Perceptron::train`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainingConfig {
    /// Maximum number of corrections before `train` gives up.
    /// `None` runs until convergence, which never happens on non-separable data.
    pub max_rounds: Option<usize>,
}

impl TrainingConfig {
    pub fn with_max_rounds(max_rounds: usize) -> Self {
        TrainingConfig {
            max_rounds: Some(max_rounds),
        }
    }
}

/// Parameters of the convergence / generalization experiment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentConfig {
    /// Training set sizes, one summary per entry.
    pub sample_sizes: Vec<usize>,
    /// Repetitions per training set size.
    pub trials: usize,
    /// Size of the held-out set used to estimate the error probability.
    pub evaluation_points: usize,
    /// Master seed. `None` seeds every generator from system entropy.
    pub seed: Option<u64>,
    pub training: TrainingConfig,
}

impl ExperimentConfig {
    pub const DEFAULT_SAMPLE_SIZES: [usize; 2] = [10, 100];
    pub const DEFAULT_TRIALS: usize = 1000;
    pub const DEFAULT_EVALUATION_POINTS: usize = 1000;
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            sample_sizes: Self::DEFAULT_SAMPLE_SIZES.to_vec(),
            trials: Self::DEFAULT_TRIALS,
            evaluation_points: Self::DEFAULT_EVALUATION_POINTS,
            seed: None,
            training: TrainingConfig::default(),
        }
    }
}
