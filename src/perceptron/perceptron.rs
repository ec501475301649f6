//! Core perceptron classifier and the Perceptron Learning Algorithm.

use crate::common_types::{Label, LabeledPoint};
use crate::config::TrainingConfig;
use crate::error::{PlaError, Result};
use crate::random::RandomSource;
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use std::fmt::Debug;
use tracing::{debug, trace};

/// Label given to a point whose weighted sum is exactly zero.
///
/// Note this is the opposite of [`crate::data::ON_LINE_LABEL`]; both tie-breaks
/// are kept as they are.
pub const ZERO_ACTIVATION_LABEL: Label = Label::Positive;

/// How the weight vector is initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeightInit {
    /// All `d + 1` weights start at zero.
    #[default]
    Zeros,
    /// All `d + 1` weights, bias included, drawn uniformly from [-1, 1].
    Uniform,
}

/// Phases of one `train` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainingState {
    /// Collecting the points the current weights get wrong.
    Scanning,
    /// At least one point is wrong; indices are in encounter order.
    Correcting { misclassified: Vec<usize> },
    /// Every point is classified correctly.
    Converged,
}

/// Linear classifier `sign(w0 + w1*x1 + ... + wd*xd)`.
///
/// `weights[0]` is the bias, `weights[i + 1]` multiplies feature `i`.
/// The perceptron owns the random source it uses to pick which misclassified
/// point to correct on each round.
#[derive(Debug)]
pub struct Perceptron<F, R> {
    weights: Vec<F>,
    dimension: usize,
    config: TrainingConfig,
    rng: R,
}

impl<F, R> Perceptron<F, R>
where
    F: Float + SampleUniform + Debug,
    R: RandomSource,
{
    pub const DEFAULT_DIMENSION: usize = 2;

    /// Two-dimensional perceptron with zero weights.
    pub fn new(rng: R) -> Self {
        Self::with_options(Self::DEFAULT_DIMENSION, WeightInit::Zeros, rng)
    }

    pub fn with_options(dimension: usize, init: WeightInit, mut rng: R) -> Self {
        if dimension == 0 {
            panic!("Perceptron dimension must be greater than 0.");
        }
        let weights = match init {
            WeightInit::Zeros => vec![F::zero(); dimension + 1],
            WeightInit::Uniform => (0..=dimension)
                .map(|_| rng.uniform(-F::one(), F::one()))
                .collect(),
        };
        Perceptron {
            weights,
            dimension,
            config: TrainingConfig::default(),
            rng,
        }
    }

    /// Perceptron with explicit weights; the dimension is `weights.len() - 1`.
    pub fn from_weights(weights: Vec<F>, rng: R) -> Self {
        if weights.len() < 2 {
            panic!("Weight vector must hold a bias and at least one feature weight.");
        }
        Perceptron {
            dimension: weights.len() - 1,
            weights,
            config: TrainingConfig::default(),
            rng,
        }
    }

    pub fn with_config(mut self, config: TrainingConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn weights(&self) -> &[F] {
        &self.weights
    }

    /// Weighted sum `w0 + Σ w[i+1] * x[i]`.
    ///
    /// # Panics
    /// Panics if `features.len()` differs from the perceptron's dimension.
    pub fn activation(&self, features: &[F]) -> F {
        assert_eq!(
            features.len(),
            self.dimension,
            "Point dimensionality must match the perceptron's dimension."
        );
        features
            .iter()
            .zip(self.weights[1..].iter())
            .fold(self.weights[0], |s, (&x, &w)| s + w * x)
    }

    pub fn classify(&self, features: &[F]) -> Label {
        if self.activation(features) < F::zero() {
            Label::Negative
        } else {
            ZERO_ACTIVATION_LABEL
        }
    }

    /// Runs the Perceptron Learning Algorithm until every point is classified
    /// correctly and returns the number of rounds it took.
    ///
    /// A round is one scan of `points`; the scan that finds nothing left to fix
    /// counts too, unless it is the very first one, in which case nothing was
    /// trained and the result is 0.
    ///
    /// Only linearly separable input is guaranteed to converge. Without a
    /// `max_rounds` cap this loops forever on anything else.
    pub fn train(&mut self, points: &[LabeledPoint<F>]) -> Result<usize> {
        self.check_points(points)?;

        let mut rounds = 0;
        let mut corrections = 0;
        let mut state = TrainingState::Scanning;
        loop {
            state = match state {
                TrainingState::Scanning => {
                    let misclassified = self.misclassified(points);
                    trace!(
                        rounds,
                        misclassified = misclassified.len(),
                        fraction = misclassified.len() as f64 / points.len() as f64,
                        "scanned label set"
                    );
                    if misclassified.is_empty() {
                        if rounds > 0 {
                            rounds += 1;
                        }
                        TrainingState::Converged
                    } else {
                        rounds += 1;
                        TrainingState::Correcting { misclassified }
                    }
                }
                TrainingState::Correcting { misclassified } => {
                    if let Some(cap) = self.config.max_rounds {
                        if corrections >= cap {
                            debug!(corrections, "training stopped at round cap");
                            return Err(PlaError::IterationCapReached { rounds: corrections });
                        }
                    }
                    let chosen = misclassified[self.rng.pick_index(misclassified.len())];
                    self.update_weights(&points[chosen]);
                    corrections += 1;
                    TrainingState::Scanning
                }
                TrainingState::Converged => {
                    debug!(rounds, weights = ?self.weights, "perceptron converged");
                    return Ok(rounds);
                }
            };
        }
    }

    /// Fraction of `points` this perceptron gets wrong, in [0, 1].
    pub fn evaluate(&self, points: &[LabeledPoint<F>]) -> Result<f64> {
        self.check_points(points)?;
        let mistaken = points
            .iter()
            .filter(|p| self.classify(&p.features) != p.label)
            .count();
        Ok(mistaken as f64 / points.len() as f64)
    }

    /// Indices of misclassified points, in encounter order.
    fn misclassified(&self, points: &[LabeledPoint<F>]) -> Vec<usize> {
        points
            .iter()
            .enumerate()
            .filter(|(_, p)| self.classify(&p.features) != p.label)
            .map(|(i, _)| i)
            .collect()
    }

    /// w[i] += label * (1, x1, ..., xd)[i]
    fn update_weights(&mut self, point: &LabeledPoint<F>) {
        let step: F = point.label.sign();
        self.weights[0] = self.weights[0] + step;
        for (w, &x) in self.weights[1..].iter_mut().zip(point.features.iter()) {
            *w = *w + step * x;
        }
    }

    fn check_points(&self, points: &[LabeledPoint<F>]) -> Result<()> {
        if points.is_empty() {
            return Err(PlaError::EmptyLabelSet);
        }
        if let Some(p) = points.iter().find(|p| p.features.len() != self.dimension) {
            return Err(PlaError::DimensionMismatch {
                expected: self.dimension,
                actual: p.features.len(),
            });
        }
        Ok(())
    }
}
