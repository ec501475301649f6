//! Perceptron Learning Algorithm on synthetic, linearly separable 2D data.
//!
//! [`data::DataGenerator`] draws a random target line in [-1,1]×[-1,1] and labels
//! uniformly drawn points by the side of the line they fall on.
//! [`perceptron::Perceptron`] learns a separator from those points and reports its
//! misclassification rate on any labeled set. [`experiment`] repeats the two to
//! measure convergence speed and out-of-sample error.

pub mod common_types;
pub mod config;
pub mod data;
pub mod error;
pub mod experiment;
pub mod perceptron;
pub mod random;

#[cfg(feature = "python")]
mod python;

pub use common_types::{DataPoint, Label, LabeledPoint};
pub use error::{PlaError, Result};
