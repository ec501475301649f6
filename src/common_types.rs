//! This module contains the data structures shared by the data generator and the perceptron.

use num_traits::Float;

/// Represents a single data point, with features and a label.
///
/// - `F`: The type of the features (e.g., `f64`, `f32`).
/// - `L`: The type of the label. Everything in this crate uses [`Label`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataPoint<F, L> {
    pub features: Vec<F>,
    pub label: L,
}

impl<F, L> DataPoint<F, L> {
    pub fn new(features: Vec<F>, label: L) -> Self {
        DataPoint { features, label }
    }
}

/// Binary class of a point: which side of a separator it falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    /// The label as `+1` / `-1`.
    pub fn value(self) -> i8 {
        match self {
            Label::Positive => 1,
            Label::Negative => -1,
        }
    }

    /// The label as a signed float, used as the step direction of the update rule.
    pub fn sign<F: Float>(self) -> F {
        match self {
            Label::Positive => F::one(),
            Label::Negative => -F::one(),
        }
    }

    /// Parses `+1` / `-1`. Anything else is not a label.
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            1 => Some(Label::Positive),
            -1 => Some(Label::Negative),
            _ => None,
        }
    }
}

/// A point in the plane paired with its true class.
pub type LabeledPoint<F> = DataPoint<F, Label>;
