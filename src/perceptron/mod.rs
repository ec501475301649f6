pub mod perceptron;

pub use perceptron::{Perceptron, TrainingState, WeightInit, ZERO_ACTIVATION_LABEL};
