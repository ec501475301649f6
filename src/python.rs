//! Python bindings (feature `python`).
//!
//! Points cross the boundary as `((x, y), label)` tuples with integer labels ±1.

use crate::common_types::{Label, LabeledPoint};
use crate::config::TrainingConfig;
use crate::data::{DataGenerator, Line};
use crate::error::PlaError;
use crate::perceptron::{Perceptron, WeightInit};
use crate::random::RngFactory;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rand::rngs::StdRng;

type PyPoint = (Vec<f64>, i64);

impl From<PlaError> for PyErr {
    fn from(err: PlaError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

fn to_labeled_points(points: Vec<PyPoint>) -> Result<Vec<LabeledPoint<f64>>, PlaError> {
    points
        .into_iter()
        .map(|(features, label)| {
            let label = Label::from_value(label).ok_or(PlaError::InvalidLabel(label))?;
            Ok(LabeledPoint::new(features, label))
        })
        .collect()
}

#[pyclass(name = "DataGenerator")]
struct PyDataGenerator {
    inner: DataGenerator<f64>,
}

#[pymethods]
impl PyDataGenerator {
    #[new]
    #[pyo3(signature = (n = 10, line = None, seed = None))]
    fn new(n: usize, line: Option<([f64; 2], [f64; 2])>, seed: Option<u64>) -> Self {
        let mut rng = RngFactory::new(seed).fresh();
        let inner = match line {
            Some((start, end)) => DataGenerator::from_line(Line::new(start, end), n, &mut rng),
            None => DataGenerator::new(n, &mut rng),
        };
        PyDataGenerator { inner }
    }

    fn points(&self) -> Vec<((f64, f64), i8)> {
        self.inner
            .points()
            .iter()
            .map(|p| ((p.features[0], p.features[1]), p.label.value()))
            .collect()
    }

    fn classify(&self, point: (f64, f64)) -> i8 {
        self.inner.classify([point.0, point.1]).value()
    }

    fn line(&self) -> ((f64, f64), (f64, f64)) {
        let line = self.inner.line();
        ((line.start[0], line.start[1]), (line.end[0], line.end[1]))
    }
}

#[pyclass(name = "Perceptron")]
struct PyPerceptron {
    inner: Perceptron<f64, StdRng>,
}

#[pymethods]
impl PyPerceptron {
    #[new]
    #[pyo3(signature = (d = 2, random_weights = false, max_rounds = None, seed = None))]
    fn new(d: usize, random_weights: bool, max_rounds: Option<usize>, seed: Option<u64>) -> PyResult<Self> {
        if d == 0 {
            return Err(PyValueError::new_err("d must be greater than 0."));
        }
        let init = if random_weights { WeightInit::Uniform } else { WeightInit::Zeros };
        let inner = Perceptron::with_options(d, init, RngFactory::new(seed).fresh())
            .with_config(TrainingConfig { max_rounds });
        Ok(PyPerceptron { inner })
    }

    /// Trains until every point is classified correctly; returns the round count.
    fn train(&mut self, points: Vec<PyPoint>) -> PyResult<usize> {
        let points = to_labeled_points(points)?;
        Ok(self.inner.train(&points)?)
    }

    fn evaluate(&self, points: Vec<PyPoint>) -> PyResult<f64> {
        let points = to_labeled_points(points)?;
        Ok(self.inner.evaluate(&points)?)
    }

    fn classify(&self, point: Vec<f64>) -> PyResult<i8> {
        if point.len() != self.inner.dimension() {
            return Err(PlaError::DimensionMismatch {
                expected: self.inner.dimension(),
                actual: point.len(),
            }
            .into());
        }
        Ok(self.inner.classify(&point).value())
    }

    #[getter]
    fn weights(&self) -> Vec<f64> {
        self.inner.weights().to_vec()
    }
}

/// The Python module. Its name must match the `lib.name` in `Cargo.toml`.
#[pymodule]
fn perceptron_learning(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDataGenerator>()?;
    m.add_class::<PyPerceptron>()?;
    Ok(())
}
