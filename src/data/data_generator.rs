//! Synthetic, linearly separable data: a random target line and points labeled by it.

use crate::common_types::{Label, LabeledPoint};
use crate::random::RandomSource;
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use std::fmt::Debug;
use tracing::debug;

/// Label given to a point lying exactly on the target line (cross product == 0).
pub const ON_LINE_LABEL: Label = Label::Negative;

/// The target function: a line through two points of [-1,1]×[-1,1].
///
/// Coincident endpoints are accepted as-is; every point then lands on the
/// "line" and is labeled [`ON_LINE_LABEL`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line<F> {
    pub start: [F; 2],
    pub end: [F; 2],
}

impl<F: Float> Line<F> {
    pub fn new(start: [F; 2], end: [F; 2]) -> Self {
        Line { start, end }
    }

    /// Draws both endpoints uniformly from [-1,1]×[-1,1].
    pub fn random<R: RandomSource>(rng: &mut R) -> Self
    where
        F: SampleUniform,
    {
        let start = [rng.uniform(-F::one(), F::one()), rng.uniform(-F::one(), F::one())];
        let end = [rng.uniform(-F::one(), F::one()), rng.uniform(-F::one(), F::one())];
        Line { start, end }
    }

    /// 2D cross product of (end - start) and (end - point). Positive on one side,
    /// negative on the other, zero on the line.
    pub fn cross(&self, point: [F; 2]) -> F {
        let v1 = [self.end[0] - self.start[0], self.end[1] - self.start[1]];
        let v2 = [self.end[0] - point[0], self.end[1] - point[1]];
        v1[0] * v2[1] - v1[1] * v2[0]
    }
}

/// Owns one target line and the labeled sample drawn for it. One instance per trial.
#[derive(Debug, Clone)]
pub struct DataGenerator<F> {
    line: Line<F>,
    points: Vec<LabeledPoint<F>>,
}

impl<F> DataGenerator<F>
where
    F: Float + SampleUniform + Debug,
{
    /// Draws a random target line, then `n` uniformly distributed points labeled by it.
    pub fn new<R: RandomSource>(n: usize, rng: &mut R) -> Self {
        let line = Line::random(rng);
        Self::from_line(line, n, rng)
    }

    /// Like [`DataGenerator::new`] but with a caller-chosen target line.
    pub fn from_line<R: RandomSource>(line: Line<F>, n: usize, rng: &mut R) -> Self {
        let mut generator = DataGenerator {
            line,
            points: Vec::with_capacity(n),
        };
        for _ in 0..n {
            let point = [rng.uniform(-F::one(), F::one()), rng.uniform(-F::one(), F::one())];
            let label = generator.classify(point);
            generator.points.push(LabeledPoint::new(point.to_vec(), label));
        }
        debug!(?line, n, "generated labeled sample");
        generator
    }

    /// True label of `point`: positive when the cross product is strictly positive.
    pub fn classify(&self, point: [F; 2]) -> Label {
        if self.line.cross(point) > F::zero() {
            Label::Positive
        } else {
            ON_LINE_LABEL
        }
    }

    pub fn line(&self) -> &Line<F> {
        &self.line
    }

    pub fn points(&self) -> &[LabeledPoint<F>] {
        &self.points
    }

    pub fn into_points(self) -> Vec<LabeledPoint<F>> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn x_axis_generator() -> DataGenerator<f64> {
        let mut rng = StdRng::seed_from_u64(0);
        DataGenerator::from_line(Line::new([-1.0, 0.0], [1.0, 0.0]), 0, &mut rng)
    }

    #[test]
    fn test_generates_requested_number_of_points() {
        let mut rng = StdRng::seed_from_u64(1);
        let generator: DataGenerator<f64> = DataGenerator::new(25, &mut rng);
        assert_eq!(generator.points().len(), 25);
        for p in generator.points() {
            assert_eq!(p.features.len(), 2);
            assert!(p.features.iter().all(|x| (-1.0..=1.0).contains(x)));
        }
    }

    #[test]
    fn test_zero_points() {
        let mut rng = StdRng::seed_from_u64(1);
        let generator: DataGenerator<f64> = DataGenerator::new(0, &mut rng);
        assert!(generator.points().is_empty());
    }

    #[test]
    fn test_line_endpoints_in_unit_square() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let line: Line<f64> = Line::random(&mut rng);
            for c in line.start.iter().chain(line.end.iter()) {
                assert!((-1.0..=1.0).contains(c));
            }
        }
    }

    #[test]
    fn test_x_axis_labels_above_and_below() {
        // Line runs left to right: v1 = (2, 0). For (0, 1), v2 = (1, -1) and the
        // cross product is -2; for (0, -1), v2 = (1, 1) and it is +2.
        let generator = x_axis_generator();
        assert_eq!(generator.line().cross([0.0, 1.0]), -2.0);
        assert_eq!(generator.line().cross([0.0, -1.0]), 2.0);
        assert_eq!(generator.classify([0.0, 1.0]), Label::Negative);
        assert_eq!(generator.classify([0.0, -1.0]), Label::Positive);
    }

    #[test]
    fn test_reversed_line_flips_labels() {
        let mut rng = StdRng::seed_from_u64(0);
        let generator: DataGenerator<f64> =
            DataGenerator::from_line(Line::new([1.0, 0.0], [-1.0, 0.0]), 0, &mut rng);
        assert_eq!(generator.classify([0.0, 1.0]), Label::Positive);
        assert_eq!(generator.classify([0.0, -1.0]), Label::Negative);
    }

    #[test]
    fn test_point_on_line_is_negative() {
        let generator = x_axis_generator();
        assert_eq!(generator.line().cross([0.5, 0.0]), 0.0);
        assert_eq!(generator.classify([0.5, 0.0]), ON_LINE_LABEL);
        assert_eq!(generator.classify([0.5, 0.0]), Label::Negative);
        // Endpoints themselves are on the line too.
        assert_eq!(generator.classify([1.0, 0.0]), Label::Negative);
        assert_eq!(generator.classify([-1.0, 0.0]), Label::Negative);
    }

    #[test]
    fn test_degenerate_line_labels_everything_negative() {
        let mut rng = StdRng::seed_from_u64(9);
        let line = Line::new([0.3, 0.3], [0.3, 0.3]);
        let generator: DataGenerator<f64> = DataGenerator::from_line(line, 50, &mut rng);
        assert!(generator.points().iter().all(|p| p.label == Label::Negative));
    }

    #[test]
    fn test_classify_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(11);
        let generator: DataGenerator<f64> = DataGenerator::new(0, &mut rng);
        let point = [0.25, -0.75];
        let first = generator.classify(point);
        for _ in 0..10 {
            assert_eq!(generator.classify(point), first);
        }
    }

    #[test]
    fn test_into_points_matches_points() {
        let mut rng = StdRng::seed_from_u64(5);
        let generator: DataGenerator<f64> = DataGenerator::new(10, &mut rng);
        let borrowed = generator.points().to_vec();
        assert_eq!(generator.into_points(), borrowed);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_stored_labels_match_classify(seed in any::<u64>(), n in 1usize..200) {
            let mut rng = StdRng::seed_from_u64(seed);
            let generator: DataGenerator<f64> = DataGenerator::new(n, &mut rng);
            for p in generator.points() {
                let point = [p.features[0], p.features[1]];
                prop_assert_eq!(generator.classify(point), p.label);
            }
        }
    }
}
