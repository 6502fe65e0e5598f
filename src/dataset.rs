//! Typed records for the two widget datasets and the seeded train/test
//! split used by the polynomial fitting engine.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::{Error, Result};

/// Class label for the height dataset. Group A is the taller group, the one
/// the boundary assigns probability above 0.5 as x grows (for positive
/// slope).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    A,
    B,
}

/// One labeled observation from the fixed height dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabeledPoint {
    pub height: f64,
    pub label: Label,
}

/// One (x, y) observation for curve fitting, e.g. (day-of-year fraction,
/// temperature).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

const GROUP_A_HEIGHTS: [f64; 10] = [
    171.0, 173.29, 176.52, 177.1, 177.70, 177.9, 178.3, 178.87, 180.3, 181.9,
];
const GROUP_B_HEIGHTS: [f64; 10] = [
    159.89, 161.42, 162.32, 162.6, 162.98, 163.2, 163.41, 164.53, 167.2, 168.4,
];

/// The fixed synthetic height dataset: 20 points, 10 per label, ascending
/// within each group.
pub fn height_points() -> Vec<LabeledPoint> {
    GROUP_A_HEIGHTS
        .iter()
        .map(|&height| LabeledPoint { height, label: Label::A })
        .chain(
            GROUP_B_HEIGHTS
                .iter()
                .map(|&height| LabeledPoint { height, label: Label::B }),
        )
        .collect()
}

/// Integer plotting domain for the height dataset: (floor of the minimum
/// height, ceil of the maximum). The UI uses this for its center slider
/// bounds and the curve x-grid.
pub fn height_range() -> (i64, i64) {
    let points = height_points();
    let min = points.iter().map(|p| p.height).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.height).fold(f64::NEG_INFINITY, f64::max);
    (min.floor() as i64, max.ceil() as i64)
}

/// Splits `samples` into disjoint (train, test) sets whose union is the
/// input. The partition is a seeded shuffle: the same seed and input always
/// produce the identical split, so fitted curves and error sweeps are
/// reproducible across runs.
///
/// `round(n * test_fraction)` samples land in the test set.
pub fn train_test_split(
    samples: &[Sample],
    test_fraction: f64,
    seed: u64,
) -> Result<(Vec<Sample>, Vec<Sample>)> {
    if samples.is_empty() {
        return Err(Error::EmptyInput);
    }
    if test_fraction <= 0.0 || test_fraction >= 1.0 {
        return Err(Error::InvalidTestFraction(test_fraction));
    }

    let n_samples = samples.len();
    let n_test = (n_samples as f64 * test_fraction).round() as usize;

    let mut indices: Vec<usize> = (0..n_samples).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test = indices[..n_test].iter().map(|&i| samples[i]).collect();
    let train = indices[n_test..].iter().map(|&i| samples[i]).collect();

    Ok((train, test))
}
