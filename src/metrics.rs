use crate::error::{Error, Result};

/// Mean squared error between paired observations.
pub fn mean_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    if actual.is_empty() || predicted.is_empty() {
        return Err(Error::EmptyInput);
    }
    if actual.len() != predicted.len() {
        return Err(Error::LengthMismatch {
            expected: actual.len(),
            actual: predicted.len(),
        });
    }

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p) * (a - p))
        .sum();
    Ok(sum / actual.len() as f64)
}
