//! Numeric core for two interactive statistical-learning teaching widgets:
//! a logistic decision boundary driven by a slope/center pair, and
//! ordinary-least-squares polynomial curve fitting with a per-degree
//! train/test error sweep.
//!
//! Every operation here is a pure, stateless computation; the UI shell that
//! owns sliders and charts calls back into this crate on each parameter
//! change and redraws from the returned sequences.

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod error;
pub mod linear_model;
pub mod metrics;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

pub use dataset::{Label, LabeledPoint, Sample};
pub use error::{Error, Result};
pub use linear_model::{DegreeError, LogisticBoundary, PolynomialRegression, Prediction};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_types_work() {
        let vec = Vector::zeros(5);
        let mat = Matrix::zeros((3, 4));
        assert_eq!(vec.len(), 5);
        assert_eq!(mat.shape(), &[3, 4]);
    }
}
