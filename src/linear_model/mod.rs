//! Linear models behind the two teaching widgets.
//!
//! - `LogisticBoundary`: a slope/center-parameterized logistic decision
//!   boundary with sigmoid probabilities and plotting curves
//! - `PolynomialRegression`: ordinary least squares over expanded monomial
//!   features, with a per-degree train/test error sweep
//!
//! # Examples
//!
//! ## Classifying against a boundary
//! ```rust
//! use statlearn::{Label, LogisticBoundary, Prediction};
//!
//! let boundary = LogisticBoundary::new(0.5, 170.0);
//! assert_eq!(boundary.classify(180.0), Prediction::Label(Label::A));
//! assert_eq!(boundary.classify(160.0), Prediction::Label(Label::B));
//! assert_eq!(boundary.classify(170.0), Prediction::Unknown);
//! ```
//!
//! ## Fitting a polynomial
//! ```rust
//! use statlearn::{PolynomialRegression, Sample};
//!
//! let samples = vec![
//!     Sample::new(1.0, 2.0),
//!     Sample::new(2.0, 4.0),
//!     Sample::new(3.0, 6.0),
//! ];
//! let mut model = PolynomialRegression::new(1);
//! model.fit(&samples).unwrap();
//! let predictions = model.predict(&[4.0]).unwrap();
//! assert!((predictions[0] - 8.0).abs() < 1e-8);
//! ```

mod logistic_boundary;
mod polynomial;

pub use logistic_boundary::{LogisticBoundary, Prediction};
pub use polynomial::{
    DegreeError, PolynomialRegression, design_matrix, expand_features, sweep_degrees,
};
