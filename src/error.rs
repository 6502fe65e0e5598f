//! Error types shared across the dataset, fitting, and metrics modules.
//!
//! Two families of failure exist: invalid input (rejected before any
//! computation starts) and a degenerate least-squares fit (surfaced instead
//! of returning garbage coefficients). Sigmoid saturation at extreme inputs
//! is defined behavior, not an error.

/// Errors produced by the statlearn numeric core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An input sequence was empty where at least one element is required.
    #[error("Input sequence is empty")]
    EmptyInput,

    /// The train/test fraction must lie strictly between 0 and 1.
    #[error("test_fraction must be in (0, 1), got {0}")]
    InvalidTestFraction(f64),

    /// Polynomial degrees start at 1 (degree 0 would be a bias-only model).
    #[error("Polynomial degree must be at least 1, got {0}")]
    InvalidDegree(usize),

    /// Two sequences that must be evaluated pairwise differ in length.
    #[error("Sequence length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// `predict` was called on a model whose `fit` has not succeeded.
    #[error("Model not fitted. Call fit() first")]
    NotFitted,

    /// The least-squares system has no unique solution — the degree is too
    /// high for the sample count, or the normal equations are singular.
    #[error(
        "Degenerate fit: degree {degree} is ill-posed for {n_samples} training samples \
         (rank-deficient or non-finite solution)"
    )]
    DegenerateFit { degree: usize, n_samples: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
