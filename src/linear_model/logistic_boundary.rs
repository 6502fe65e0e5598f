use crate::dataset::Label;

/// Outcome of classifying a query point against the boundary. `Unknown`
/// marks the exact tie at p == 0.5 (the query sits on the boundary, or the
/// slope is zero); it is a value, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prediction {
    Label(Label),
    Unknown,
}

/// A logistic decision boundary parameterized directly by slope and center
/// instead of being trained: the boundary line is `slope * x + intercept`
/// with `intercept = -slope * center`, so the decision value is exactly
/// zero at `x == center` and the probability there is exactly 0.5.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogisticBoundary {
    pub slope: f64,
    pub center: f64,
}

impl LogisticBoundary {
    pub fn new(slope: f64, center: f64) -> Self {
        Self { slope, center }
    }

    /// Derived intercept; never stored.
    pub fn intercept(&self) -> f64 {
        -self.slope * self.center
    }

    /// Raw pre-sigmoid score `slope * x + intercept` (the log-odds line).
    pub fn decision_value(&self, x: f64) -> f64 {
        self.slope * x + self.intercept()
    }

    /// Logistic sigmoid. Large-magnitude inputs saturate to exactly 0.0 or
    /// 1.0 instead of overflowing `exp`.
    pub fn sigmoid(z: f64) -> f64 {
        if z > 500.0 {
            1.0
        } else if z < -500.0 {
            0.0
        } else {
            1.0 / (1.0 + (-z).exp())
        }
    }

    /// Probability that `x` belongs to group A.
    pub fn probability(&self, x: f64) -> f64 {
        Self::sigmoid(self.decision_value(x))
    }

    /// Classifies a query point: A above the boundary, B below, `Unknown`
    /// on the exact tie.
    pub fn classify(&self, x: f64) -> Prediction {
        let p = self.probability(x);
        if p > 0.5 {
            Prediction::Label(Label::A)
        } else if p < 0.5 {
            Prediction::Label(Label::B)
        } else {
            Prediction::Unknown
        }
    }

    /// Lazy `(x, decision value)` points over the inclusive integer grid
    /// `[x_min, x_max]`, for plotting the log-odds line. Restart by calling
    /// again or cloning the iterator.
    pub fn decision_curve(&self, x_min: i64, x_max: i64) -> impl Iterator<Item = (f64, f64)> + Clone {
        let boundary = *self;
        (x_min..=x_max).map(move |x| (x as f64, boundary.decision_value(x as f64)))
    }

    /// Lazy `(x, probability)` points over the same inclusive integer grid.
    pub fn probability_curve(
        &self,
        x_min: i64,
        x_max: i64,
    ) -> impl Iterator<Item = (f64, f64)> + Clone {
        let boundary = *self;
        (x_min..=x_max).map(move |x| (x as f64, boundary.probability(x as f64)))
    }
}
