use crate::dataset::Sample;
use crate::error::{Error, Result};
use crate::metrics::mean_squared_error;
use crate::{Matrix, Vector};

/// Expands a scalar into its monomial features `[x, x^2, ..., x^degree]`.
/// No bias column; the intercept is handled by the fit itself.
pub fn expand_features(x: f64, degree: usize) -> Result<Vec<f64>> {
    if degree < 1 {
        return Err(Error::InvalidDegree(degree));
    }
    Ok((1..=degree).map(|k| x.powi(k as i32)).collect())
}

/// The n x degree monomial design matrix for a sample slice.
pub fn design_matrix(samples: &[Sample], degree: usize) -> Result<Matrix> {
    if degree < 1 {
        return Err(Error::InvalidDegree(degree));
    }
    if samples.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut x = Matrix::zeros((samples.len(), degree));
    for (i, sample) in samples.iter().enumerate() {
        for (j, feature) in expand_features(sample.x, degree)?.into_iter().enumerate() {
            x[(i, j)] = feature;
        }
    }
    Ok(x)
}

/// One entry of the bias/variance error curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegreeError {
    pub degree: usize,
    pub train_mse: f64,
    pub test_mse: f64,
}

/// Ordinary-least-squares polynomial regression of a fixed degree.
///
/// `fit` solves the normal equations over the expanded monomial features of
/// the training samples plus an intercept. A degree at or above the sample
/// count, a singular system, or a non-finite solution surfaces as
/// [`Error::DegenerateFit`]. No regularization is applied.
#[derive(Clone, Debug)]
pub struct PolynomialRegression {
    pub degree: usize,
    pub coefficients: Option<Vector>,
    pub intercept: Option<f64>,
}

impl PolynomialRegression {
    pub fn new(degree: usize) -> Self {
        Self {
            degree,
            coefficients: None,
            intercept: None,
        }
    }

    pub fn fit(&mut self, samples: &[Sample]) -> Result<()> {
        let n_samples = samples.len();
        let x = design_matrix(samples, self.degree)?;
        let y = Vector::from_iter(samples.iter().map(|s| s.y));

        // degree + 1 unknowns (with intercept) need more than `degree`
        // equations for a unique least-squares solution.
        if self.degree >= n_samples {
            return Err(Error::DegenerateFit {
                degree: self.degree,
                n_samples,
            });
        }

        let mut x_with_intercept = Matrix::ones((n_samples, self.degree + 1));
        x_with_intercept.slice_mut(ndarray::s![.., 1..]).assign(&x);

        let xt = x_with_intercept.t();
        let xtx = xt.dot(&x_with_intercept);
        let xty = xt.dot(&y);

        let solution = self.solve_linear_system(&xtx, &xty)?;
        if solution.iter().any(|c| !c.is_finite()) {
            return Err(Error::DegenerateFit {
                degree: self.degree,
                n_samples,
            });
        }

        self.intercept = Some(solution[0]);
        self.coefficients = Some(solution.slice(ndarray::s![1..]).to_owned());
        Ok(())
    }

    /// Evaluates the fitted polynomial at each input independently.
    pub fn predict(&self, xs: &[f64]) -> Result<Vec<f64>> {
        let coeffs = self.coefficients.as_ref().ok_or(Error::NotFitted)?;
        let intercept = self.intercept.ok_or(Error::NotFitted)?;

        Ok(xs
            .iter()
            .map(|&x| {
                intercept
                    + coeffs
                        .iter()
                        .enumerate()
                        .map(|(k, c)| c * x.powi(k as i32 + 1))
                        .sum::<f64>()
            })
            .collect())
    }

    /// Prediction points sorted ascending by x, ready for line plotting
    /// over an unsorted test set.
    pub fn fitted_curve(&self, xs: &[f64]) -> Result<Vec<(f64, f64)>> {
        let predictions = self.predict(xs)?;
        let mut points: Vec<(f64, f64)> =
            xs.iter().copied().zip(predictions).collect();
        points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        Ok(points)
    }

    // Gaussian elimination with partial pivoting. A numerically zero pivot
    // means the normal equations are singular.
    fn solve_linear_system(&self, a: &Matrix, b: &Vector) -> Result<Vector> {
        let n = a.nrows();
        let mut aug = Matrix::zeros((n, n + 1));

        for i in 0..n {
            for j in 0..n {
                aug[(i, j)] = a[(i, j)];
            }
            aug[(i, n)] = b[i];
        }

        for i in 0..n {
            let mut max_row = i;
            for k in (i + 1)..n {
                if aug[(k, i)].abs() > aug[(max_row, i)].abs() {
                    max_row = k;
                }
            }

            if aug[(max_row, i)].abs() < 1e-10 {
                return Err(Error::DegenerateFit {
                    degree: self.degree,
                    n_samples: n,
                });
            }

            if max_row != i {
                for j in 0..=n {
                    let temp = aug[(i, j)];
                    aug[(i, j)] = aug[(max_row, j)];
                    aug[(max_row, j)] = temp;
                }
            }

            for k in (i + 1)..n {
                let factor = aug[(k, i)] / aug[(i, i)];
                for j in i..=n {
                    aug[(k, j)] -= factor * aug[(i, j)];
                }
            }
        }

        let mut x = Vector::zeros(n);
        for i in (0..n).rev() {
            x[i] = aug[(i, n)];
            for j in (i + 1)..n {
                x[i] -= aug[(i, j)] * x[j];
            }
            x[i] /= aug[(i, i)];
        }

        Ok(x)
    }
}

/// Fits one fresh model per degree `1..=max_degree` on `train` and records
/// train and test MSE for each. Each degree's fit is fully independent, with
/// no warm-starting from the previous degree's coefficients; each entry must
/// match what a standalone fit at that degree would produce.
pub fn sweep_degrees(
    train: &[Sample],
    test: &[Sample],
    max_degree: usize,
) -> Result<Vec<DegreeError>> {
    if max_degree < 1 {
        return Err(Error::InvalidDegree(max_degree));
    }

    let train_xs: Vec<f64> = train.iter().map(|s| s.x).collect();
    let train_ys: Vec<f64> = train.iter().map(|s| s.y).collect();
    let test_xs: Vec<f64> = test.iter().map(|s| s.x).collect();
    let test_ys: Vec<f64> = test.iter().map(|s| s.y).collect();

    let mut curve = Vec::with_capacity(max_degree);
    for degree in 1..=max_degree {
        let mut model = PolynomialRegression::new(degree);
        model.fit(train)?;

        let train_pred = model.predict(&train_xs)?;
        let test_pred = model.predict(&test_xs)?;

        curve.push(DegreeError {
            degree,
            train_mse: mean_squared_error(&train_ys, &train_pred)?,
            test_mse: mean_squared_error(&test_ys, &test_pred)?,
        });
    }

    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_samples() -> Vec<Sample> {
        vec![
            Sample::new(1.0, 2.0),
            Sample::new(2.0, 4.0),
            Sample::new(3.0, 6.0),
            Sample::new(4.0, 8.0),
        ]
    }

    // Deterministic wiggly data on [0, 1], enough points for mid degrees.
    fn wiggly_samples() -> Vec<Sample> {
        let residuals = [0.3, -0.2, 0.1, -0.4, 0.25, -0.1, 0.35, -0.3, 0.15, -0.05, 0.2, -0.25];
        (0..12)
            .map(|i| {
                let x = i as f64 / 11.0;
                Sample::new(x, (x * 6.0).sin() + residuals[i])
            })
            .collect()
    }

    #[test]
    fn test_expand_features() {
        assert_eq!(expand_features(2.0, 3).unwrap(), vec![2.0, 4.0, 8.0]);
        assert!(matches!(expand_features(2.0, 0), Err(Error::InvalidDegree(0))));
    }

    #[test]
    fn test_design_matrix_shape() {
        let x = design_matrix(&line_samples(), 2).unwrap();
        assert_eq!(x.shape(), &[4, 2]);
        assert_eq!(x[(3, 0)], 4.0);
        assert_eq!(x[(3, 1)], 16.0);
    }

    #[test]
    fn test_degree_one_recovers_exact_line() {
        let mut model = PolynomialRegression::new(1);
        model.fit(&line_samples()).unwrap();

        let slope = model.coefficients.as_ref().unwrap()[0];
        let intercept = model.intercept.unwrap();
        assert!((slope - 2.0).abs() < 1e-8);
        assert!(intercept.abs() < 1e-8);

        let xs: Vec<f64> = line_samples().iter().map(|s| s.x).collect();
        let ys: Vec<f64> = line_samples().iter().map(|s| s.y).collect();
        let predictions = model.predict(&xs).unwrap();
        let mse = mean_squared_error(&ys, &predictions).unwrap();
        assert!(mse < 1e-12);
    }

    #[test]
    fn test_degenerate_fit_degree_at_sample_count() {
        let mut model = PolynomialRegression::new(5);
        assert!(matches!(
            model.fit(&line_samples()),
            Err(Error::DegenerateFit { degree: 5, n_samples: 4 })
        ));
        assert!(model.coefficients.is_none());
    }

    #[test]
    fn test_fit_rejects_empty_input() {
        let mut model = PolynomialRegression::new(1);
        assert!(matches!(model.fit(&[]), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_predict_without_fit() {
        let model = PolynomialRegression::new(2);
        assert!(matches!(model.predict(&[1.0]), Err(Error::NotFitted)));
    }

    #[test]
    fn test_fitted_curve_sorted_by_x() {
        let mut model = PolynomialRegression::new(1);
        model.fit(&line_samples()).unwrap();

        let curve = model.fitted_curve(&[3.0, 1.0, 4.0, 2.0]).unwrap();
        let xs: Vec<f64> = curve.iter().map(|p| p.0).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0, 4.0]);
        assert!((curve[0].1 - 2.0).abs() < 1e-8);
    }

    #[test]
    fn test_train_mse_non_increasing_in_degree() {
        let samples = wiggly_samples();
        let curve = sweep_degrees(&samples, &samples, 5).unwrap();
        for pair in curve.windows(2) {
            assert!(pair[1].train_mse <= pair[0].train_mse + 1e-8);
        }
    }

    #[test]
    fn test_sweep_lengths_and_order() {
        let samples = wiggly_samples();
        let single = sweep_degrees(&samples, &samples, 1).unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].degree, 1);

        let curve = sweep_degrees(&samples, &samples, 4).unwrap();
        assert_eq!(curve.len(), 4);
        let degrees: Vec<usize> = curve.iter().map(|e| e.degree).collect();
        assert_eq!(degrees, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sweep_on_noisy_quadratic() {
        use ndarray::Array1;
        use ndarray_rand::RandomExt;
        use ndarray_rand::rand_distr::Normal;
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut rng = StdRng::seed_from_u64(3);
        let noise = Array1::random_using(30, Normal::new(0.0, 0.1).unwrap(), &mut rng);
        let samples: Vec<Sample> = (0..30)
            .map(|i| {
                let x = i as f64 / 29.0;
                Sample::new(x, 1.0 + 3.0 * x - 2.0 * x * x + noise[i])
            })
            .collect();
        let (train, test) = crate::dataset::train_test_split(&samples, 0.4, 10).unwrap();

        let curve = sweep_degrees(&train, &test, 6).unwrap();
        assert_eq!(curve.len(), 6);
        for entry in &curve {
            assert!(entry.train_mse.is_finite() && entry.train_mse >= 0.0);
            assert!(entry.test_mse.is_finite() && entry.test_mse >= 0.0);
        }
        // The quadratic term is real, so degree 2 should beat degree 1 on
        // held-out data.
        assert!(curve[1].test_mse < curve[0].test_mse);
    }

    #[test]
    fn test_sweep_rejects_zero_max_degree() {
        let samples = wiggly_samples();
        assert!(matches!(
            sweep_degrees(&samples, &samples, 0),
            Err(Error::InvalidDegree(0))
        ));
    }

    #[test]
    fn test_sweep_propagates_degenerate_fit() {
        let samples = line_samples();
        assert!(matches!(
            sweep_degrees(&samples, &samples, 10),
            Err(Error::DegenerateFit { .. })
        ));
    }
}
