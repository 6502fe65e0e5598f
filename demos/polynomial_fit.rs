use ndarray::Array1;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Normal;
use rand::SeedableRng;
use rand::rngs::StdRng;

use statlearn::dataset::train_test_split;
use statlearn::linear_model::sweep_degrees;
use statlearn::{PolynomialRegression, Sample};

fn main() -> statlearn::Result<()> {
    println!("=== Polynomial Curve Fitting Example ===\n");

    // Synthetic seasonal temperature data: x is the day of the year as a
    // fraction in [0, 1], y is a noisy seasonal curve. Stands in for the
    // parsed time-series file the widget loads at startup.
    let n_days = 40;
    let mut rng = StdRng::seed_from_u64(10);
    let noise = Array1::random_using(n_days, Normal::new(0.0, 2.0).unwrap(), &mut rng);
    let samples: Vec<Sample> = (0..n_days)
        .map(|i| {
            let day = i as f64 / (n_days - 1) as f64;
            let temperature = 12.0 - 10.0 * (std::f64::consts::TAU * day).cos() + noise[i];
            Sample::new(day, temperature)
        })
        .collect();

    let (train, test) = train_test_split(&samples, 0.4, 10)?;
    println!("Dataset split: {} training samples, {} test samples", train.len(), test.len());

    // Fit at the degree currently selected in the widget.
    let degree = 5;
    let mut model = PolynomialRegression::new(degree);
    model.fit(&train)?;

    println!("\nDegree-{} fit:", degree);
    println!("Intercept: {:.4}", model.intercept.unwrap());
    println!("Coefficients: {:.4}", model.coefficients.as_ref().unwrap());

    let test_xs: Vec<f64> = test.iter().map(|s| s.x).collect();
    println!("\nFitted curve over the test inputs (sorted by day):");
    for (x, y) in model.fitted_curve(&test_xs)? {
        println!("  day {:>5.1} → {:>6.2}°", x * 366.0, y);
    }

    // The bias/variance picture: train error keeps falling with degree,
    // test error bottoms out and climbs back up.
    let curve = sweep_degrees(&train, &test, 8)?;
    println!("\nError curve:");
    println!("  degree   train MSE    test MSE");
    for entry in &curve {
        println!(
            "  {:>6}   {:>9.3}   {:>9.3}",
            entry.degree, entry.train_mse, entry.test_mse
        );
    }

    // Asking for a degree at or above the training set size is an
    // ill-posed fit, reported rather than returning garbage.
    let mut overfit = PolynomialRegression::new(train.len());
    if let Err(e) = overfit.fit(&train) {
        println!("\nDegree {} on {} samples: {}", train.len(), train.len(), e);
    }

    Ok(())
}
