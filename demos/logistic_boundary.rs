use statlearn::dataset::{height_points, height_range};
use statlearn::{Label, LogisticBoundary, Prediction};

fn main() {
    println!("=== Logistic Decision Boundary Example ===\n");

    // The fixed 20-point height dataset the widget plots.
    let points = height_points();
    let (x_min, x_max) = height_range();
    println!("Dataset: {} points, heights spanning [{}, {}]", points.len(), x_min, x_max);

    // Slider values in the widget; the boundary is never trained.
    let slope = 0.5;
    let center = x_min + (x_max - x_min) / 2;
    let boundary = LogisticBoundary::new(slope, center as f64);
    println!(
        "\nBoundary: log(p/(1-p)) = {} * height + {:.2}",
        boundary.slope,
        boundary.intercept()
    );

    println!("\nLog-odds line over the plotting grid:");
    for (x, raw) in boundary.decision_curve(x_min, x_max).step_by(4) {
        println!("  height {:>5.1} → decision value {:>7.3}", x, raw);
    }

    println!("\nProbability curve:");
    for (x, p) in boundary.probability_curve(x_min, x_max).step_by(4) {
        println!("  height {:>5.1} → P(A) = {:.3}", x, p);
    }

    println!("\nDataset points under the current boundary:");
    for point in &points {
        let p = boundary.probability(point.height);
        println!("  height {:>6.2} ({:?}) → P(A) = {:.3}", point.height, point.label, p);
    }

    println!("\nQuery classification:");
    for query in [160.0, boundary.center, 175.0] {
        let verdict = match boundary.classify(query) {
            Prediction::Label(Label::A) => "group A",
            Prediction::Label(Label::B) => "group B",
            Prediction::Unknown => "unknown (on the boundary)",
        };
        println!(
            "  height {:>5.1} → p = {:.3} → {}",
            query,
            boundary.probability(query),
            verdict
        );
    }
}
