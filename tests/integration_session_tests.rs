use std::fs;

use approx::assert_abs_diff_eq;
use linreg_rs::prelude::*;

// ============================================================================
// End-to-End Tests
// ============================================================================

#[test]
fn test_least_squares_recovers_perfect_line() {
    let mut session = RegressionSession::<f64>::new();
    for (x, y) in [(1.0, 45.0), (2.0, 55.0), (3.0, 65.0), (4.0, 75.0), (5.0, 85.0)] {
        session.add_point(x, y).unwrap();
    }
    session.use_least_squares();
    session.train_model().unwrap();

    let model = session.model().unwrap();
    assert_eq!(model.slope(), 10.0);
    assert_eq!(model.intercept(), 35.0);
}

#[test]
fn test_header_only_file_is_empty() {
    let path = std::env::temp_dir().join(format!(
        "linreg_rs_{}_header_only.csv",
        std::process::id()
    ));
    fs::write(&path, "Hours,Score\n").unwrap();

    let mut session = RegressionSession::<f64>::new();
    let result = session.load_data(&path);
    fs::remove_file(&path).ok();

    assert_eq!(result, Err(LinregError::EmptyDataset));
}

#[test]
fn test_gradient_descent_reaches_least_squares_line() {
    let data = Dataset::from_samples(
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        vec![45.0, 55.0, 65.0, 75.0, 85.0],
    )
    .unwrap();
    let mut session = RegressionSession::with_dataset(data);

    // This data needs about 3400 passes at a step of 0.01
    let config = GradientDescent::<f64>::new()
        .learning_rate(0.01)
        .max_iterations(10_000)
        .tolerance(1e-6)
        .build()
        .unwrap();
    session.use_gradient_descent(config).unwrap();
    session.train_model().unwrap();

    let model = session.model().unwrap();
    assert_abs_diff_eq!(model.slope(), 10.0, epsilon = 1e-2);
    assert_abs_diff_eq!(model.intercept(), 35.0, epsilon = 1e-2);
    assert!(model.last_training().unwrap().converged);
}

#[test]
fn test_append_after_training_requires_retraining() {
    let mut session = RegressionSession::<f64>::new();
    for (x, y) in [(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)] {
        session.add_point(x, y).unwrap();
    }
    session.use_least_squares();
    session.train_model().unwrap();
    assert!(session.predict(4.0).is_ok());

    session.add_point(4.0, 9.0).unwrap();
    assert_eq!(session.predict(4.0), Err(LinregError::ModelNotTrained));
    assert_eq!(session.predict(4.0), Err(LinregError::ModelNotTrained));

    session.train_model().unwrap();
    assert!(session.predict(4.0).is_ok());
}

#[test]
fn test_csv_file_to_prediction() {
    let path = std::env::temp_dir().join(format!(
        "linreg_rs_{}_study_hours.csv",
        std::process::id()
    ));
    fs::write(
        &path,
        "Study Hours,Exam Score\n1,52\n2,55\n3,61\nbad,row\n4,70\n5,74\n6,80\n",
    )
    .unwrap();

    let mut session = RegressionSession::<f64>::new();
    let report = session.load_data(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(report.rows_loaded, 6);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(session.state(), SessionState::DataLoaded);

    session.use_least_squares();
    session.train_model().unwrap();
    let result = session.results().unwrap();

    // Closed form on the six rows: slope 5.8857.., intercept 44.7333..
    assert_abs_diff_eq!(result.slope, 5.885714285714286, epsilon = 1e-9);
    assert_abs_diff_eq!(result.intercept, 44.73333333333333, epsilon = 1e-9);
    assert_eq!(result.x_label, "Study Hours");
    assert!(result.to_string().contains("Samples: 6 (Exam Score vs Study Hours)"));
    assert!(session.is_extrapolation(10.0).unwrap());
}
