#![cfg(feature = "dev")]

use linreg_rs::internals::primitives::errors::LinregError;

#[test]
fn test_linreg_error_display() {
    // Ingestion
    let err = LinregError::Ingestion {
        source: "data.csv".to_string(),
        reason: "No such file or directory".to_string(),
    };
    assert_eq!(
        format!("{}", err),
        "Cannot read data source 'data.csv': No such file or directory"
    );

    // EmptyDataset
    let err = LinregError::EmptyDataset;
    assert_eq!(format!("{}", err), "Dataset is empty");

    // InsufficientData
    let err = LinregError::InsufficientData { got: 1, min: 2 };
    assert_eq!(
        format!("{}", err),
        "Insufficient data for training: got 1 points, need at least 2"
    );

    // NoStrategySelected
    let err = LinregError::NoStrategySelected;
    assert_eq!(
        format!("{}", err),
        "No regression model selected. Select least squares or gradient descent first"
    );

    // ModelNotTrained
    let err = LinregError::ModelNotTrained;
    assert_eq!(format!("{}", err), "Model not trained. Train the model first");

    // DegenerateDataset
    let err = LinregError::DegenerateDataset;
    assert_eq!(
        format!("{}", err),
        "Degenerate dataset: all x-values are identical, slope is undefined"
    );

    // MismatchedInputs
    let err = LinregError::MismatchedInputs { x_len: 10, y_len: 5 };
    assert_eq!(
        format!("{}", err),
        "Length mismatch: x has 10 points, y has 5"
    );

    // InvalidNumericValue
    let err = LinregError::InvalidNumericValue("x[3]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: x[3]=NaN");

    // InvalidLearningRate
    let err = LinregError::InvalidLearningRate(-0.5);
    assert_eq!(
        format!("{}", err),
        "Invalid learning rate: -0.5 (must be > 0 and finite)"
    );

    // InvalidMaxIterations
    let err = LinregError::InvalidMaxIterations(0);
    assert_eq!(
        format!("{}", err),
        "Invalid max iterations: 0 (must be at least 1)"
    );

    // InvalidTolerance
    let err = LinregError::InvalidTolerance(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid tolerance: -1 (must be > 0 and finite)"
    );

    // DuplicateParameter
    let err = LinregError::DuplicateParameter {
        parameter: "learning_rate",
    };
    assert_eq!(
        format!("{}", err),
        "Parameter 'learning_rate' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_linreg_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&LinregError::EmptyDataset);

    let boxed: Box<dyn std::error::Error> = Box::new(LinregError::ModelNotTrained);
    assert_eq!(boxed.to_string(), "Model not trained. Train the model first");
}

#[test]
fn test_linreg_error_equality() {
    assert_eq!(
        LinregError::InsufficientData { got: 0, min: 2 },
        LinregError::InsufficientData { got: 0, min: 2 }
    );
    assert_ne!(
        LinregError::InsufficientData { got: 0, min: 2 },
        LinregError::InsufficientData { got: 1, min: 2 }
    );
    assert_ne!(LinregError::EmptyDataset, LinregError::DegenerateDataset);
}
