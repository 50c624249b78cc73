use scalargrad_core::{TrainingConfig, Value};

// Shared across integration test crates; not every crate uses every helper.
#[allow(dead_code)]
pub(crate) fn leaves(data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| Value::new(x)).collect()
}

/// The four-example dataset used throughout the training tests.
#[allow(dead_code)]
pub(crate) fn tiny_dataset() -> (Vec<Vec<f64>>, Vec<f64>) {
    let inputs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let targets = vec![1.0, -1.0, -1.0, 1.0];
    (inputs, targets)
}

#[allow(dead_code)]
pub(crate) fn tiny_config() -> TrainingConfig {
    let (inputs, targets) = tiny_dataset();
    TrainingConfig::new(vec![3, 4, 4, 1], inputs, targets)
        .with_epochs(20)
        .with_learning_rate(0.1)
}
