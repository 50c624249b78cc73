use crate::value::Value;

/// Checks that a node's forward value is within `tolerance` of `expected`.
/// Panics with both values and the difference otherwise.
pub fn check_value_near(actual: &Value, expected: f64, tolerance: f64) {
    let data = actual.data();
    let diff = (data - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Value mismatch for {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.id(),
            data,
            expected,
            diff,
            tolerance
        );
    }
}

/// Checks that a node has a gradient within `tolerance` of `expected`.
/// Panics if the gradient is absent or too far off.
pub fn check_grad_near(actual: &Value, expected: f64, tolerance: f64) {
    let grad = match actual.grad() {
        Some(g) => g,
        None => panic!("Node {} has no gradient, expected {:?}", actual.id(), expected),
    };
    let diff = (grad - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Gradient mismatch for {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.id(),
            grad,
            expected,
            diff,
            tolerance
        );
    }
}
