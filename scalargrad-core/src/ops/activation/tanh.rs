use crate::ops::Op;
use crate::value::Value;

/// Hyperbolic tangent of a node.
///
/// Uses `f64::tanh` rather than `(e^2x - 1)/(e^2x + 1)`, which stays finite
/// and saturates to ±1 for large magnitudes instead of producing NaN.
pub fn tanh_op(a: &Value) -> Value {
    let data = a.data().tanh();
    Value::from_op(data, Op::Tanh, vec![a.clone()])
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
