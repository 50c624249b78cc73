use super::{mul_op, pow_op};
use crate::value::Value;

/// `a / b`, built as `a * b**-1`.
///
/// Division by zero is not trapped: the forward value is infinite or NaN
/// following IEEE-754.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, -1.0))
}
