use super::mul_op;
use crate::value::Value;

/// `-a`, built as `a * scalar(-1)`.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::scalar(-1.0))
}
