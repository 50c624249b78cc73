use super::{add_op, neg_op};
use crate::value::Value;

/// `a - b`, built as `a + (-b)`. The negation node sits between `b` and the sum.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}
