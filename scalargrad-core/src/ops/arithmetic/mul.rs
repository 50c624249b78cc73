use crate::ops::Op;
use crate::value::Value;

/// Product of two nodes.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let data = a.data() * b.data();
    Value::from_op(data, Op::Mul, vec![a.clone(), b.clone()])
}
