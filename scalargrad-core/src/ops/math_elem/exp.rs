use crate::ops::Op;
use crate::value::Value;

/// Natural exponential of a node. Large inputs overflow to `+inf`.
pub fn exp_op(a: &Value) -> Value {
    let data = a.data().exp();
    Value::from_op(data, Op::Exp, vec![a.clone()])
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
