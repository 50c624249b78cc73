use crate::ops::Op;
use crate::value::Value;

/// Sum of two nodes. The result records both operands in order, so `a + a`
/// keeps two positions pointing at the same node.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let data = a.data() + b.data();
    Value::from_op(data, Op::Add, vec![a.clone(), b.clone()])
}
