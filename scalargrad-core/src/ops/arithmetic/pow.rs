use crate::ops::Op;
use crate::value::Value;

/// Raises `base` to a constant exponent.
///
/// The exponent is recorded in the [`Op`] tag rather than as an operand, so it
/// never receives a gradient. Non-integer exponents of negative bases yield NaN,
/// as with `f64::powf`.
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    let data = base.data().powf(exponent);
    Value::from_op(data, Op::Pow { exponent }, vec![base.clone()])
}
