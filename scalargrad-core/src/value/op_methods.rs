use crate::error::ScalarGradError;
use crate::ops::activation::tanh_op;
use crate::ops::arithmetic::pow_op;
use crate::ops::math_elem::exp_op;
use crate::value::{Operand, Value};

impl Value {
    /// Raises the node to a power.
    ///
    /// # Errors
    /// `InvalidArgument` if `exponent` is a [`Value`]: only numeric constants are
    /// supported as exponents.
    pub fn pow(&self, exponent: impl Into<Operand>) -> Result<Value, ScalarGradError> {
        match exponent.into() {
            Operand::Scalar(p) => Ok(pow_op(self, p)),
            Operand::Value(v) => Err(ScalarGradError::invalid_argument(
                "pow",
                format!("exponent must be a numeric constant, got node {}", v.id()),
            )),
        }
    }

    /// Infallible form of [`Value::pow`].
    pub fn powf(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }

    pub fn exp(&self) -> Value {
        exp_op(self)
    }

    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}
