use std::fmt;
use std::ops::Deref;

use crate::error::ScalarGradError;
use crate::value::Value;

/// A wrapper around a leaf [`Value`] marking it as a learnable parameter of a module.
///
/// Cloning a `Parameter` shares the underlying node, so an optimizer holding a clone
/// updates the same weight the module reads in its next forward pass.
pub struct Parameter(Value);

impl Parameter {
    /// Creates a new parameter holding `data`.
    pub fn new(data: f64) -> Self {
        Parameter(Value::new(data))
    }

    /// Wraps an existing value.
    ///
    /// # Errors
    /// `InvalidArgument` if `value` is the result of an operation: only leaves can
    /// be updated in place without invalidating the graph built on top of them.
    pub fn try_from_value(value: Value) -> Result<Self, ScalarGradError> {
        if !value.is_leaf() {
            return Err(ScalarGradError::invalid_argument(
                "Parameter::try_from_value",
                format!("node {} is not a leaf (op {:?})", value.id(), value.op()),
            ));
        }
        Ok(Parameter(value))
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Overwrites the parameter's payload (used by optimizers).
    pub fn set_data(&self, data: f64) {
        self.0.set_data(data);
    }

    /// Consumes the Parameter and returns the underlying Value.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

// Allow accessing the underlying Value immutably via Deref.
impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.0)
    }
}

impl Clone for Parameter {
    fn clone(&self) -> Self {
        Parameter(self.0.clone())
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
