use crate::value::Value;

/// Either side of a binary operation before coercion.
///
/// Plain numbers become constant leaves through [`Value::scalar`]; values pass
/// through untouched.
#[derive(Debug, Clone)]
pub enum Operand {
    Value(Value),
    Scalar(f64),
}

impl Operand {
    pub fn into_value(self) -> Value {
        match self {
            Operand::Value(v) => v,
            Operand::Scalar(x) => Value::scalar(x),
        }
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Value(v)
    }
}

impl From<&Value> for Operand {
    fn from(v: &Value) -> Self {
        Operand::Value(v.clone())
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Scalar(x)
    }
}

impl From<i32> for Operand {
    fn from(x: i32) -> Self {
        Operand::Scalar(f64::from(x))
    }
}
