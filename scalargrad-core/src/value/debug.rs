// src/value/debug.rs
use std::fmt;

use crate::value::Value;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node.try_read() {
            Ok(guard) => {
                let operand_ids: Vec<_> = guard.operands.iter().map(|o| o.id()).collect();
                write!(
                    f,
                    "Value(id={}, data={}, grad={:?}, label={:?}, op={:?}, operands={:?})",
                    self.id, guard.data, guard.grad, guard.label, guard.op, operand_ids
                )
            }
            Err(_) => write!(f, "Value(id={}, <locked>)", self.id),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        match &guard.label {
            Some(label) => write!(f, "Value({}={})", label, guard.data),
            None => write!(f, "Value({})", guard.data),
        }
    }
}
