// src/value/mod.rs

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use num_traits::ToPrimitive;

use crate::error::ScalarGradError;
use crate::ops::Op;
use crate::value_data::{NodeId, ValueData};

mod autograd_methods;
mod debug;
mod op_methods;
mod operand;
mod traits;

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;

pub use operand::Operand;

/// A node in the scalar computation graph.
///
/// `Value` uses `Arc<RwLock<ValueData>>` internally:
/// 1.  **Shared Ownership:** a node is referenced by every result built from it and by
///     whoever holds the handle. Clones are cheap and point at the same node.
/// 2.  **Interior Mutability:** `grad` is written during backpropagation and `data` by
///     the optimizer, both through an immutable handle.
///
/// Equality and hashing use the node's [`NodeId`], never its numeric value.
pub struct Value {
    pub(crate) id: NodeId,
    pub(crate) node: Arc<RwLock<ValueData>>,
}

impl Value {
    fn from_data(data: ValueData) -> Self {
        Value {
            id: NodeId::next(),
            node: Arc::new(RwLock::new(data)),
        }
    }

    /// Creates an unlabeled leaf.
    pub fn new(data: f64) -> Self {
        Self::from_data(ValueData::leaf(data, None))
    }

    /// Creates a labeled leaf.
    pub fn labeled(label: impl Into<String>, data: f64) -> Self {
        Self::from_data(ValueData::leaf(data, Some(label.into())))
    }

    /// Promotes a plain number to a constant leaf labeled `scalar_<n>`.
    pub fn scalar(x: f64) -> Self {
        Self::labeled(format!("scalar_{}", x), x)
    }

    /// Like [`Value::scalar`] for any numeric type `num_traits` can convert.
    ///
    /// # Errors
    /// `InvalidArgument` if `x` has no `f64` representation.
    pub fn try_scalar<T: ToPrimitive>(x: T) -> Result<Self, ScalarGradError> {
        x.to_f64().map(Self::scalar).ok_or_else(|| {
            ScalarGradError::invalid_argument("scalar", "value cannot be represented as f64")
        })
    }

    /// Builds the single output node of an operation.
    ///
    /// The label is derived from the operand labels (`a+b`, `tanh(a)`, ...) when every
    /// operand carries one, and left empty otherwise.
    pub(crate) fn from_op(data: f64, op: Op, operands: Vec<Value>) -> Self {
        let labels: Option<Vec<String>> = operands.iter().map(|operand| operand.label()).collect();
        let label = labels.and_then(|labels| op.derive_label(&labels));
        Self::from_data(ValueData::from_op(data, op, operands, label))
    }

    /// Identity of the node behind this handle.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Scalar payload.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub fn op(&self) -> Op {
        self.read_data().op
    }

    /// Distinct predecessor nodes (identity-deduplicated). Empty for leaves.
    pub fn predecessors(&self) -> Vec<Value> {
        self.read_data().predecessors()
    }

    /// Operands in positional order, duplicates kept.
    pub(crate) fn operands(&self) -> Vec<Value> {
        self.read_data().operands.clone()
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    /// Builder form of [`Value::set_label`].
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    /// Overwrites the payload. Only optimizers touch this, and only on leaves.
    pub(crate) fn set_data(&self, data: f64) {
        self.write_data().data = data;
    }

    /// Read access to the node. A poisoned lock is recovered with a warning.
    pub(crate) fn read_data(&self) -> RwLockReadGuard<'_, ValueData> {
        self.node.read().unwrap_or_else(|poisoned| {
            log::warn!("Value {}: lock poisoned, recovering read access", self.id);
            poisoned.into_inner()
        })
    }

    pub(crate) fn write_data(&self) -> RwLockWriteGuard<'_, ValueData> {
        self.node.write().unwrap_or_else(|poisoned| {
            log::warn!("Value {}: lock poisoned, recovering write access", self.id);
            poisoned.into_inner()
        })
    }
}
