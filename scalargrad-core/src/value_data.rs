// src/value_data.rs
use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError};

use crate::ops::Op;
use crate::value::Value;

/// Global counter for node identities. Atomic so `Value` stays `Send + Sync`.
static NODE_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Unique identity of a node in the computation graph.
///
/// Identity, not value equality, decides whether two handles refer to the same
/// vertex: two leaves holding `2.0` are distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u64);

impl NodeId {
    pub(crate) fn next() -> Self {
        NodeId(NODE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric form, stable for the lifetime of the process.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Internal storage for a graph node.
///
/// Wrapped in `Arc<RwLock<ValueData>>` by [`Value`]: the forward pass only ever
/// writes a node once (at construction), while the backward pass and the
/// optimizer mutate `grad` (and, for parameters, `data`) through the lock.
#[derive(Debug)]
pub struct ValueData {
    /// Scalar result of the producing operation, or the literal for leaves.
    pub(crate) data: f64,
    /// Accumulated gradient. `None` until a backward pass or a zeroing touches it.
    pub(crate) grad: Option<f64>,
    /// Diagnostic name.
    pub(crate) label: Option<String>,
    /// How this node was produced. `Op::Leaf` for inputs, parameters and constants.
    pub(crate) op: Op,
    /// Operands in positional order. May hold the same node twice (`a + a`);
    /// the local gradient rule sends one contribution per position.
    pub(crate) operands: Vec<Value>,
}

impl ValueData {
    pub(crate) fn leaf(data: f64, label: Option<String>) -> Self {
        ValueData {
            data,
            grad: None,
            label,
            op: Op::Leaf,
            operands: Vec::new(),
        }
    }

    pub(crate) fn from_op(data: f64, op: Op, operands: Vec<Value>, label: Option<String>) -> Self {
        ValueData {
            data,
            grad: None,
            label,
            op,
            operands,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.operands.is_empty()
    }

    /// Operands deduplicated by identity, first occurrence first.
    pub fn predecessors(&self) -> Vec<Value> {
        let mut seen = HashSet::with_capacity(self.operands.len());
        self.operands
            .iter()
            .filter(|operand| seen.insert(operand.id()))
            .cloned()
            .collect()
    }

    /// Adds `contribution` to the gradient slot, treating an untouched slot as zero.
    pub(crate) fn accumulate_grad(&mut self, contribution: f64) {
        self.grad = Some(self.grad.unwrap_or(0.0) + contribution);
    }
}

impl Drop for ValueData {
    /// Releases the operand subgraph with an explicit stack. Dropping nodes
    /// through their operand lists would otherwise recurse once per node, and a
    /// long left-deep sum overflows the call stack.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(operand) = pending.pop() {
            // Still shared elsewhere: dropping this handle only decrements the count.
            if let Ok(lock) = Arc::try_unwrap(operand.node) {
                let mut data = lock.into_inner().unwrap_or_else(PoisonError::into_inner);
                pending.append(&mut data.operands);
            }
        }
    }
}

#[cfg(test)]
#[path = "value_data_test.rs"]
mod tests;
