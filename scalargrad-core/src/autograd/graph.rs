use std::collections::HashSet;

use crate::ops::Op;
use crate::value::Value;
use crate::value_data::NodeId;

/// Orders every node reachable from `root` so that each node appears after all
/// of its predecessors. `root` is last.
///
/// Traversal is an explicit-stack depth-first search, so deep chains (long sums,
/// many layers) cannot overflow the call stack. Predecessors are visited in their
/// stored order and each node appears exactly once, keyed by [`NodeId`].
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted = Vec::new();
    // (node, predecessors already scheduled)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            log::trace!("topological_sort: emit {}", node.id());
            sorted.push(node);
            continue;
        }
        if !visited.insert(node.id()) {
            continue;
        }
        let predecessors = node.predecessors();
        stack.push((node, true));
        // Reversed so the first predecessor is processed first.
        for pred in predecessors.into_iter().rev() {
            if !visited.contains(&pred.id()) {
                stack.push((pred, false));
            }
        }
    }

    sorted
}

/// One operand link in a [`GraphTrace`]: `from` feeds `to` through `op`.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub op: Op,
}

/// The nodes and edges reachable from a root, for inspection or rendering.
#[derive(Debug, Clone)]
pub struct GraphTrace {
    /// Nodes in topological order, root last.
    pub nodes: Vec<Value>,
    /// One edge per distinct (predecessor, node) pair.
    pub edges: Vec<Edge>,
}

/// Collects the graph behind `root` without touching any gradient.
pub fn trace(root: &Value) -> GraphTrace {
    let nodes = topological_sort(root);
    let edges = nodes
        .iter()
        .flat_map(|node| {
            let op = node.op();
            let to = node.id();
            node.predecessors()
                .into_iter()
                .map(move |pred| Edge { from: pred.id(), to, op })
        })
        .collect();
    GraphTrace { nodes, edges }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
