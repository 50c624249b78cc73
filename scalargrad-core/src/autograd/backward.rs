use crate::autograd::graph::topological_sort;
use crate::ops::local_gradients;
use crate::value::Value;

/// Backpropagates from `root`.
///
/// Adds `1.0` to the root's gradient, then walks the topological order in reverse
/// and, for every node, adds `local_gradient * node.grad` to each positional operand.
///
/// Gradients accumulate and nothing is reset, intermediate nodes included. A
/// second call on the same graph adds another `1.0` to the root, and every node
/// then propagates its whole accumulated gradient (first pass plus second) down
/// again, so leaf gradients grow by more than a factor of two. Zero every node
/// reachable from the root between passes for a fresh result; the trainer zeroes
/// its parameters each epoch and rebuilds the rest of the graph. Forward values
/// are never modified.
pub fn backward(root: &Value) {
    root.acc_grad(1.0);

    let order = topological_sort(root);
    log::debug!("backward: propagating through {} node(s) from {}", order.len(), root.id());

    for node in order.iter().rev() {
        // Snapshot under the lock, then release it before touching operands.
        let (op, output, out_grad) = {
            let guard = node.read_data();
            if guard.is_leaf() {
                continue;
            }
            (guard.op, guard.data, guard.grad.unwrap_or(0.0))
        };
        let operands = node.operands();

        let operand_values: Vec<f64> = operands.iter().map(Value::data).collect();
        let locals = local_gradients(op, output, &operand_values);

        for (operand, local) in operands.iter().zip(locals) {
            operand.acc_grad(local * out_grad);
        }
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
