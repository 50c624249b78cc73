//! Local gradient computations for each operation.
//!
//! Each operation knows its partial derivatives with respect to its operands.
//! The backward driver scales them by the output's gradient (chain rule).

use super::Op;

/// Computes `d(output)/d(operand_i)` for every positional operand.
///
/// `output` is the node's own forward value and `operands` holds the operand
/// values in positional order. The returned vector has one entry per operand
/// (empty for leaves). The table is pure: no node is read or written.
pub fn local_gradients(op: Op, output: f64, operands: &[f64]) -> Vec<f64> {
    match (op, operands) {
        (Op::Leaf, _) => vec![],

        // z = a + b
        (Op::Add, [_, _]) => vec![1.0, 1.0],

        // z = a * b
        (Op::Mul, [a, b]) => vec![*b, *a],

        // z = a^p, p constant
        (Op::Pow { exponent }, [a]) => vec![exponent * a.powf(exponent - 1.0)],

        // z = exp(a), dz/da = exp(a) = z
        (Op::Exp, [_]) => vec![output],

        // z = tanh(a), dz/da = 1 - z^2
        (Op::Tanh, [_]) => vec![1.0 - output * output],

        (op, operands) => {
            log::warn!(
                "local_gradients: {:?} expects {} operand(s), got {}; no gradient propagated",
                op,
                op.arity(),
                operands.len()
            );
            vec![0.0; operands.len()]
        }
    }
}

#[cfg(test)]
#[path = "local_grad_test.rs"]
mod tests;
