//! # Scalar Operations Module (`ops`)
//!
//! Forward constructors for every operation the engine understands, plus the
//! stateless table of local derivatives used during backpropagation.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (`add_op`, `tanh_op`, ...)
//!   that computes the forward value and allocates exactly one output node recording
//!   its operands and its [`Op`] tag. The operator overloads and methods on
//!   [`Value`](crate::value::Value) call these.
//! - **Derived operations:** `sub_op`, `neg_op` and `div_op` are compositions of
//!   `add_op`, `mul_op` and `pow_op`. They have no gradient rule of their own.
//! - **[`local_gradients`]:** one match arm per [`Op`] variant giving
//!   `d(output)/d(operand_i)`. The backward driver multiplies these by the output's
//!   gradient and accumulates the products into the operands.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, pow and the derived sub, neg, div.
//! - [`math_elem`]: exp.
//! - [`activation`]: tanh.

use std::fmt;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
mod local_grad;

pub use local_grad::local_gradients;

/// The operation that produced a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Input, parameter or constant: no operands, no gradient rule.
    Leaf,
    /// `operands[0] + operands[1]`
    Add,
    /// `operands[0] * operands[1]`
    Mul,
    /// `operands[0] ** exponent`, the exponent being a numeric constant.
    Pow { exponent: f64 },
    /// `exp(operands[0])`
    Exp,
    /// `tanh(operands[0])`
    Tanh,
}

impl Op {
    /// Number of positional operands the operation consumes.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Mul => 2,
            Op::Pow { .. } | Op::Exp | Op::Tanh => 1,
        }
    }

    /// Short symbol used in labels and graph edges. Empty for leaves.
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add => "+",
            Op::Mul => "*",
            Op::Pow { .. } => "**",
            Op::Exp => "exp",
            Op::Tanh => "tanh",
        }
    }

    /// Derives a result label from operand labels, e.g. `a+b`, `a**3`, `tanh(a)`.
    ///
    /// Returns `None` when the arity does not match.
    pub(crate) fn derive_label(&self, operand_labels: &[String]) -> Option<String> {
        match (self, operand_labels) {
            (Op::Add, [a, b]) | (Op::Mul, [a, b]) => Some(format!("{}{}{}", a, self.symbol(), b)),
            (Op::Pow { exponent }, [a]) => Some(format!("{}**{}", a, exponent)),
            (Op::Exp, [a]) | (Op::Tanh, [a]) => Some(format!("{}({})", self.symbol(), a)),
            _ => None,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
