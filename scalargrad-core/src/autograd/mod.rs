//! Reverse-mode differentiation over the scalar graph.
//!
//! - [`graph`]: topological ordering and structural tracing of the graph behind a root.
//! - [`backward`]: the driver that seeds the root and applies the chain rule.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward;
pub mod grad_check;
pub mod graph;

pub use backward::backward;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::{topological_sort, trace, Edge, GraphTrace};
