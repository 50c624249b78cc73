//! Scalar reverse-mode automatic differentiation and a small tanh
//! multi-layer perceptron trained with gradient descent.
//!
//! Expressions are built from [`Value`] nodes with ordinary operators; calling
//! [`Value::backward`] fills in the gradient of every node the result depends on.

// Core graph
pub mod autograd;
pub mod ops;
pub mod value;
pub mod value_data;

// Networks and training
pub mod model;
pub mod nn;
pub mod optim;
pub mod train;
pub mod utils;

pub mod error;

pub use error::ScalarGradError;
pub use model::Mlp;
pub use ops::Op;
pub use train::{Trainer, TrainingConfig, TrainingOutcome};
pub use value::{Operand, Value};
pub use value_data::NodeId;
// Re-export traits required by public functions
pub use num_traits;
