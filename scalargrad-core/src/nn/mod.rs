// src/nn/mod.rs
// Neurons, layers, parameters, initialization and losses.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module
pub mod parameter; // struct Parameter

// Re-export common items
pub use init::Init;
pub use layers::{Layer, LayerOutput, Neuron};
pub use losses::{MseLoss, Reduction};
pub use module::Module;
pub use parameter::Parameter;
