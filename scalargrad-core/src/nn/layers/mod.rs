// src/nn/layers/mod.rs

pub mod layer;
pub mod neuron;

// Re-export key layer structs
pub use layer::{Layer, LayerOutput};
pub use neuron::Neuron;
