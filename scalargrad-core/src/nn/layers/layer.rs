use rand::Rng;

use crate::error::ScalarGradError;
use crate::nn::{Init, Module, Neuron, Parameter};
use crate::value::Value;

/// Result of a layer's forward pass.
///
/// A layer with exactly one neuron yields its value directly; wider layers yield
/// one value per neuron, in neuron order.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerOutput {
    Single(Value),
    Many(Vec<Value>),
}

impl LayerOutput {
    /// Flattens into a vector (one element for `Single`).
    pub fn into_values(self) -> Vec<Value> {
        match self {
            LayerOutput::Single(v) => vec![v],
            LayerOutput::Many(vs) => vs,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            LayerOutput::Single(_) => 1,
            LayerOutput::Many(vs) => vs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_single(&self) -> Option<&Value> {
        match self {
            LayerOutput::Single(v) => Some(v),
            LayerOutput::Many(_) => None,
        }
    }

    pub fn into_single(self) -> Option<Value> {
        match self {
            LayerOutput::Single(v) => Some(v),
            LayerOutput::Many(_) => None,
        }
    }
}

/// A fully connected layer of tanh neurons sharing the same input.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates `n_outputs` neurons of width `n_inputs`, drawn in order from `rng`.
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        n_outputs: usize,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        Self::with_init(n_inputs, n_outputs, Init::default(), rng)
    }

    pub fn with_init<R: Rng + ?Sized>(
        n_inputs: usize,
        n_outputs: usize,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let neurons = (0..n_outputs)
            .map(|_| Neuron::with_init(n_inputs, init, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons })
    }

    pub fn from_neurons(neurons: Vec<Neuron>) -> Self {
        Layer { neurons }
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Input width, taken from the first neuron (0 for an empty layer).
    pub fn n_inputs(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::n_inputs)
    }

    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    type Output = LayerOutput;

    fn forward(&self, inputs: &[Value]) -> Result<LayerOutput, ScalarGradError> {
        let mut outputs = self
            .neurons
            .iter()
            .map(|neuron| neuron.forward(inputs))
            .collect::<Result<Vec<_>, _>>()?;

        if outputs.len() == 1 {
            Ok(LayerOutput::Single(outputs.remove(0)))
        } else {
            Ok(LayerOutput::Many(outputs))
        }
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, neuron)| {
                neuron
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neurons.{}.{}", i, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "layers_test.rs"]
mod tests;
