use rand::Rng;

use crate::error::ScalarGradError;
use crate::nn::{Init, Layer, LayerOutput, Module, Parameter};
use crate::value::Value;

/// Multi-layer perceptron: layers applied in sequence, each fed the previous
/// layer's outputs.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds a network taking `n_inputs` values with one layer per entry of
    /// `layer_sizes`. Parameters are drawn layer by layer, neuron by neuron.
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        Self::with_init(n_inputs, layer_sizes, Init::default(), rng)
    }

    pub fn with_init<R: Rng + ?Sized>(
        n_inputs: usize,
        layer_sizes: &[usize],
        init: Init,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if layer_sizes.is_empty() {
            return Err(ScalarGradError::invalid_argument(
                "Mlp::new",
                "at least one layer size is required",
            ));
        }
        let widths = std::iter::once(n_inputs).chain(layer_sizes.iter().copied());
        let layers = widths
            .zip(layer_sizes)
            .map(|(n_in, &n_out)| Layer::with_init(n_in, n_out, init, rng))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "Mlp: built {} layer(s) {:?} over {} input(s)",
            layers.len(),
            layer_sizes,
            n_inputs
        );
        Ok(Mlp { layers })
    }

    /// Assembles a network from existing layers.
    ///
    /// # Errors
    /// `InvalidArgument` if `layers` is empty, `ShapeMismatch` if a layer's input
    /// width differs from the previous layer's output count.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, ScalarGradError> {
        if layers.is_empty() {
            return Err(ScalarGradError::invalid_argument(
                "Mlp::from_layers",
                "at least one layer is required",
            ));
        }
        for pair in layers.windows(2) {
            if pair[1].n_inputs() != pair[0].n_outputs() {
                return Err(ScalarGradError::ShapeMismatch {
                    expected: pair[0].n_outputs(),
                    actual: pair[1].n_inputs(),
                    operation: "Mlp::from_layers".to_string(),
                });
            }
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Input width of the first layer.
    pub fn n_inputs(&self) -> usize {
        self.layers.first().map_or(0, Layer::n_inputs)
    }

    /// Output count of the last layer.
    pub fn n_outputs(&self) -> usize {
        self.layers.last().map_or(0, Layer::n_outputs)
    }

    /// Forward pass over plain numbers, promoting each to a constant leaf.
    pub fn forward_f64(&self, inputs: &[f64]) -> Result<LayerOutput, ScalarGradError> {
        let inputs: Vec<Value> = inputs.iter().map(|&x| Value::scalar(x)).collect();
        self.forward(&inputs)
    }
}

impl Module for Mlp {
    type Output = LayerOutput;

    fn forward(&self, inputs: &[Value]) -> Result<LayerOutput, ScalarGradError> {
        let mut current = LayerOutput::Many(inputs.to_vec());
        for layer in &self.layers {
            current = layer.forward(&current.into_values())?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| {
                layer
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layers.{}.{}", i, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
