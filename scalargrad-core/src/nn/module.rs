use crate::error::ScalarGradError;
use crate::nn::Parameter;
use crate::value::Value;

/// The base trait for network building blocks (neurons, layers, networks).
///
/// A module maps a slice of input values to an output built through the
/// expression graph, and exposes the leaf parameters it owns.
pub trait Module: std::fmt::Debug + Send + Sync {
    /// Shape of a forward result: a single value for a neuron, possibly several
    /// for a layer.
    type Output;

    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// `ShapeMismatch` if `inputs` does not have the width the module expects.
    fn forward(&self, inputs: &[Value]) -> Result<Self::Output, ScalarGradError>;

    /// Returns all learnable parameters, including those of sub-modules.
    ///
    /// The order is stable: it is the order in which the optimizer updates them.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Returns all learnable parameters with hierarchical names
    /// (e.g. `"layers.0.neurons.1.w2"`), in the same order as [`Module::parameters`].
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    /// Sets every parameter's gradient to `0.0`.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
