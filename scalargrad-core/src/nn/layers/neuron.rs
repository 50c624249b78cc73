use rand::Rng;

use crate::error::ScalarGradError;
use crate::nn::{Init, Module, Parameter};
use crate::value::Value;

/// A single tanh unit: `tanh(sum_i(w_i * x_i) + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
}

impl Neuron {
    /// Creates a neuron with `n_inputs` weights drawn from the default
    /// initializer (uniform on `[-1, 1)`).
    pub fn new<R: Rng + ?Sized>(n_inputs: usize, rng: &mut R) -> Result<Self, ScalarGradError> {
        Self::with_init(n_inputs, Init::default(), rng)
    }

    /// Creates a neuron drawing its parameters from `init`: all weights first,
    /// then the bias.
    pub fn with_init<R: Rng + ?Sized>(
        n_inputs: usize,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let weights = (0..n_inputs)
            .map(|_| init.sample(rng).map(Parameter::new))
            .collect::<Result<Vec<_>, _>>()?;
        let bias = Parameter::new(init.sample(rng)?);
        Ok(Neuron { weights, bias })
    }

    /// Creates a neuron from known parameter values.
    pub fn from_parameters(weights: Vec<f64>, bias: f64) -> Self {
        Neuron {
            weights: weights.into_iter().map(Parameter::new).collect(),
            bias: Parameter::new(bias),
        }
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    /// Number of inputs the neuron expects.
    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }
}

impl Module for Neuron {
    type Output = Value;

    fn forward(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::forward".to_string(),
            });
        }

        let weighted: Value = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(w, x)| w.value() * x)
            .sum();
        Ok((weighted + self.bias.value()).tanh())
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.weights.iter().chain(std::iter::once(&self.bias)).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w{}", i), w))
            .chain(std::iter::once(("b".to_string(), &self.bias)))
            .collect()
    }
}
