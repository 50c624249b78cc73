use crate::error::ScalarGradError;
use crate::nn::Init;

/// Everything the trainer needs: network shape, dataset and hyperparameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingConfig {
    /// First element is the input width, the rest are per-layer output widths.
    pub layer_sizes: Vec<usize>,
    /// One input vector per example.
    pub inputs: Vec<Vec<f64>>,
    /// One scalar target per example.
    pub targets: Vec<f64>,
    pub epochs: usize,
    pub learning_rate: f64,
    /// Print per-epoch losses and a final summary.
    pub verbose: bool,
    /// Parameter initializer.
    pub init: Init,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            layer_sizes: Vec::new(),
            inputs: Vec::new(),
            targets: Vec::new(),
            epochs: 20,
            learning_rate: 0.1,
            verbose: false,
            init: Init::default(),
        }
    }
}

impl TrainingConfig {
    pub fn new(layer_sizes: Vec<usize>, inputs: Vec<Vec<f64>>, targets: Vec<f64>) -> Self {
        TrainingConfig {
            layer_sizes,
            inputs,
            targets,
            ..Default::default()
        }
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_init(mut self, init: Init) -> Self {
        self.init = init;
        self
    }

    /// Input width (first layer size).
    pub fn n_inputs(&self) -> usize {
        self.layer_sizes.first().copied().unwrap_or(0)
    }

    /// Per-layer output widths (all sizes after the first).
    pub fn hidden_and_output_sizes(&self) -> &[usize] {
        self.layer_sizes.get(1..).unwrap_or(&[])
    }

    /// Checks the configuration before any network is built.
    ///
    /// # Errors
    /// `InvalidConfig` describing the first problem found.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if self.layer_sizes.len() < 2 {
            return Err(ScalarGradError::InvalidConfig(format!(
                "layer_sizes needs an input width and at least one layer, got {:?}",
                self.layer_sizes
            )));
        }
        if let Some(pos) = self.layer_sizes.iter().position(|&s| s == 0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "layer_sizes[{}] is 0",
                pos
            )));
        }
        if self.layer_sizes.last() != Some(&1) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "last layer must have exactly one neuron for scalar targets, got {:?}",
                self.layer_sizes
            )));
        }
        if self.epochs == 0 {
            return Err(ScalarGradError::InvalidConfig(
                "epochs must be positive".to_string(),
            ));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ScalarGradError::InvalidConfig(format!(
                "learning_rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        if self.inputs.is_empty() {
            return Err(ScalarGradError::InvalidConfig(
                "dataset is empty".to_string(),
            ));
        }
        if self.inputs.len() != self.targets.len() {
            return Err(ScalarGradError::InvalidConfig(format!(
                "{} input(s) but {} target(s)",
                self.inputs.len(),
                self.targets.len()
            )));
        }
        let width = self.n_inputs();
        if let Some((i, input)) = self
            .inputs
            .iter()
            .enumerate()
            .find(|(_, input)| input.len() != width)
        {
            return Err(ScalarGradError::InvalidConfig(format!(
                "input {} has width {}, expected {}",
                i,
                input.len(),
                width
            )));
        }
        self.init.validate().map_err(|e| ScalarGradError::InvalidConfig(e.to_string()))
    }
}
