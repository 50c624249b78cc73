use std::io::{self, Write};

use rand::Rng;

use crate::error::ScalarGradError;
use crate::model::Mlp;
use crate::nn::{Module, MseLoss, Reduction};
use crate::optim::{Optimizer, SgdOptimizer};
use crate::train::TrainingConfig;
use crate::value::Value;

/// Result of a training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingOutcome {
    /// Network outputs of the last epoch, one per example.
    pub outputs: Vec<f64>,
    /// Loss of every epoch, in order.
    pub losses: Vec<f64>,
}

impl TrainingOutcome {
    pub fn final_loss(&self) -> Option<f64> {
        self.losses.last().copied()
    }
}

/// Full-batch gradient descent on a fixed dataset.
///
/// Each epoch zeroes the gradients, runs every example forward, builds the
/// summed squared error as one graph and backpropagates it. Every epoch except
/// the first starts with a descent step using the gradients of the previous one,
/// so the first loss reflects the untouched initial network.
#[derive(Debug)]
pub struct Trainer {
    config: TrainingConfig,
    mlp: Mlp,
    optimizer: SgdOptimizer,
    loss: MseLoss,
}

impl Trainer {
    /// Validates `config` and builds a fresh network from `rng`.
    pub fn new<R: Rng + ?Sized>(config: TrainingConfig, rng: &mut R) -> Result<Self, ScalarGradError> {
        config.validate()?;
        let mlp = Mlp::with_init(
            config.n_inputs(),
            config.hidden_and_output_sizes(),
            config.init,
            rng,
        )?;
        Ok(Self::assemble(config, mlp))
    }

    /// Trains an existing network. Its shape must match `config.layer_sizes`.
    pub fn with_mlp(config: TrainingConfig, mlp: Mlp) -> Result<Self, ScalarGradError> {
        config.validate()?;
        let mut sizes = vec![mlp.n_inputs()];
        sizes.extend(mlp.layers().iter().map(|l| l.n_outputs()));
        if sizes != config.layer_sizes {
            return Err(ScalarGradError::InvalidConfig(format!(
                "network has layer sizes {:?}, config expects {:?}",
                sizes, config.layer_sizes
            )));
        }
        Ok(Self::assemble(config, mlp))
    }

    fn assemble(config: TrainingConfig, mlp: Mlp) -> Self {
        let optimizer = SgdOptimizer::new(mlp.parameters().into_iter().cloned(), config.learning_rate);
        log::debug!(
            "Trainer: {} parameter(s), {} example(s), {} epoch(s), lr={}",
            mlp.num_parameters(),
            config.inputs.len(),
            config.epochs,
            config.learning_rate
        );
        Trainer {
            config,
            mlp,
            optimizer,
            loss: MseLoss::new(Reduction::Sum),
        }
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    pub fn mlp(&self) -> &Mlp {
        &self.mlp
    }

    pub fn into_mlp(self) -> Mlp {
        self.mlp
    }

    /// Runs training, writing verbose output (if enabled) to stdout.
    pub fn run(&mut self) -> Result<TrainingOutcome, ScalarGradError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.run_with_writer(&mut handle)
    }

    /// Runs training, writing verbose output (if enabled) to `out`.
    pub fn run_with_writer<W: Write>(&mut self, out: &mut W) -> Result<TrainingOutcome, ScalarGradError> {
        let epochs = self.config.epochs;
        let mut losses = Vec::with_capacity(epochs);
        let mut outputs: Vec<Value> = Vec::new();

        for epoch in 0..epochs {
            if epoch != 0 {
                self.optimizer.step()?;
            }

            let (epoch_outputs, loss) = self.iterate()?;
            let loss = loss.data();
            log::debug!("epoch {}: loss {}", epoch, loss);
            if self.config.verbose {
                writeln!(out, "{}: {}", epoch, loss)?;
            }
            losses.push(loss);
            outputs = epoch_outputs;
        }

        let outputs: Vec<f64> = outputs.iter().map(Value::data).collect();
        let outcome = TrainingOutcome { outputs, losses };

        if self.config.verbose {
            writeln!(out, "Final loss: {}", outcome.final_loss().unwrap_or(f64::NAN))?;
            writeln!(out, "Targets: {:?}", self.config.targets)?;
            writeln!(out, "Outputs: {:?}", outcome.outputs)?;
        }
        Ok(outcome)
    }

    /// One forward/backward cycle: zero gradients, forward every example,
    /// build the loss and backpropagate it.
    fn iterate(&mut self) -> Result<(Vec<Value>, Value), ScalarGradError> {
        self.optimizer.zero_grad();

        let outputs = self
            .config
            .inputs
            .iter()
            .map(|input| {
                let output = self.mlp.forward_f64(input)?;
                let width = output.len();
                output.into_single().ok_or(ScalarGradError::ShapeMismatch {
                    expected: 1,
                    actual: width,
                    operation: "Trainer forward".to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let loss = self.loss.calculate(&outputs, &self.config.targets)?;
        loss.backward();
        Ok((outputs, loss))
    }
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
