use crate::error::ScalarGradError;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_trait::Optimizer;

/// Implements plain gradient descent: `data -= lr * grad`.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Parameter>,
    lr: f64,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: The parameters to optimize. Clones of a module's parameters
    ///   share their nodes, so updates are visible to the module.
    /// * `lr`: The learning rate.
    pub fn new(params: impl IntoIterator<Item = Parameter>, lr: f64) -> Self {
        SgdOptimizer {
            params: params.into_iter().collect(),
            lr,
        }
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        if !self.lr.is_finite() {
            return Err(ScalarGradError::invalid_argument(
                "SgdOptimizer::step",
                format!("learning rate must be finite, got {}", self.lr),
            ));
        }

        let mut skipped = 0usize;
        for param in &self.params {
            let grad = match param.grad() {
                Some(g) => g,
                None => {
                    skipped += 1;
                    continue;
                }
            };
            param.set_data(param.data() - self.lr * grad);
        }

        if skipped > 0 {
            log::debug!("SGD step: {} parameter(s) without gradient skipped", skipped);
        }
        log::trace!("SGD step: updated {} parameter(s) with lr={}", self.params.len() - skipped, self.lr);
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn lr(&self) -> f64 {
        self.lr
    }

    fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }
}
