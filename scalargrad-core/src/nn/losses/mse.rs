// scalargrad-core/src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::value::Value;

/// Specifies the reduction to apply to the per-example squared errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    /// Plain sum, the loss the trainer uses.
    #[default]
    Sum,
    Mean,
}

impl Reduction {
    pub fn from_str(s: &str) -> Result<Self, ScalarGradError> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::invalid_argument(
                "Reduction::from_str",
                format!("unsupported reduction type: {}", s),
            )),
        }
    }
}

/// Squared-error loss over a batch of scalar outputs: `sum((output - target)**2)`,
/// optionally divided by the batch size.
///
/// The loss is itself a graph node, so calling `backward` on it reaches every
/// parameter that contributed to the outputs.
#[derive(Debug, Clone, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds the loss node for `outputs` against `targets`, pairwise.
    ///
    /// # Errors
    /// `ShapeMismatch` if the lengths differ, `InvalidArgument` if the batch is empty.
    pub fn calculate(&self, outputs: &[Value], targets: &[f64]) -> Result<Value, ScalarGradError> {
        if outputs.len() != targets.len() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: targets.len(),
                actual: outputs.len(),
                operation: "MseLoss calculate".to_string(),
            });
        }
        if outputs.is_empty() {
            return Err(ScalarGradError::invalid_argument(
                "MseLoss calculate",
                "cannot compute a loss over an empty batch",
            ));
        }

        let total: Value = outputs
            .iter()
            .zip(targets)
            .map(|(output, &target)| (output - target).powf(2.0))
            .sum();

        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => total / outputs.len() as f64,
        })
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
