use approx::abs_diff_eq;
use thiserror::Error;

use crate::error::ScalarGradError;
use crate::value::Value;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Input {input_index} has no gradient after backward pass.")]
    MissingAnalyticalGrad { input_index: usize },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+eps): {output_plus:?}, f(x-eps): {output_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        output_plus: f64,
        output_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

/// Checks analytical gradients against central finite differences.
///
/// `func` builds a graph from fresh leaves holding `inputs` and returns its root.
/// The analytical gradient of every input comes from one backward pass; the
/// numerical one is `(f(x + eps) - f(x - eps)) / (2 * eps)`, perturbing one input
/// at a time. Each pair must agree within `tolerance` (absolute).
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output.backward();

    let evaluate = |values: &[f64]| -> Result<f64, GradCheckError> {
        let leaves: Vec<Value> = values.iter().map(|&x| Value::new(x)).collect();
        func(&leaves)
            .map(|out| out.data())
            .map_err(GradCheckError::ForwardPassError)
    };

    for (i, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf
            .grad()
            .ok_or(GradCheckError::MissingAnalyticalGrad { input_index: i })?;
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let mut perturbed = inputs.to_vec();
        perturbed[i] = inputs[i] + epsilon;
        let output_plus = evaluate(&perturbed)?;
        perturbed[i] = inputs[i] - epsilon;
        let output_minus = evaluate(&perturbed)?;

        let numerical_grad = (output_plus - output_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                output_plus,
                output_minus,
            });
        }

        log::trace!(
            "check_grad: input {}: analytical {} vs numerical {}",
            i,
            analytical_grad,
            numerical_grad
        );

        if !abs_diff_eq!(analytical_grad, numerical_grad, epsilon = tolerance) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
