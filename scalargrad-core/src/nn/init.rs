use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::ScalarGradError;

/// Parameter initialization scheme.
///
/// Every draw goes through the caller's generator, so a seeded generator gives
/// reproducible networks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform on `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform { low: -1.0, high: 1.0 }
    }
}

impl Init {
    /// Checks that the scheme can be sampled.
    ///
    /// # Errors
    /// `InvalidArgument` for non-finite bounds, `low >= high`, or a non-positive
    /// (or non-finite) standard deviation.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        match *self {
            Init::Uniform { low, high } => {
                if !low.is_finite() || !high.is_finite() {
                    return Err(ScalarGradError::invalid_argument(
                        "Init::Uniform",
                        format!("bounds must be finite, got [{}, {})", low, high),
                    ));
                }
                if low >= high {
                    return Err(ScalarGradError::invalid_argument(
                        "Init::Uniform",
                        format!("low ({}) must be less than high ({})", low, high),
                    ));
                }
            }
            Init::Normal { mean, std } => {
                if !mean.is_finite() || !std.is_finite() || std <= 0.0 {
                    return Err(ScalarGradError::invalid_argument(
                        "Init::Normal",
                        format!("need finite mean and positive std, got mean={}, std={}", mean, std),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Draws one value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, ScalarGradError> {
        self.validate()?;
        match *self {
            Init::Uniform { low, high } => Ok(rng.gen_range(low..high)),
            Init::Normal { mean, std } => {
                let normal = Normal::new(mean, std).map_err(|e| {
                    ScalarGradError::invalid_argument("Init::Normal", e.to_string())
                })?;
                Ok(normal.sample(rng))
            }
        }
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
