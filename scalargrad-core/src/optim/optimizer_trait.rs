use crate::error::ScalarGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Applies the update rule to every managed parameter using its accumulated
    /// gradient.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `ScalarGradError` otherwise.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Sets the gradients of all managed parameters to zero.
    ///
    /// Gradients accumulate across backward passes, so this is called before
    /// every new forward/backward cycle.
    fn zero_grad(&mut self);

    /// Current learning rate.
    fn lr(&self) -> f64;

    /// Changes the learning rate used by subsequent steps.
    fn set_lr(&mut self, lr: f64);
}
