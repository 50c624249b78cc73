use crate::autograd;
use crate::value::Value;

impl Value {
    /// Accumulated gradient, `None` if no backward pass or zeroing has reached this node.
    pub fn grad(&self) -> Option<f64> {
        self.read_data().grad
    }

    /// Adds `contribution` to the gradient, treating an absent gradient as zero.
    pub fn acc_grad(&self, contribution: f64) {
        self.write_data().accumulate_grad(contribution);
    }

    /// Resets the gradient to `Some(0.0)`.
    pub fn zero_grad(&self) {
        self.write_data().grad = Some(0.0);
    }

    /// Clears the gradient slot back to `None`.
    pub fn clear_grad(&self) {
        self.write_data().grad = None;
    }

    /// Sets the gradient explicitly. Mainly useful in diagnostics and tests.
    pub fn with_grad(self, grad: f64) -> Self {
        self.write_data().grad = Some(grad);
        self
    }

    /// Backpropagates from this node, accumulating into every reachable gradient.
    ///
    /// See [`autograd::backward`] for the exact semantics.
    pub fn backward(&self) {
        autograd::backward(self);
    }
}
