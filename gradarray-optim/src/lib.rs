use gradarray_core::{GradArray, GradArrayError, Tape};
use ndarray::ArrayD;

pub mod sgd;

pub use sgd::Sgd;

/// Trait for optimization algorithms.
///
/// An optimizer turns a parameter and its gradient into the updated
/// parameter. It consumes gradients produced by `gradarray-core` and never
/// touches the graph that produced them.
pub trait Optimizer {
    /// Computes the updated value of one parameter.
    ///
    /// # Arguments
    /// * `param` - Current parameter values.
    /// * `grad` - Gradient of the loss with respect to `param`.
    fn step(&mut self, param: &ArrayD<f64>, grad: &ArrayD<f64>) -> Result<ArrayD<f64>, GradArrayError>;

    /// Applies [`step`](Optimizer::step) to a parameter array using its
    /// current gradient, and returns the result as a new leaf on the same tape.
    ///
    /// # Errors
    /// `MissingGradient` if no backward pass has assigned `param.grad`.
    fn update(&mut self, param: &GradArray) -> Result<GradArray, GradArrayError> {
        self.update_into(param, param.tape())
    }

    /// Like [`update`](Optimizer::update), but records the result on `target`.
    ///
    /// A training loop passes a new tape each step so the previous step's
    /// graph is released once its handles go out of scope.
    ///
    /// # Errors
    /// `MissingGradient` if no backward pass has assigned `param.grad`.
    fn update_into(&mut self, param: &GradArray, target: &Tape) -> Result<GradArray, GradArrayError> {
        let grad = param.grad().ok_or_else(|| GradArrayError::MissingGradient {
            operation: "optimizer update".to_string(),
        })?;
        let updated = self.step(&param.data()?, &grad)?;
        Ok(target.leaf(updated))
    }
}
