use ndarray::ArrayD;
use thiserror::Error;

use crate::error::GradArrayError;
use crate::grad_array::GradArray;
use crate::tape::Tape;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}, element {element_index}: analytical {analytical_grad:?} != numerical {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(GradArrayError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(GradArrayError),

    #[error("Input {input_index} has no gradient after the backward pass.")]
    MissingAnalyticalGrad { input_index: usize },

    #[error("Numerical gradient is NaN or infinite for input {input_index}, element {element_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Array error during intermediate calculation: {0}")]
    ArrayError(GradArrayError),
}

impl From<GradArrayError> for GradCheckError {
    fn from(err: GradArrayError) -> Self {
        GradCheckError::ArrayError(err)
    }
}

/// Compares the gradients computed by the backward pass against central
/// finite differences.
///
/// `func` is evaluated on fresh leaves built from `inputs`; the scalar loss is
/// `sum(func(inputs) * output_grad)`, whose derivative with respect to each
/// input is exactly what `backward(output_grad)` should produce.
///
/// # Arguments
/// * `epsilon`: perturbation applied to each input element.
/// * `tolerance`: absolute and relative tolerance of the comparison.
pub fn check_grad<F>(
    func: F,
    inputs: &[ArrayD<f64>],
    output_grad: &ArrayD<f64>,
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[GradArray]) -> Result<GradArray, GradArrayError>,
{
    let tape = Tape::new();
    let leaves: Vec<GradArray> = inputs.iter().map(|data| tape.leaf(data.clone())).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output
        .backward(output_grad.clone())
        .map_err(GradCheckError::BackwardPassError)?;

    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical = leaf
            .grad()
            .ok_or(GradCheckError::MissingAnalyticalGrad { input_index })?;

        for (element_index, &analytical_grad) in analytical.iter().enumerate() {
            let loss_plus = perturbed_loss(&func, inputs, input_index, element_index, epsilon, output_grad)?;
            let loss_minus = perturbed_loss(&func, inputs, input_index, element_index, -epsilon, output_grad)?;
            let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

            if !numerical_grad.is_finite() {
                return Err(GradCheckError::NumericalGradNaNOrInfinite {
                    input_index,
                    element_index,
                    loss_plus,
                    loss_minus,
                });
            }
            if !approx::relative_eq!(
                analytical_grad,
                numerical_grad,
                epsilon = tolerance,
                max_relative = tolerance
            ) {
                return Err(GradCheckError::GradientMismatch {
                    input_index,
                    element_index,
                    analytical_grad,
                    numerical_grad,
                    difference: (analytical_grad - numerical_grad).abs(),
                });
            }
        }
    }
    Ok(())
}

fn perturbed_loss<F>(
    func: &F,
    inputs: &[ArrayD<f64>],
    input_index: usize,
    element_index: usize,
    delta: f64,
    output_grad: &ArrayD<f64>,
) -> Result<f64, GradCheckError>
where
    F: Fn(&[GradArray]) -> Result<GradArray, GradArrayError>,
{
    let tape = Tape::new();
    let leaves: Vec<GradArray> = inputs
        .iter()
        .enumerate()
        .map(|(i, data)| {
            let mut data = data.clone();
            if i == input_index {
                // Logical (row-major) order, the same order `analytical.iter()` walks.
                if let Some(value) = data.iter_mut().nth(element_index) {
                    *value += delta;
                }
            }
            tape.leaf(data)
        })
        .collect();

    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?.data()?;
    if output.shape() != output_grad.shape() {
        return Err(GradCheckError::ArrayError(GradArrayError::ShapeMismatch {
            expected: output.shape().to_vec(),
            actual: output_grad.shape().to_vec(),
            operation: "check_grad".to_string(),
        }));
    }
    Ok((&output * output_grad).sum())
}
