// gradarray-core/src/ops/arithmetic/pow.rs

use ndarray::ArrayD;

use crate::autograd::{GradOp, NodeInput};
use crate::error::GradArrayError;
use crate::grad_array::GradArray;

/// Raises each element to the power of the given scalar exponent.
pub fn pow_op(base: &GradArray, exponent: f64) -> Result<GradArray, GradArrayError> {
    let result = base.with_data(|data| data.mapv(|x| x.powf(exponent)))?;
    Ok(base.tape.record(
        result,
        None,
        GradOp::Power { exponent },
        vec![NodeInput::Array(base.id)],
    ))
}

// --- Backward Operation ---

/// d(x^p)/dx = p * x^(p-1)
pub(crate) fn pow_backward(
    grad_output: &ArrayD<f64>,
    base: &ArrayD<f64>,
    exponent: f64,
) -> Vec<Option<ArrayD<f64>>> {
    let local = base.mapv(|x| exponent * x.powf(exponent - 1.0));
    vec![Some(grad_output * &local)]
}

impl GradArray {
    /// Element-wise power, see [`pow_op`].
    pub fn pow(&self, exponent: f64) -> Result<GradArray, GradArrayError> {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
