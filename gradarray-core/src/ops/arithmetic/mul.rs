// gradarray-core/src/ops/arithmetic/mul.rs

use ndarray::ArrayD;

use crate::autograd::{GradOp, NodeInput};
use crate::error::GradArrayError;
use crate::grad_array::{GradArray, Operand};

// --- Forward Operation ---

/// Multiplies an array by a scalar.
///
/// Only [`Operand::Scalar`] is accepted. Element-wise multiplication of two
/// arrays has no backward rule and is rejected.
///
/// # Errors
/// `UnsupportedOperand` if `rhs` is an array.
pub fn mul_op<'a>(a: &GradArray, rhs: impl Into<Operand<'a>>) -> Result<GradArray, GradArrayError> {
    match rhs.into() {
        Operand::Scalar(scalar) => scalar_mul(a, scalar),
        Operand::Array(_) => Err(GradArrayError::UnsupportedOperand {
            operation: "mul".to_string(),
            operand: "array (element-wise array products are not supported)".to_string(),
        }),
    }
}

/// Records `scalar * a`. Shared by `mul`, `div` and `neg`.
pub(crate) fn scalar_mul(a: &GradArray, scalar: f64) -> Result<GradArray, GradArrayError> {
    let result = a.with_data(|data| data * scalar)?;
    Ok(a.tape.record(
        result,
        None,
        GradOp::ScalarMul,
        vec![NodeInput::Constant(scalar), NodeInput::Array(a.id)],
    ))
}

// --- Backward Operation ---

/// The scalar is a constant and gets nothing; the array gets `grad_output * scalar`.
pub(crate) fn scalar_mul_backward(grad_output: &ArrayD<f64>, scalar: f64) -> Vec<Option<ArrayD<f64>>> {
    vec![None, Some(grad_output * scalar)]
}

impl GradArray {
    /// See [`mul_op`].
    pub fn mul<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<GradArray, GradArrayError> {
        mul_op(self, rhs)
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
