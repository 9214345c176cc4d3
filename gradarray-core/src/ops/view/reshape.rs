// gradarray-core/src/ops/view/reshape.rs

use ndarray::{ArrayD, IxDyn};

use crate::autograd::{GradOp, NodeInput};
use crate::error::GradArrayError;
use crate::grad_array::GradArray;

/// Reshapes an array, keeping the element count.
///
/// Data and any gradient already present are both reshaped. The node keeps
/// the original shape so the backward pass can restore it.
///
/// # Errors
/// `ShapeMismatch` if the element counts differ.
pub fn reshape_op(a: &GradArray, new_shape: &[usize]) -> Result<GradArray, GradArrayError> {
    let (data, grad, original_shape) = {
        let inner = a.tape.read();
        let entry = inner.array(a.id);
        let data = entry.data()?;
        let reshaped = reshape_array(data, new_shape, "reshape")?;
        let grad = entry
            .grad()
            .map(|g| reshape_array(g, new_shape, "reshape"))
            .transpose()?;
        (reshaped, grad, data.shape().to_vec())
    };
    Ok(a.tape.record(
        data,
        grad,
        GradOp::Reshape { original_shape },
        vec![NodeInput::Array(a.id)],
    ))
}

/// Row-major reshape that works whatever the memory layout of `array`
/// (transposed arrays are not contiguous in standard order).
pub(crate) fn reshape_array(
    array: &ArrayD<f64>,
    shape: &[usize],
    operation: &str,
) -> Result<ArrayD<f64>, GradArrayError> {
    let numel: usize = shape.iter().product();
    if numel != array.len() {
        return Err(GradArrayError::ShapeMismatch {
            expected: shape.to_vec(),
            actual: array.shape().to_vec(),
            operation: operation.to_string(),
        });
    }
    let values: Vec<f64> = array.iter().copied().collect();
    ArrayD::from_shape_vec(IxDyn(shape), values)
        .map_err(|e| GradArrayError::InternalError(format!("{}: {}", operation, e)))
}

// --- Backward Operation ---

pub(crate) fn reshape_backward(
    grad_output: &ArrayD<f64>,
    original_shape: &[usize],
) -> Result<Vec<Option<ArrayD<f64>>>, GradArrayError> {
    let grad_input = reshape_array(grad_output, original_shape, "reshape backward")?;
    Ok(vec![Some(grad_input)])
}

impl GradArray {
    /// See [`reshape_op`].
    pub fn reshape(&self, new_shape: &[usize]) -> Result<GradArray, GradArrayError> {
        reshape_op(self, new_shape)
    }
}

#[cfg(test)]
#[path = "reshape_test.rs"]
mod tests;
