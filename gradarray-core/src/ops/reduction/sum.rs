// gradarray-core/src/ops/reduction/sum.rs

use ndarray::{ArrayD, Axis, IxDyn};

use crate::autograd::{GradOp, NodeInput};
use crate::error::GradArrayError;
use crate::grad_array::GradArray;

/// Sums the elements along `axis`, removing that dimension.
///
/// # Errors
/// `AxisOutOfBounds` if `axis >= rank`.
pub fn sum_op(array: &GradArray, axis: usize) -> Result<GradArray, GradArrayError> {
    let (result, input_shape) = {
        let inner = array.tape.read();
        let data = inner.array(array.id).data()?;
        if axis >= data.ndim() {
            return Err(GradArrayError::AxisOutOfBounds {
                axis,
                rank: data.ndim(),
            });
        }
        (data.sum_axis(Axis(axis)), data.shape().to_vec())
    };
    Ok(array.tape.record(
        result,
        None,
        GradOp::Sum { axis, input_shape },
        vec![NodeInput::Array(array.id)],
    ))
}

// --- Backward Operation ---

/// Broadcasts the reduced gradient back across the summed axis.
pub(crate) fn sum_backward(
    grad_output: &ArrayD<f64>,
    axis: usize,
    input_shape: &[usize],
) -> Result<Vec<Option<ArrayD<f64>>>, GradArrayError> {
    let mismatch = || GradArrayError::GradientShapeMismatch {
        expected: input_shape.to_vec(),
        actual: grad_output.shape().to_vec(),
    };
    if axis > grad_output.ndim() {
        return Err(mismatch());
    }
    let with_axis = grad_output.clone().insert_axis(Axis(axis));
    let grad_input = with_axis
        .broadcast(IxDyn(input_shape))
        .ok_or_else(mismatch)?
        .to_owned();
    Ok(vec![Some(grad_input)])
}

impl GradArray {
    /// See [`sum_op`].
    pub fn sum(&self, axis: usize) -> Result<GradArray, GradArrayError> {
        sum_op(self, axis)
    }
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
