// gradarray-core/src/ops/linalg/transpose.rs

use ndarray::ArrayD;

use crate::autograd::{GradOp, NodeInput};
use crate::error::GradArrayError;
use crate::grad_array::GradArray;

/// Transposes a matrix. A gradient already present on the input is carried
/// over, transposed.
///
/// # Errors
/// `RankError` unless the input is 2-D (no batch transpose).
pub fn transpose_op(a: &GradArray) -> Result<GradArray, GradArrayError> {
    let (data, grad) = {
        let inner = a.tape.read();
        let entry = inner.array(a.id);
        let data = entry.data()?;
        if data.ndim() != 2 {
            return Err(GradArrayError::RankError {
                operation: "transpose".to_string(),
                rank: data.ndim(),
                reason: "only 2-D arrays can be transposed".to_string(),
            });
        }
        (data.t().to_owned(), entry.grad().map(|g| g.t().to_owned()))
    };
    Ok(a.tape.record(data, grad, GradOp::Transpose, vec![NodeInput::Array(a.id)]))
}

pub(crate) fn transpose_backward(grad_output: &ArrayD<f64>) -> Vec<Option<ArrayD<f64>>> {
    vec![Some(grad_output.t().to_owned())]
}

impl GradArray {
    /// Matrix transpose, see [`transpose_op`].
    pub fn transpose(&self) -> Result<GradArray, GradArrayError> {
        transpose_op(self)
    }

    /// Short alias of [`transpose`](GradArray::transpose).
    pub fn t(&self) -> Result<GradArray, GradArrayError> {
        transpose_op(self)
    }
}

#[cfg(test)]
#[path = "transpose_test.rs"]
mod tests;
