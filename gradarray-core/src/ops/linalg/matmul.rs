// gradarray-core/src/ops/linalg/matmul.rs

use ndarray::ArrayD;

use crate::autograd::{GradOp, NodeInput};
use crate::error::GradArrayError;
use crate::grad_array::GradArray;
use crate::ops::linalg::as_matrix;

/// Performs matrix multiplication C = A @ B.
/// Currently supports only 2D arrays (matrices).
/// A: [M, K], B: [K, N] -> C: [M, N]
///
/// # Errors
/// * `RankError` if either operand is not 2-D.
/// * `ShapeMismatch` if the inner dimensions differ.
pub fn matmul_op(a: &GradArray, b: &GradArray) -> Result<GradArray, GradArrayError> {
    a.ensure_same_tape(b, "matmul")?;
    let result = {
        let inner = a.tape.read();
        let a_mat = as_matrix(inner.array(a.id).data()?, "matmul")?;
        let b_mat = as_matrix(inner.array(b.id).data()?, "matmul")?;
        if a_mat.ncols() != b_mat.nrows() {
            return Err(GradArrayError::ShapeMismatch {
                expected: vec![a_mat.ncols(), b_mat.ncols()],
                actual: vec![b_mat.nrows(), b_mat.ncols()],
                operation: "matmul".to_string(),
            });
        }
        a_mat.dot(&b_mat).into_dyn()
    };
    Ok(a.tape.record(
        result,
        None,
        GradOp::MatMul,
        vec![NodeInput::Array(a.id), NodeInput::Array(b.id)],
    ))
}

// --- Backward Operation ---

/// dA = dC @ Bᵗ, dB = Aᵗ @ dC
pub(crate) fn matmul_backward(
    grad_output: &ArrayD<f64>,
    a: &ArrayD<f64>,
    b: &ArrayD<f64>,
) -> Result<Vec<Option<ArrayD<f64>>>, GradArrayError> {
    let grad_mat = as_matrix(grad_output, "matmul backward")?;
    let a_mat = as_matrix(a, "matmul backward")?;
    let b_mat = as_matrix(b, "matmul backward")?;

    let grad_a = grad_mat.dot(&b_mat.t()).into_dyn();
    let grad_b = a_mat.t().dot(&grad_mat).into_dyn();
    Ok(vec![Some(grad_a), Some(grad_b)])
}

impl GradArray {
    /// Matrix product `self @ other`, see [`matmul_op`].
    pub fn matmul(&self, other: &GradArray) -> Result<GradArray, GradArrayError> {
        matmul_op(self, other)
    }
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
