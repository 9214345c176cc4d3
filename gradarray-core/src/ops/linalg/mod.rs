pub mod matmul;
pub mod transpose;

pub use matmul::matmul_op;
pub use transpose::transpose_op;

use ndarray::{ArrayD, ArrayView2, Ix2};

use crate::error::GradArrayError;

/// Views a dynamic-rank array as a matrix, rejecting anything that is not 2-D.
pub(crate) fn as_matrix<'a>(
    array: &'a ArrayD<f64>,
    operation: &str,
) -> Result<ArrayView2<'a, f64>, GradArrayError> {
    if array.ndim() != 2 {
        return Err(GradArrayError::RankError {
            operation: operation.to_string(),
            rank: array.ndim(),
            reason: "expected a 2-D array".to_string(),
        });
    }
    array
        .view()
        .into_dimensionality::<Ix2>()
        .map_err(|e| GradArrayError::InternalError(format!("{}: {}", operation, e)))
}
