// gradarray-core/src/ops/view/expand.rs

use ndarray::{Array1, ArrayD};

use crate::autograd::{GradOp, NodeInput};
use crate::error::GradArrayError;
use crate::grad_array::GradArray;

/// Tiles a vector into a matrix of `dim` identical rows: `[n] -> [dim, n]`.
/// A zero-dimensional input is treated as `[1]`.
///
/// The produced node is terminal: a backward pass reaching it stops there and
/// never assigns a gradient to `array`.
///
/// # Errors
/// `RankError` if `array` has more than one dimension.
pub fn expand_op(array: &GradArray, dim: usize) -> Result<GradArray, GradArrayError> {
    let result = {
        let inner = array.tape.read();
        let data = inner.array(array.id).data()?;
        if data.ndim() > 1 {
            return Err(GradArrayError::RankError {
                operation: "expand".to_string(),
                rank: data.ndim(),
                reason: "expand only works for vectors (rank <= 1)".to_string(),
            });
        }
        let row: Array1<f64> = data.iter().copied().collect();
        let len = row.len();
        let tiled = row
            .broadcast((dim, len))
            .ok_or_else(|| {
                GradArrayError::InternalError(format!("expand: cannot tile {} values into {} rows", len, dim))
            })?
            .to_owned();
        tiled.into_dyn()
    };
    Ok(array.tape.record(
        result,
        None,
        GradOp::Expand { dim },
        vec![NodeInput::Array(array.id)],
    ))
}

// --- Backward Operation ---

/// Placeholder rule: no gradient is produced for the input, and the node being
/// terminal means none is expected.
pub(crate) fn expand_backward() -> Vec<Option<ArrayD<f64>>> {
    vec![None]
}

#[cfg(test)]
#[path = "expand_test.rs"]
mod tests;
