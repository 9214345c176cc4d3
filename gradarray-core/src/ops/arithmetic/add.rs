// gradarray-core/src/ops/arithmetic/add.rs

use ndarray::ArrayD;

use crate::autograd::{GradOp, NodeInput};
use crate::error::GradArrayError;
use crate::grad_array::GradArray;
use crate::ops::arithmetic::check_same_shape;

// --- Forward Operation ---

/// Element-wise addition of two arrays with identical shapes.
///
/// No broadcasting is performed; tile a vector with [`expand`](crate::expand)
/// first if needed.
///
/// # Errors
/// * `TapeMismatch` if the operands live on different tapes.
/// * `ShapeMismatch` if the shapes differ.
pub fn add_op(a: &GradArray, b: &GradArray) -> Result<GradArray, GradArrayError> {
    a.ensure_same_tape(b, "add")?;
    let result = {
        let inner = a.tape.read();
        let a_data = inner.array(a.id).data()?;
        let b_data = inner.array(b.id).data()?;
        check_same_shape(a_data, b_data, "add")?;
        a_data + b_data
    };
    Ok(a.tape.record(
        result,
        None,
        GradOp::Add,
        vec![NodeInput::Array(a.id), NodeInput::Array(b.id)],
    ))
}

// --- Backward Operation ---

/// Both operands receive the output gradient unchanged.
pub(crate) fn add_backward(grad_output: &ArrayD<f64>) -> Vec<Option<ArrayD<f64>>> {
    vec![Some(grad_output.clone()), Some(grad_output.clone())]
}

impl GradArray {
    /// See [`add_op`].
    pub fn add(&self, other: &GradArray) -> Result<GradArray, GradArrayError> {
        add_op(self, other)
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
