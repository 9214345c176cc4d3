// gradarray-core/src/ops/arithmetic/div.rs

use crate::error::GradArrayError;
use crate::grad_array::{GradArray, Operand};
use crate::ops::arithmetic::mul::scalar_mul;

/// Divides an array by a scalar, recorded as a multiplication by its reciprocal.
///
/// # Errors
/// * `UnsupportedOperand` if `rhs` is an array.
/// * `DivisionByZero` if the scalar is zero.
pub fn div_op<'a>(a: &GradArray, rhs: impl Into<Operand<'a>>) -> Result<GradArray, GradArrayError> {
    match rhs.into() {
        Operand::Scalar(scalar) => {
            if scalar == 0.0 {
                return Err(GradArrayError::DivisionByZero);
            }
            scalar_mul(a, scalar.recip())
        }
        Operand::Array(_) => Err(GradArrayError::UnsupportedOperand {
            operation: "div".to_string(),
            operand: "array (element-wise array division is not supported)".to_string(),
        }),
    }
}

impl GradArray {
    /// See [`div_op`].
    pub fn div<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<GradArray, GradArrayError> {
        div_op(self, rhs)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
