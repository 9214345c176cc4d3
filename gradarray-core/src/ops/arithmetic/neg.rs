// gradarray-core/src/ops/arithmetic/neg.rs

use crate::error::GradArrayError;
use crate::grad_array::GradArray;
use crate::ops::arithmetic::mul::scalar_mul;

/// Unary negation, recorded as a multiplication by the constant `-1`.
pub fn neg_op(a: &GradArray) -> Result<GradArray, GradArrayError> {
    scalar_mul(a, -1.0)
}

impl GradArray {
    pub fn neg(&self) -> Result<GradArray, GradArrayError> {
        neg_op(self)
    }
}
