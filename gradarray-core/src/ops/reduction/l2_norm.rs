// gradarray-core/src/ops/reduction/l2_norm.rs

use crate::error::GradArrayError;
use crate::grad_array::GradArray;
use crate::ops::arithmetic::pow_op;
use crate::ops::reduction::sum::sum_op;

/// Squared L2 norm along `axis`: `sum(array ** 2, axis)`.
///
/// Records a `Power` node followed by a `Sum` node; the axis is validated
/// first so a bad axis records nothing.
pub fn l2_norm_square(array: &GradArray, axis: usize) -> Result<GradArray, GradArrayError> {
    let rank = array.rank()?;
    if axis >= rank {
        return Err(GradArrayError::AxisOutOfBounds { axis, rank });
    }
    let squared = pow_op(array, 2.0)?;
    sum_op(&squared, axis)
}

impl GradArray {
    /// See [`l2_norm_square`].
    pub fn l2_norm_square(&self, axis: usize) -> Result<GradArray, GradArrayError> {
        l2_norm_square(self, axis)
    }
}
