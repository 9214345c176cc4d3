// Export foundational arithmetic operations directly
pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use pow::pow_op;
pub use sub::sub_op;

use ndarray::ArrayD;

use crate::error::GradArrayError;

/// Element-wise operations require identical shapes (no implicit broadcasting).
pub(crate) fn check_same_shape(
    a: &ArrayD<f64>,
    b: &ArrayD<f64>,
    operation: &str,
) -> Result<(), GradArrayError> {
    if a.shape() != b.shape() {
        return Err(GradArrayError::ShapeMismatch {
            expected: a.shape().to_vec(),
            actual: b.shape().to_vec(),
            operation: operation.to_string(),
        });
    }
    Ok(())
}
