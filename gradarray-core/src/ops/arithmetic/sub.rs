// gradarray-core/src/ops/arithmetic/sub.rs

use crate::error::GradArrayError;
use crate::grad_array::GradArray;
use crate::ops::arithmetic::{add_op, check_same_shape, neg_op};

/// Element-wise subtraction, recorded as `a + (-b)`.
///
/// The graph gets a `ScalarMul(-1)` node for `-b` and an `Add` node; there is
/// no dedicated backward rule. Both checks run before anything is recorded.
pub fn sub_op(a: &GradArray, b: &GradArray) -> Result<GradArray, GradArrayError> {
    a.ensure_same_tape(b, "sub")?;
    {
        let inner = a.tape.read();
        check_same_shape(inner.array(a.id).data()?, inner.array(b.id).data()?, "sub")?;
    }
    let negated = neg_op(b)?;
    add_op(a, &negated)
}

impl GradArray {
    pub fn sub(&self, other: &GradArray) -> Result<GradArray, GradArrayError> {
        sub_op(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tape::Tape;
    use crate::utils::testing::check_array_near;
    use ndarray::arr1;

    #[test]
    fn test_sub_forward_and_backward() -> Result<(), GradArrayError> {
        let tape = Tape::new();
        let a = tape.from_vec(vec![5.0, 7.0, 9.0], &[3])?;
        let b = tape.from_vec(vec![1.0, 2.0, 3.0], &[3])?;
        let c = (&a - &b)?;
        check_array_near(&c.data()?, &[3], &[4.0, 5.0, 6.0], 1e-12);

        c.backward(arr1(&[1.0, 2.0, 3.0]).into_dyn())?;
        check_array_near(&a.grad().unwrap(), &[3], &[1.0, 2.0, 3.0], 1e-12);
        check_array_near(&b.grad().unwrap(), &[3], &[-1.0, -2.0, -3.0], 1e-12);
        Ok(())
    }

    #[test]
    fn test_sub_shape_mismatch_records_nothing() -> Result<(), GradArrayError> {
        let tape = Tape::new();
        let a = tape.from_vec(vec![1.0, 2.0], &[2])?;
        let b = tape.from_vec(vec![1.0, 2.0, 3.0], &[3])?;
        assert!(matches!(
            sub_op(&a, &b),
            Err(GradArrayError::ShapeMismatch { .. })
        ));
        assert_eq!(tape.num_nodes(), 0);
        Ok(())
    }
}
