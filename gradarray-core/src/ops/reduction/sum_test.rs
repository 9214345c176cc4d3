use super::*;
use crate::autograd::grad_check::check_grad;
use crate::tape::Tape;
use crate::utils::testing::check_array_near;
use ndarray::{arr0, arr1, arr2};

#[test]
fn test_sum_axis_0() -> Result<(), GradArrayError> {
    let tape = Tape::new();
    let t = tape.from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3])?;
    let s = t.sum(0)?;
    check_array_near(&s.data()?, &[3], &[5.0, 7.0, 9.0], 1e-12);
    Ok(())
}

#[test]
fn test_sum_axis_1() -> Result<(), GradArrayError> {
    let tape = Tape::new();
    let t = tape.from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3])?;
    let s = sum_op(&t, 1)?;
    check_array_near(&s.data()?, &[2], &[6.0, 15.0], 1e-12);
    Ok(())
}

#[test]
fn test_sum_vector_to_scalar() -> Result<(), GradArrayError> {
    let tape = Tape::new();
    let t = tape.from_vec(vec![1.0, 2.0, 3.0], &[3])?;
    let s = t.sum(0)?;
    assert_eq!(s.data()?, arr0(6.0).into_dyn());
    Ok(())
}

#[test]
fn test_sum_axis_out_of_bounds() -> Result<(), GradArrayError> {
    let tape = Tape::new();
    let t = tape.from_vec(vec![1.0, 2.0], &[2])?;
    assert_eq!(
        t.sum(1).err(),
        Some(GradArrayError::AxisOutOfBounds { axis: 1, rank: 1 })
    );
    Ok(())
}

#[test]
fn test_sum_backward_axis_0() -> Result<(), GradArrayError> {
    let tape = Tape::new();
    let t = tape.from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3])?;
    let s = t.sum(0)?;
    s.backward(arr1(&[1.0, 2.0, 3.0]).into_dyn())?;
    check_array_near(&t.grad().unwrap(), &[2, 3], &[1.0, 2.0, 3.0, 1.0, 2.0, 3.0], 1e-12);
    Ok(())
}

#[test]
fn test_sum_backward_axis_1() -> Result<(), GradArrayError> {
    let tape = Tape::new();
    let t = tape.from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3])?;
    let s = t.sum(1)?;
    s.backward(arr1(&[10.0, -1.0]).into_dyn())?;
    check_array_near(
        &t.grad().unwrap(),
        &[2, 3],
        &[10.0, 10.0, 10.0, -1.0, -1.0, -1.0],
        1e-12,
    );
    Ok(())
}

#[test]
fn test_sum_grad_check_3d() {
    let x = ndarray::Array::from_shape_fn((2, 3, 2), |(i, j, k)| (i * 6 + j * 2 + k) as f64 * 0.1)
        .into_dyn();
    let g = arr2(&[[1.0, -1.0], [0.5, 2.0]]).into_dyn();
    let result = check_grad(|inputs| inputs[0].sum(1), &[x], &g, 1e-6, 1e-6);
    assert_eq!(result, Ok(()));
}
