use super::*;
use crate::autograd::grad_check::check_grad;
use crate::tape::Tape;
use crate::utils::testing::check_array_near;
use ndarray::arr2;

#[test]
fn test_matmul_forward_2x3_3x2() -> Result<(), GradArrayError> {
    let tape = Tape::new();
    let a = tape.from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3])?;
    let b = tape.from_vec(vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0], &[3, 2])?;
    let c = a.matmul(&b)?;
    check_array_near(&c.data()?, &[2, 2], &[58.0, 64.0, 139.0, 154.0], 1e-12);
    Ok(())
}

#[test]
fn test_matmul_inner_dimension_mismatch() -> Result<(), GradArrayError> {
    let tape = Tape::new();
    let a = tape.from_vec(vec![1.0; 6], &[2, 3])?;
    let b = tape.from_vec(vec![1.0; 4], &[2, 2])?;
    assert!(matches!(
        a.matmul(&b),
        Err(GradArrayError::ShapeMismatch { .. })
    ));
    Ok(())
}

#[test]
fn test_matmul_requires_matrices() -> Result<(), GradArrayError> {
    let tape = Tape::new();
    let a = tape.from_vec(vec![1.0, 2.0], &[2])?;
    let b = tape.from_vec(vec![1.0; 4], &[2, 2])?;
    assert!(matches!(
        a.matmul(&b),
        Err(GradArrayError::RankError { rank: 1, .. })
    ));
    Ok(())
}

#[test]
fn test_matmul_backward() -> Result<(), GradArrayError> {
    let tape = Tape::new();
    let a_data = arr2(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    let b_data = arr2(&[[1.0, 0.0, -1.0], [2.0, 1.0, 0.5]]);
    let g_data = arr2(&[[1.0, 0.0, 2.0], [0.0, 1.0, 0.0], [1.0, 1.0, 1.0]]);

    let a = tape.leaf(a_data.clone().into_dyn());
    let b = tape.leaf(b_data.clone().into_dyn());
    let c = a.matmul(&b)?;
    c.backward(g_data.clone().into_dyn())?;

    let expected_a = g_data.dot(&b_data.t()).into_dyn();
    let expected_b = a_data.t().dot(&g_data).into_dyn();
    assert_eq!(a.grad(), Some(expected_a));
    assert_eq!(b.grad(), Some(expected_b));
    Ok(())
}

#[test]
fn test_matmul_grad_check() {
    let a = arr2(&[[0.3, -1.2, 2.0], [1.5, 0.7, -0.4]]).into_dyn();
    let b = arr2(&[[1.0, 2.0], [-0.5, 0.25], [3.0, -1.0]]).into_dyn();
    let g = arr2(&[[1.0, -2.0], [0.5, 1.0]]).into_dyn();
    let result = check_grad(|inputs| inputs[0].matmul(&inputs[1]), &[a, b], &g, 1e-6, 1e-5);
    assert_eq!(result, Ok(()));
}
