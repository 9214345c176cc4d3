use super::*;
use crate::tape::Tape;
use crate::utils::testing::check_array_near;
use ndarray::ArrayD;

#[test]
fn test_expand_vector() -> Result<(), GradArrayError> {
    let tape = Tape::new();
    let v = tape.from_vec(vec![1.0, 2.0, 3.0], &[3])?;
    let e = expand_op(&v, 2)?;
    check_array_near(&e.data()?, &[2, 3], &[1.0, 2.0, 3.0, 1.0, 2.0, 3.0], 1e-12);
    assert_eq!(tape.op_name(e.producer().unwrap()), Some("Expand"));
    Ok(())
}

#[test]
fn test_expand_scalar() -> Result<(), GradArrayError> {
    let tape = Tape::new();
    let s = tape.scalar(4.0);
    let e = expand_op(&s, 3)?;
    check_array_near(&e.data()?, &[3, 1], &[4.0, 4.0, 4.0], 1e-12);
    Ok(())
}

#[test]
fn test_expand_rank_error() -> Result<(), GradArrayError> {
    let tape = Tape::new();
    let m = tape.from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2])?;
    assert!(matches!(
        expand_op(&m, 3),
        Err(GradArrayError::RankError { rank: 2, .. })
    ));
    Ok(())
}

#[test]
fn test_expand_backward_is_terminal() -> Result<(), GradArrayError> {
    let tape = Tape::new();
    let v = tape.from_vec(vec![1.0, 2.0], &[2])?;
    let e = expand_op(&v, 3)?;
    let seed = ArrayD::ones(ndarray::IxDyn(&[3, 2]));
    e.backward(seed.clone())?;
    assert_eq!(e.grad(), Some(seed));
    assert!(v.grad().is_none());
    Ok(())
}
