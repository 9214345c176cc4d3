use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_zeros() -> Result<(), GradArrayError> {
    let tape = Tape::new();
    let t = zeros(&tape, &[2, 3]);
    assert_eq!(t.shape()?, vec![2, 3]);
    assert_eq!(t.numel()?, 6);
    assert!(t.data()?.iter().all(|&x| x == 0.0));
    assert!(t.is_leaf());
    Ok(())
}

#[test]
fn test_ones() -> Result<(), GradArrayError> {
    let tape = Tape::new();
    let t = ones(&tape, &[1, 4]);
    assert_eq!(t.shape()?, vec![1, 4]);
    assert!(t.data()?.iter().all(|&x| x == 1.0));
    Ok(())
}

#[test]
fn test_full() -> Result<(), GradArrayError> {
    let tape = Tape::new();
    let fill_val = 42.5;
    let t = full(&tape, &[3, 1, 2], fill_val);
    assert_eq!(t.numel()?, 6);
    assert!(t.data()?.iter().all(|&x| (x - fill_val).abs() < 1e-12));
    Ok(())
}

#[test]
fn test_zeros_like_and_ones_like() -> Result<(), GradArrayError> {
    let tape = Tape::new();
    let base = tape.from_vec(vec![1.0, 2.0, 3.0], &[1, 3])?;
    let z = zeros_like(&base)?;
    let o = ones_like(&base)?;
    assert_eq!(z.shape()?, base.shape()?);
    assert_eq!(o.shape()?, base.shape()?);
    assert!(z.tape().same_tape(base.tape()));
    assert_eq!(o.data()?.sum(), 3.0);
    Ok(())
}

#[test]
fn test_like_of_placeholder_fails() {
    let tape = Tape::new();
    let p = tape.placeholder();
    assert_eq!(zeros_like(&p).err(), Some(GradArrayError::Uninitialized));
}

#[test]
fn test_rand() -> Result<(), GradArrayError> {
    let tape = Tape::new();
    let t = rand(&tape, &[2, 3]);
    assert_eq!(t.shape()?, vec![2, 3]);
    assert!(t.data()?.iter().all(|&x| (0.0..1.0).contains(&x)));
    Ok(())
}

#[test]
fn test_randn() -> Result<(), GradArrayError> {
    let tape = Tape::new();
    let t = randn(&tape, &[4, 5]);
    assert_eq!(t.shape()?, vec![4, 5]);
    assert!(t.data()?.iter().all(|x| x.is_finite()));
    Ok(())
}

#[test]
fn test_randn_with_rng_is_reproducible() -> Result<(), GradArrayError> {
    let tape = Tape::new();
    let a = randn_with_rng(&tape, &[8], &mut StdRng::seed_from_u64(7));
    let b = randn_with_rng(&tape, &[8], &mut StdRng::seed_from_u64(7));
    assert_eq!(a.data()?, b.data()?);
    Ok(())
}
