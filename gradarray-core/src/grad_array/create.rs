// src/grad_array/create.rs

use ndarray::{ArrayD, IxDyn};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::error::GradArrayError;
use crate::grad_array::GradArray;
use crate::tape::Tape;

/// Records a leaf filled with zeros.
pub fn zeros(tape: &Tape, shape: &[usize]) -> GradArray {
    tape.leaf(ArrayD::zeros(IxDyn(shape)))
}

/// Records a leaf filled with ones.
pub fn ones(tape: &Tape, shape: &[usize]) -> GradArray {
    tape.leaf(ArrayD::ones(IxDyn(shape)))
}

/// Records a leaf filled with `value`.
pub fn full(tape: &Tape, shape: &[usize], value: f64) -> GradArray {
    tape.leaf(ArrayD::from_elem(IxDyn(shape), value))
}

/// Records a zero-filled leaf with the shape of `array`, on the same tape.
pub fn zeros_like(array: &GradArray) -> Result<GradArray, GradArrayError> {
    Ok(zeros(array.tape(), &array.shape()?))
}

/// Records a one-filled leaf with the shape of `array`, on the same tape.
pub fn ones_like(array: &GradArray) -> Result<GradArray, GradArrayError> {
    Ok(ones(array.tape(), &array.shape()?))
}

// Note: rand and randn use the thread RNG; pass your own RNG to
// `randn_with_rng` for reproducible initialisation.

/// Records a leaf of values drawn uniformly from `[0, 1)`.
pub fn rand(tape: &Tape, shape: &[usize]) -> GradArray {
    let mut rng = rand::thread_rng();
    tape.leaf(ArrayD::from_shape_fn(IxDyn(shape), |_| rng.gen::<f64>()))
}

/// Records a leaf of values drawn from the standard normal distribution.
pub fn randn(tape: &Tape, shape: &[usize]) -> GradArray {
    randn_with_rng(tape, shape, &mut rand::thread_rng())
}

pub fn randn_with_rng<R: Rng + ?Sized>(tape: &Tape, shape: &[usize], rng: &mut R) -> GradArray {
    let values = ArrayD::from_shape_fn(IxDyn(shape), |_| -> f64 { StandardNormal.sample(&mut *rng) });
    tape.leaf(values)
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
