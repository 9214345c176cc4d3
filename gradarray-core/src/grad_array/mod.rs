// src/grad_array/mod.rs

use ndarray::ArrayD;

use crate::error::GradArrayError;
use crate::tape::{ArrayId, Tape};

mod autograd_methods;
pub mod create;
mod traits;

pub use create::{full, ones, ones_like, rand, randn, randn_with_rng, zeros, zeros_like};
pub use traits::Operand;

/// A differentiable array.
///
/// `GradArray` is a handle: the tape it was recorded on plus the id of its
/// entry. Cloning it is cheap and yields a handle to the *same* array (same
/// data, same gradient slot), not a copy.
///
/// Arrays are created as leaves through the [`Tape`] (or the helpers in
/// [`create`]) and as operation results through the operators and methods
/// below. Every operation result remembers the node that produced it, which is
/// what [`backward`](GradArray::backward) walks.
pub struct GradArray {
    pub(crate) tape: Tape,
    pub(crate) id: ArrayId,
}

impl GradArray {
    pub(crate) fn from_parts(tape: Tape, id: ArrayId) -> Self {
        GradArray { tape, id }
    }

    pub fn id(&self) -> ArrayId {
        self.id
    }

    /// The tape this array is recorded on.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Returns the dimensions of the data.
    ///
    /// # Errors
    /// * `Uninitialized` for a placeholder whose data was never set.
    /// * `ShapeMismatch` if a gradient is present with a different shape.
    pub fn shape(&self) -> Result<Vec<usize>, GradArrayError> {
        self.tape.read().array(self.id).shape()
    }

    /// Number of dimensions, derived from [`shape`](GradArray::shape).
    pub fn rank(&self) -> Result<usize, GradArrayError> {
        Ok(self.shape()?.len())
    }

    pub fn numel(&self) -> Result<usize, GradArrayError> {
        Ok(self.shape()?.iter().product())
    }

    /// Returns a copy of the data.
    pub fn data(&self) -> Result<ArrayD<f64>, GradArrayError> {
        self.tape.read().array(self.id).data().cloned()
    }

    /// Sets the data of a placeholder.
    ///
    /// # Errors
    /// `AlreadyInitialized` if the array already holds data.
    pub fn initialize(&self, data: ArrayD<f64>) -> Result<(), GradArrayError> {
        let mut inner = self.tape.write();
        let entry = inner.array_mut(self.id);
        if entry.data.is_some() {
            return Err(GradArrayError::AlreadyInitialized);
        }
        entry.data = Some(data);
        Ok(())
    }

    /// Records a new leaf on the same tape holding a copy of this array's data.
    /// The result has no producer and no gradient.
    pub fn detach(&self) -> Result<GradArray, GradArrayError> {
        self.detach_into(&self.tape)
    }

    /// Records a copy of this array's data as a leaf on `tape`.
    ///
    /// Moving the values a caller wants to keep onto a fresh tape lets the old
    /// tape, and every array and node recorded on it, be freed once its last
    /// handle is dropped.
    pub fn detach_into(&self, tape: &Tape) -> Result<GradArray, GradArrayError> {
        let data = self.data()?;
        Ok(tape.leaf(data))
    }

    /// Runs `f` on the data without copying it.
    pub(crate) fn with_data<R>(
        &self,
        f: impl FnOnce(&ArrayD<f64>) -> R,
    ) -> Result<R, GradArrayError> {
        let inner = self.tape.read();
        let data = inner.array(self.id).data()?;
        Ok(f(data))
    }

    pub(crate) fn ensure_same_tape(&self, other: &GradArray, operation: &str) -> Result<(), GradArrayError> {
        if self.tape.same_tape(&other.tape) {
            Ok(())
        } else {
            Err(GradArrayError::TapeMismatch {
                operation: operation.to_string(),
            })
        }
    }
}
