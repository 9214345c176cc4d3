use ndarray::{ArrayD, IxDyn};

use crate::autograd::graph;
use crate::config::GradPolicy;
use crate::error::GradArrayError;
use crate::grad_array::GradArray;
use crate::tape::NodeId;

impl GradArray {
    /// Returns a copy of the gradient, if one has been assigned.
    pub fn grad(&self) -> Option<ArrayD<f64>> {
        self.tape.read().array(self.id).grad().cloned()
    }

    /// Replaces the gradient slot. No shape check is made here; a mismatch is
    /// reported by the next call to [`shape`](GradArray::shape).
    pub fn set_grad(&self, grad: Option<ArrayD<f64>>) {
        self.tape.write().array_mut(self.id).grad = grad;
    }

    /// Resets the gradient to `None`.
    pub fn zero_grad(&self) {
        self.set_grad(None);
    }

    /// Handle of the node that produced this array, `None` for leaves.
    pub fn producer(&self) -> Option<NodeId> {
        self.tape.read().array(self.id).producer()
    }

    pub fn is_leaf(&self) -> bool {
        self.producer().is_none()
    }

    /// Propagates `seed` backward from this array.
    ///
    /// This array's `grad` is set to `seed`, then every array reachable
    /// through non-terminal producers receives its gradient according to the
    /// tape's [`GradPolicy`]. Gradients are assigned, not added to what a
    /// previous call left behind; call it once per pass.
    ///
    /// # Errors
    /// * `ShapeMismatch` if `seed` does not have this array's shape.
    /// * Any error raised by a backward rule.
    pub fn backward(&self, seed: ArrayD<f64>) -> Result<(), GradArrayError> {
        let expected = self.shape()?;
        if seed.shape() != expected.as_slice() {
            return Err(GradArrayError::ShapeMismatch {
                expected,
                actual: seed.shape().to_vec(),
                operation: "backward".to_string(),
            });
        }
        if self.is_leaf() {
            log::debug!("backward() called on a leaf array. Only its own grad is set.");
        }

        match self.tape.config().grad_policy {
            GradPolicy::Accumulate => graph::backward_accumulate(&self.tape, self.id, seed),
            GradPolicy::Overwrite => graph::backward_overwrite(&self.tape, self.id, seed),
        }
    }

    /// Like [`backward`](GradArray::backward) with a seed of ones.
    ///
    /// # Errors
    /// `BackwardNonScalar` unless the array holds exactly one element.
    pub fn backward_scalar(&self) -> Result<(), GradArrayError> {
        let shape = self.shape()?;
        if shape.iter().product::<usize>() != 1 {
            return Err(GradArrayError::BackwardNonScalar);
        }
        self.backward(ArrayD::ones(IxDyn(&shape)))
    }
}
