// src/array_data.rs
use ndarray::ArrayD;

use crate::error::GradArrayError;
use crate::tape::NodeId;

/// Internal storage and metadata for one array recorded on a tape.
///
/// Entries live inside the tape arena and are addressed through an
/// [`ArrayId`](crate::ArrayId); the public [`GradArray`](crate::GradArray)
/// is only a handle to one of them.
#[derive(Debug, Clone)]
pub struct ArrayData {
    /// The numeric values. `None` only for placeholders awaiting `initialize`.
    /// Never replaced once set.
    pub(crate) data: Option<ArrayD<f64>>,
    /// The gradient assigned by the most recent backward pass, if any.
    /// Has the same shape as `data` once populated.
    pub(crate) grad: Option<ArrayD<f64>>,
    /// Handle of the node that produced this array. Leaves have `None`.
    pub(crate) producer: Option<NodeId>,
}

impl ArrayData {
    /// Creates a leaf entry (no producing operation).
    pub fn leaf(data: ArrayD<f64>) -> Self {
        ArrayData {
            data: Some(data),
            grad: None,
            producer: None,
        }
    }

    /// Creates a leaf entry without data.
    pub fn placeholder() -> Self {
        ArrayData {
            data: None,
            grad: None,
            producer: None,
        }
    }

    /// Creates the entry of an operation result.
    pub fn produced(data: ArrayD<f64>, grad: Option<ArrayD<f64>>, producer: NodeId) -> Self {
        ArrayData {
            data: Some(data),
            grad,
            producer: Some(producer),
        }
    }

    /// Borrows the numeric values, failing for placeholders.
    pub fn data(&self) -> Result<&ArrayD<f64>, GradArrayError> {
        self.data.as_ref().ok_or(GradArrayError::Uninitialized)
    }

    pub fn grad(&self) -> Option<&ArrayD<f64>> {
        self.grad.as_ref()
    }

    pub fn producer(&self) -> Option<NodeId> {
        self.producer
    }

    /// Returns the dimensions of `data`.
    ///
    /// # Errors
    /// * `Uninitialized` if there is no data.
    /// * `ShapeMismatch` if a gradient is present and its shape differs from the data's.
    pub fn shape(&self) -> Result<Vec<usize>, GradArrayError> {
        let data = self.data()?;
        if let Some(grad) = &self.grad {
            if grad.shape() != data.shape() {
                return Err(GradArrayError::ShapeMismatch {
                    expected: data.shape().to_vec(),
                    actual: grad.shape().to_vec(),
                    operation: "shape".to_string(),
                });
            }
        }
        Ok(data.shape().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    #[test]
    fn test_shape_of_leaf() {
        let entry = ArrayData::leaf(arr2(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).into_dyn());
        assert_eq!(entry.shape(), Ok(vec![2, 3]));
        assert!(entry.producer().is_none());
    }

    #[test]
    fn test_shape_of_placeholder_is_uninitialized() {
        let entry = ArrayData::placeholder();
        assert_eq!(entry.shape(), Err(GradArrayError::Uninitialized));
    }

    #[test]
    fn test_shape_rejects_mismatched_grad() {
        let mut entry = ArrayData::leaf(arr1(&[1.0, 2.0]).into_dyn());
        entry.grad = Some(arr1(&[1.0, 2.0, 3.0]).into_dyn());
        assert!(matches!(
            entry.shape(),
            Err(GradArrayError::ShapeMismatch { .. })
        ));
    }
}
