// src/grad_array/traits.rs

use std::fmt::{self, Debug};
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::GradArrayError;
use crate::grad_array::GradArray;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};

/// Right-hand operand of the scalar-only operators (`*`, `/`).
///
/// Both variants are accepted at the type level so that callers can pass
/// either; only `Scalar` is valid, and `Array` is rejected with
/// `UnsupportedOperand` before anything is recorded.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Scalar(f64),
    Array(&'a GradArray),
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl<'a> From<&'a GradArray> for Operand<'a> {
    fn from(array: &'a GradArray) -> Self {
        Operand::Array(array)
    }
}

impl Clone for GradArray {
    /// Shallow clone: the new handle refers to the same tape entry.
    fn clone(&self) -> Self {
        GradArray::from_parts(self.tape.clone(), self.id)
    }
}

impl Debug for GradArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.tape.read();
        let entry = inner.array(self.id);
        let shape = entry.data().map(|d| d.shape().to_vec());
        let producer = entry.producer().map(|node| inner.node(node).op().name());
        f.debug_struct("GradArray")
            .field("id", &self.id)
            .field("shape", &shape)
            .field("has_grad", &entry.grad().is_some())
            .field("producer", &producer)
            .finish()
    }
}

// --- Operator overloads ---
// Each operator is fallible, so `Output` is a `Result`.

impl<'a, 'b> Add<&'b GradArray> for &'a GradArray {
    type Output = Result<GradArray, GradArrayError>;

    fn add(self, rhs: &'b GradArray) -> Self::Output {
        add_op(self, rhs)
    }
}

impl<'a, 'b> Sub<&'b GradArray> for &'a GradArray {
    type Output = Result<GradArray, GradArrayError>;

    fn sub(self, rhs: &'b GradArray) -> Self::Output {
        sub_op(self, rhs)
    }
}

impl<'a> Mul<f64> for &'a GradArray {
    type Output = Result<GradArray, GradArrayError>;

    fn mul(self, rhs: f64) -> Self::Output {
        mul_op(self, rhs)
    }
}

impl<'a> Mul<&'a GradArray> for f64 {
    type Output = Result<GradArray, GradArrayError>;

    fn mul(self, rhs: &'a GradArray) -> Self::Output {
        mul_op(rhs, self)
    }
}

/// Always fails with `UnsupportedOperand`: element-wise array products have no backward rule.
impl<'a, 'b> Mul<&'b GradArray> for &'a GradArray {
    type Output = Result<GradArray, GradArrayError>;

    fn mul(self, rhs: &'b GradArray) -> Self::Output {
        mul_op(self, rhs)
    }
}

impl<'a> Div<f64> for &'a GradArray {
    type Output = Result<GradArray, GradArrayError>;

    fn div(self, rhs: f64) -> Self::Output {
        div_op(self, rhs)
    }
}

/// Always fails with `UnsupportedOperand`, like the array-by-array `Mul`.
impl<'a, 'b> Div<&'b GradArray> for &'a GradArray {
    type Output = Result<GradArray, GradArrayError>;

    fn div(self, rhs: &'b GradArray) -> Self::Output {
        div_op(self, rhs)
    }
}

impl<'a> Neg for &'a GradArray {
    type Output = Result<GradArray, GradArrayError>;

    fn neg(self) -> Self::Output {
        neg_op(self)
    }
}
