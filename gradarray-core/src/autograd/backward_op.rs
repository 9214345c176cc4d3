use ndarray::ArrayD;

use crate::error::GradArrayError;
use crate::ops;
use crate::tape::{ArrayId, TapeInner};

/// One operand of a recorded operation, in the order it was passed.
///
/// Plain scalars are wrapped as non-differentiable constants: they never
/// receive a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeInput {
    Constant(f64),
    Array(ArrayId),
}

/// The closed set of differentiable operations.
///
/// Each variant carries the metadata its backward rule needs beyond the
/// input arrays themselves (which are read back from the tape).
#[derive(Debug, Clone, PartialEq)]
pub enum GradOp {
    /// `c = a + b`
    Add,
    /// `c = s * a`, inputs `[Constant(s), Array(a)]`
    ScalarMul,
    /// `c = a @ b`
    MatMul,
    /// `c = aᵗ`
    Transpose,
    /// `c = a ^ exponent`
    Power { exponent: f64 },
    /// `c = reshape(a, ..)`
    Reshape { original_shape: Vec<usize> },
    /// `c = sum(a, axis)`
    Sum { axis: usize, input_shape: Vec<usize> },
    /// `c = tile(a, (dim, 1))`
    Expand { dim: usize },
}

impl GradOp {
    pub fn name(&self) -> &'static str {
        match self {
            GradOp::Add => "Add",
            GradOp::ScalarMul => "ScalarMul",
            GradOp::MatMul => "MatMul",
            GradOp::Transpose => "Transpose",
            GradOp::Power { .. } => "Power",
            GradOp::Reshape { .. } => "Reshape",
            GradOp::Sum { .. } => "Sum",
            GradOp::Expand { .. } => "Expand",
        }
    }

    /// Whether propagation stops at this node.
    ///
    /// A terminal node still computes its backward rule, but the backward pass
    /// never descends into its inputs. `Expand` is the only terminal operation.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GradOp::Expand { .. })
    }

    /// Computes the gradient owed to each input given the gradient of the output.
    ///
    /// The returned `Vec` has exactly one entry per input, in input order.
    /// Constants get `None`, and so does the input of a terminal node.
    pub(crate) fn backward(
        &self,
        grad_output: &ArrayD<f64>,
        inputs: &[NodeInput],
        tape: &TapeInner,
    ) -> Result<Vec<Option<ArrayD<f64>>>, GradArrayError> {
        let grads = match self {
            GradOp::Add => ops::arithmetic::add::add_backward(grad_output),
            GradOp::ScalarMul => {
                let scalar = constant_input(inputs, 0, self.name())?;
                ops::arithmetic::mul::scalar_mul_backward(grad_output, scalar)
            }
            GradOp::MatMul => {
                let a = array_input(inputs, 0, tape, self.name())?;
                let b = array_input(inputs, 1, tape, self.name())?;
                ops::linalg::matmul::matmul_backward(grad_output, a, b)?
            }
            GradOp::Transpose => ops::linalg::transpose::transpose_backward(grad_output),
            GradOp::Power { exponent } => {
                let base = array_input(inputs, 0, tape, self.name())?;
                ops::arithmetic::pow::pow_backward(grad_output, base, *exponent)
            }
            GradOp::Reshape { original_shape } => {
                ops::view::reshape::reshape_backward(grad_output, original_shape)?
            }
            GradOp::Sum { axis, input_shape } => {
                ops::reduction::sum::sum_backward(grad_output, *axis, input_shape)?
            }
            GradOp::Expand { .. } => ops::view::expand::expand_backward(),
        };

        if grads.len() != inputs.len() {
            return Err(GradArrayError::InternalError(format!(
                "{} backward returned {} gradients for {} inputs",
                self.name(),
                grads.len(),
                inputs.len()
            )));
        }
        Ok(grads)
    }
}

/// An operation node: the operation plus its forward-pass operands.
///
/// A node is owned by the tape and referenced by exactly one array (its output).
#[derive(Debug, Clone)]
pub struct Node {
    op: GradOp,
    inputs: Vec<NodeInput>,
}

impl Node {
    pub(crate) fn new(op: GradOp, inputs: Vec<NodeInput>) -> Self {
        Node { op, inputs }
    }

    pub fn op(&self) -> &GradOp {
        &self.op
    }

    pub fn inputs(&self) -> &[NodeInput] {
        &self.inputs
    }

    /// Array inputs the backward pass descends into. Empty for terminal nodes.
    pub(crate) fn propagating_inputs(&self) -> impl Iterator<Item = ArrayId> + '_ {
        let terminal = self.op.is_terminal();
        self.inputs.iter().filter_map(move |input| match input {
            NodeInput::Array(id) if !terminal => Some(*id),
            _ => None,
        })
    }
}

fn array_input<'a>(
    inputs: &[NodeInput],
    index: usize,
    tape: &'a TapeInner,
    op_name: &str,
) -> Result<&'a ArrayD<f64>, GradArrayError> {
    match inputs.get(index) {
        Some(NodeInput::Array(id)) => tape.array(*id).data(),
        other => Err(GradArrayError::InternalError(format!(
            "{} expects an array input at position {}, found {:?}",
            op_name, index, other
        ))),
    }
}

fn constant_input(inputs: &[NodeInput], index: usize, op_name: &str) -> Result<f64, GradArrayError> {
    match inputs.get(index) {
        Some(NodeInput::Constant(value)) => Ok(*value),
        other => Err(GradArrayError::InternalError(format!(
            "{} expects a constant input at position {}, found {:?}",
            op_name, index, other
        ))),
    }
}
