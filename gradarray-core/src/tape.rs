// src/tape.rs

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use ndarray::{ArrayD, IxDyn};

use crate::array_data::ArrayData;
use crate::autograd::{GradOp, Node, NodeInput};
use crate::config::TapeConfig;
use crate::error::GradArrayError;
use crate::grad_array::GradArray;

/// Handle of an array entry inside a [`Tape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArrayId(pub(crate) usize);

/// Handle of an operation node inside a [`Tape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Arena owning every array entry and operation node of one computation graph.
#[derive(Debug, Default)]
pub(crate) struct TapeInner {
    arrays: Vec<ArrayData>,
    nodes: Vec<Node>,
    config: TapeConfig,
}

impl TapeInner {
    // Ids are only minted by this arena, and every operation checks that its
    // operands come from the same tape, so indexing stays in bounds.
    pub(crate) fn array(&self, id: ArrayId) -> &ArrayData {
        &self.arrays[id.0]
    }

    pub(crate) fn array_mut(&mut self, id: ArrayId) -> &mut ArrayData {
        &mut self.arrays[id.0]
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn push_array(&mut self, entry: ArrayData) -> ArrayId {
        self.arrays.push(entry);
        ArrayId(self.arrays.len() - 1)
    }

    fn push_node(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }
}

/// Records arrays and the operations combining them.
///
/// A `Tape` is a cheap, shared handle (`Rc<RefCell<..>>`) to an arena. Arrays
/// hold a `Tape` plus their [`ArrayId`]; an operation result stores the
/// [`NodeId`] of its producer instead of a live reference. Nodes only point to
/// arrays recorded before them, so the graph is a DAG directed towards the
/// leaves.
///
/// Entries are never removed while the tape is alive: the arena is freed as a
/// whole when the last handle to it (a `Tape` or any `GradArray` recorded on
/// it) is dropped. Long-running loops record each step on a new tape and carry
/// the values they keep over with [`GradArray::detach_into`].
///
/// `Tape` is single-threaded by construction (`!Send`, `!Sync`).
#[derive(Debug, Clone, Default)]
pub struct Tape {
    inner: Rc<RefCell<TapeInner>>,
}

impl Tape {
    /// Creates an empty tape with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty tape with the given configuration.
    pub fn with_config(config: TapeConfig) -> Self {
        let inner = TapeInner {
            config,
            ..TapeInner::default()
        };
        Tape {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    pub fn config(&self) -> TapeConfig {
        self.read().config
    }

    /// Records a leaf array holding `data`.
    pub fn leaf(&self, data: ArrayD<f64>) -> GradArray {
        let id = self.write().push_array(ArrayData::leaf(data));
        GradArray::from_parts(self.clone(), id)
    }

    /// Records a leaf array from row-major values.
    ///
    /// # Errors
    /// `ShapeMismatch` if `data.len()` differs from the element count of `shape`.
    pub fn from_vec(&self, data: Vec<f64>, shape: &[usize]) -> Result<GradArray, GradArrayError> {
        let numel: usize = shape.iter().product();
        if data.len() != numel {
            return Err(GradArrayError::ShapeMismatch {
                expected: shape.to_vec(),
                actual: vec![data.len()],
                operation: "from_vec".to_string(),
            });
        }
        let array = ArrayD::from_shape_vec(IxDyn(shape), data)
            .map_err(|e| GradArrayError::InternalError(format!("from_vec: {}", e)))?;
        Ok(self.leaf(array))
    }

    /// Records a zero-dimensional leaf.
    pub fn scalar(&self, value: f64) -> GradArray {
        self.leaf(ArrayD::from_elem(IxDyn(&[]), value))
    }

    /// Records a leaf without data. Its `shape` fails with `Uninitialized`
    /// until [`GradArray::initialize`] is called.
    pub fn placeholder(&self) -> GradArray {
        let id = self.write().push_array(ArrayData::placeholder());
        GradArray::from_parts(self.clone(), id)
    }

    pub fn num_arrays(&self) -> usize {
        self.read().arrays.len()
    }

    pub fn num_nodes(&self) -> usize {
        self.read().nodes.len()
    }

    /// Name of the operation recorded under `node`, if it exists.
    pub fn op_name(&self, node: NodeId) -> Option<&'static str> {
        self.read().nodes.get(node.0).map(|n| n.op().name())
    }

    /// Records an operation node and the array it produced.
    pub(crate) fn record(
        &self,
        data: ArrayD<f64>,
        grad: Option<ArrayD<f64>>,
        op: GradOp,
        inputs: Vec<NodeInput>,
    ) -> GradArray {
        let id = {
            let mut inner = self.write();
            let node = inner.push_node(Node::new(op, inputs));
            inner.push_array(ArrayData::produced(data, grad, node))
        };
        GradArray::from_parts(self.clone(), id)
    }

    pub(crate) fn read(&self) -> Ref<'_, TapeInner> {
        self.inner.borrow()
    }

    pub(crate) fn write(&self) -> RefMut<'_, TapeInner> {
        self.inner.borrow_mut()
    }

    pub(crate) fn same_tape(&self, other: &Tape) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
