pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::{GradOp, Node, NodeInput};
