// Main modules of the crate
pub mod array_data;
pub mod autograd;
pub mod config;
pub mod grad_array;
pub mod ops;
pub mod tape;
pub mod utils;

pub mod error;

// Re-export the main types so they are reachable as `gradarray_core::GradArray`, etc.
pub use config::{GradPolicy, TapeConfig};
pub use error::GradArrayError;
pub use grad_array::{GradArray, Operand};
pub use ops::{expand, l2_norm_square, sum};
pub use tape::{ArrayId, NodeId, Tape};

// Re-export the storage crate so callers build seeds and inputs with the same version.
pub use ndarray;
