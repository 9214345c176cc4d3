use thiserror::Error;

/// Custom error type for the gradarray crates.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum GradArrayError {
    #[error("Array data is not initialized")]
    Uninitialized,

    #[error("Array data is already initialized and cannot be replaced")]
    AlreadyInitialized,

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Unsupported operand for {operation}: {operand}")]
    UnsupportedOperand { operation: String, operand: String },

    #[error("Rank error in {operation}: {reason} (got rank {rank})")]
    RankError {
        operation: String,
        rank: usize,
        reason: String,
    },

    #[error("Axis {axis} is out of bounds for array of rank {rank}")]
    AxisOutOfBounds { axis: usize, rank: usize },

    #[error("Division by zero error")]
    DivisionByZero,

    #[error("Arrays recorded on different tapes cannot be combined in {operation}")]
    TapeMismatch { operation: String },

    #[error("Backward called on non-scalar array without explicit gradient.")]
    BackwardNonScalar,

    #[error("Shape mismatch during gradient accumulation: expected {expected:?}, got {actual:?}")]
    GradientShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("No gradient available for {operation}")]
    MissingGradient { operation: String },

    #[error("Internal error: {0}")]
    InternalError(String),
}
