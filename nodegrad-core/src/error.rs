use thiserror::Error;

/// Custom error type for the nodegrad engine.
///
/// Every precondition is checked before a node is built or a link is made, so a
/// returned error never leaves a half-constructed node behind.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum NodeGradError {
    #[error("Shape mismatch for {operation}: {expected:?} vs {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Matrix multiplication requires at least 2D operands, got {lhs:?} @ {rhs:?}")]
    DimensionError { lhs: Vec<usize>, rhs: Vec<usize> },

    #[error("Matrix shapes not aligned: {lhs:?} @ {rhs:?}")]
    AlignmentError { lhs: Vec<usize>, rhs: Vec<usize> },

    #[error("Right operand of {operation} must be a {expected}")]
    TypeMismatch {
        operation: String,
        expected: String,
    },

    #[error("New shape {to:?} must have the same number of elements as the original shape {from:?}")]
    SizeMismatch { from: Vec<usize>, to: Vec<usize> },

    #[error("Node does not require gradients")]
    GradientNotRequired,

    #[error("Gradient can only be implicitly created for scalar outputs, got shape {shape:?}")]
    NonScalarImplicitGradient { shape: Vec<usize> },

    #[error("Array creation error: data length {data_len} does not match shape {shape:?}")]
    ArrayCreation { data_len: usize, shape: Vec<usize> },

    #[error("Axis {axis} is out of bounds for rank {rank}")]
    AxisOutOfBounds { axis: usize, rank: usize },

    #[error("Operands of {operation} belong to different graphs")]
    GraphMismatch { operation: String },

    #[error("Shape mismatch during gradient accumulation: expected {expected:?}, got {actual:?}")]
    GradientAccumulationShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("{op} expected metadata '{key}' on its node")]
    MissingMetadata { key: String, op: String },

    #[error("{op} expected a parent at index {index}")]
    MissingParent { index: usize, op: String },
}
