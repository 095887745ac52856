// Operation surface exposed on the node handle. Each method validates its
// operands and builds the result through the graph builder.

use crate::error::NodeGradError;
use crate::node::{Node, Operand};
use crate::ops::arithmetic::{
    add_op, add_scalar_op, mul_op, mul_scalar_op, neg_op, pow_op, sub_op, sub_scalar_op,
};
use crate::ops::linalg::{matmul_op, transpose_op};
use crate::ops::math_elem::{abs_op, exp_op, log_op};
use crate::ops::reduction::{mean_op, sum_op};
use crate::ops::view::reshape_op;

impl Node {
    /// Elementwise `self + other`. Node operands must have the same shape.
    pub fn add(&self, other: impl Into<Operand>) -> Result<Node, NodeGradError> {
        match other.into() {
            Operand::Node(rhs) => add_op(self, &rhs),
            Operand::Scalar(value) => add_scalar_op(self, value),
        }
    }

    /// Elementwise `self - other`. Node operands must have the same shape.
    pub fn sub(&self, other: impl Into<Operand>) -> Result<Node, NodeGradError> {
        match other.into() {
            Operand::Node(rhs) => sub_op(self, &rhs),
            Operand::Scalar(value) => sub_scalar_op(self, value),
        }
    }

    /// Elementwise `self * other`. Node operands must have the same shape.
    pub fn mul(&self, other: impl Into<Operand>) -> Result<Node, NodeGradError> {
        match other.into() {
            Operand::Node(rhs) => mul_op(self, &rhs),
            Operand::Scalar(value) => mul_scalar_op(self, value),
        }
    }

    /// Matrix product over the last two axes.
    ///
    /// # Errors
    /// * `TypeMismatch` if `other` is a scalar.
    /// * `DimensionError` / `AlignmentError` for incompatible shapes.
    pub fn matmul(&self, other: impl Into<Operand>) -> Result<Node, NodeGradError> {
        match other.into() {
            Operand::Node(rhs) => matmul_op(self, &rhs),
            Operand::Scalar(_) => Err(NodeGradError::TypeMismatch {
                operation: "matrix multiplication".to_string(),
                expected: "Node".to_string(),
            }),
        }
    }

    /// Elementwise `self ** exponent`.
    pub fn pow(&self, exponent: f32) -> Result<Node, NodeGradError> {
        pow_op(self, exponent)
    }

    pub fn neg(&self) -> Result<Node, NodeGradError> {
        neg_op(self)
    }

    /// Same elements under `new_shape`; the element count must be preserved.
    pub fn reshape(&self, new_shape: &[usize]) -> Result<Node, NodeGradError> {
        reshape_op(self, new_shape)
    }

    /// Reverses all axes.
    ///
    /// Transposing a node that is itself a single-parent transpose returns that
    /// parent and marks this node stale; it is unlinked at the next reclamation.
    pub fn t(&self) -> Result<Node, NodeGradError> {
        transpose_op(self)
    }

    /// Sum over all elements (`None`) or along one axis.
    pub fn sum(&self, axis: Option<usize>) -> Result<Node, NodeGradError> {
        sum_op(self, axis)
    }

    /// Mean over all elements (`None`) or along one axis.
    pub fn mean(&self, axis: Option<usize>) -> Result<Node, NodeGradError> {
        mean_op(self, axis)
    }

    pub fn abs(&self) -> Result<Node, NodeGradError> {
        abs_op(self)
    }

    pub fn exp(&self) -> Result<Node, NodeGradError> {
        exp_op(self)
    }

    /// Natural logarithm.
    pub fn log(&self) -> Result<Node, NodeGradError> {
        log_op(self)
    }
}
