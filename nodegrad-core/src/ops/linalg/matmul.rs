use crate::array::NdArray;
use crate::autograd::BackwardOp;
use crate::error::NodeGradError;
use crate::node::Node;
use crate::ops::parent_data;
use std::rc::Rc;

// --- MatmulBackward Definition ---

/// Backward pass for `C = A @ B`.
///
/// Holds no state: both operands are read back from the node's parents.
#[derive(Debug)]
struct MatmulBackward;

impl BackwardOp for MatmulBackward {
    fn name(&self) -> &'static str {
        "MatmulBackward"
    }

    /// Computes gradients for `C = A @ B` over the last two axes:
    /// * `dL/dA = dL/dC @ B^T`
    /// * `dL/dB = A^T @ dL/dC`
    ///
    /// When batch axes were broadcast in the forward pass, each gradient is
    /// summed back to its operand's shape.
    fn backward(&self, node: &Node, grad_output: &NdArray) -> Result<Vec<NdArray>, NodeGradError> {
        let a = parent_data(node, 0, self.name())?;
        let b = parent_data(node, 1, self.name())?;

        let grad_a = grad_output
            .matmul(&b.swap_last_two()?)?
            .sum_to_shape(a.shape())?;
        let grad_b = a
            .swap_last_two()?
            .matmul(grad_output)?
            .sum_to_shape(b.shape())?;
        Ok(vec![grad_a, grad_b])
    }
}

// --- matmul_op Implementation ---

/// Matrix product of two nodes over their last two axes.
///
/// `[.., M, K] @ [.., K, N] -> [.., M, N]`; leading batch axes are broadcast.
///
/// # Errors
/// * `NodeGradError::DimensionError` if either operand has fewer than 2 axes.
/// * `NodeGradError::AlignmentError` if the inner dimensions differ.
pub fn matmul_op(a: &Node, b: &Node) -> Result<Node, NodeGradError> {
    let data = a.data().matmul(&b.data())?;
    a.graph()
        .create_node(data, Rc::new(MatmulBackward), &[a.clone(), b.clone()], vec![])
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
