use crate::array::NdArray;
use crate::autograd::BackwardOp;
use crate::error::NodeGradError;
use crate::node::{ExtraValue, Node};
use std::rc::Rc;

/// Backward pass for reshape: the gradient is reshaped back to the shape
/// stored under `"original_shape"`.
#[derive(Debug)]
struct ReshapeBackward;

impl BackwardOp for ReshapeBackward {
    fn name(&self) -> &'static str {
        "ReshapeBackward"
    }

    fn backward(&self, node: &Node, grad_output: &NdArray) -> Result<Vec<NdArray>, NodeGradError> {
        let original_shape = node.extra_shape("original_shape", self.name())?;
        Ok(vec![grad_output.reshape(&original_shape)?])
    }
}

/// Returns a node with the elements of `a` under `new_shape`.
///
/// # Errors
/// Returns `NodeGradError::SizeMismatch` if `new_shape` describes a different
/// number of elements.
pub fn reshape_op(a: &Node, new_shape: &[usize]) -> Result<Node, NodeGradError> {
    let (data, original_shape) = {
        let input = a.data();
        (input.reshape(new_shape)?, input.shape().to_vec())
    };
    a.graph().create_node(
        data,
        Rc::new(ReshapeBackward),
        &[a.clone()],
        vec![("original_shape", ExtraValue::Shape(original_shape))],
    )
}

#[cfg(test)]
#[path = "reshape_test.rs"]
mod tests;
