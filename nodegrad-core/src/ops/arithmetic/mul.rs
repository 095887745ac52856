use crate::array::NdArray;
use crate::autograd::BackwardOp;
use crate::error::NodeGradError;
use crate::node::{ExtraValue, Node};
use crate::ops::parent_data;
use std::rc::Rc;

/// Backward pass for `a * b` (product rule): `grad_a = g * b`, `grad_b = g * a`.
#[derive(Debug)]
struct MulBackward;

impl BackwardOp for MulBackward {
    fn name(&self) -> &'static str {
        "MulBackward"
    }

    fn backward(&self, node: &Node, grad_output: &NdArray) -> Result<Vec<NdArray>, NodeGradError> {
        let a = parent_data(node, 0, self.name())?;
        let b = parent_data(node, 1, self.name())?;
        Ok(vec![grad_output.mul(&b)?, grad_output.mul(&a)?])
    }
}

/// Backward pass for `a * c` with a scalar `c` read from `"scalar_value"`.
#[derive(Debug)]
struct MulScalarBackward;

impl BackwardOp for MulScalarBackward {
    fn name(&self) -> &'static str {
        "MulScalarBackward"
    }

    fn backward(&self, node: &Node, grad_output: &NdArray) -> Result<Vec<NdArray>, NodeGradError> {
        let value = node.extra_scalar("scalar_value", self.name())?;
        Ok(vec![grad_output.mul_scalar(value)])
    }
}

/// Elementwise product of two nodes of equal shape.
///
/// # Errors
/// * `NodeGradError::ShapeMismatch` if the shapes differ.
/// * `NodeGradError::GraphMismatch` if the nodes belong to different graphs.
pub fn mul_op(a: &Node, b: &Node) -> Result<Node, NodeGradError> {
    let data = a.data().mul(&b.data())?;
    a.graph()
        .create_node(data, Rc::new(MulBackward), &[a.clone(), b.clone()], vec![])
}

/// Multiplies every element of `a` by `value`.
pub fn mul_scalar_op(a: &Node, value: f32) -> Result<Node, NodeGradError> {
    let data = a.data().mul_scalar(value);
    a.graph().create_node(
        data,
        Rc::new(MulScalarBackward),
        &[a.clone()],
        vec![("scalar_value", ExtraValue::Scalar(value))],
    )
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
