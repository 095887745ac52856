use crate::array::NdArray;
use crate::autograd::BackwardOp;
use crate::error::NodeGradError;
use crate::node::{ExtraValue, Node};
use std::rc::Rc;

/// Backward pass for `a - b`: `grad_a = g`, `grad_b = -g`.
#[derive(Debug)]
struct SubBackward;

impl BackwardOp for SubBackward {
    fn name(&self) -> &'static str {
        "SubBackward"
    }

    fn backward(&self, _node: &Node, grad_output: &NdArray) -> Result<Vec<NdArray>, NodeGradError> {
        Ok(vec![grad_output.clone(), grad_output.neg()])
    }
}

#[derive(Debug)]
struct SubScalarBackward;

impl BackwardOp for SubScalarBackward {
    fn name(&self) -> &'static str {
        "SubScalarBackward"
    }

    fn backward(&self, _node: &Node, grad_output: &NdArray) -> Result<Vec<NdArray>, NodeGradError> {
        Ok(vec![grad_output.clone()])
    }
}

/// Elementwise subtraction `a - b` of two nodes of equal shape.
///
/// # Errors
/// * `NodeGradError::ShapeMismatch` if the shapes differ.
/// * `NodeGradError::GraphMismatch` if the nodes belong to different graphs.
pub fn sub_op(a: &Node, b: &Node) -> Result<Node, NodeGradError> {
    let data = a.data().sub(&b.data())?;
    a.graph()
        .create_node(data, Rc::new(SubBackward), &[a.clone(), b.clone()], vec![])
}

/// Subtracts `value` from every element of `a`.
pub fn sub_scalar_op(a: &Node, value: f32) -> Result<Node, NodeGradError> {
    let data = a.data().add_scalar(-value);
    a.graph().create_node(
        data,
        Rc::new(SubScalarBackward),
        &[a.clone()],
        vec![("scalar_value", ExtraValue::Scalar(value))],
    )
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
