use crate::array::NdArray;
use crate::autograd::BackwardOp;
use crate::error::NodeGradError;
use crate::node::{ExtraValue, Node};
use std::rc::Rc;

/// Backward pass for `a + b`: the gradient flows unchanged to both operands.
#[derive(Debug)]
struct AddBackward;

impl BackwardOp for AddBackward {
    fn name(&self) -> &'static str {
        "AddBackward"
    }

    fn backward(&self, _node: &Node, grad_output: &NdArray) -> Result<Vec<NdArray>, NodeGradError> {
        Ok(vec![grad_output.clone(), grad_output.clone()])
    }
}

/// Backward pass for `a + c` with a scalar `c`.
#[derive(Debug)]
struct AddScalarBackward;

impl BackwardOp for AddScalarBackward {
    fn name(&self) -> &'static str {
        "AddScalarBackward"
    }

    fn backward(&self, _node: &Node, grad_output: &NdArray) -> Result<Vec<NdArray>, NodeGradError> {
        Ok(vec![grad_output.clone()])
    }
}

/// Elementwise addition of two nodes of equal shape.
///
/// # Errors
/// * `NodeGradError::ShapeMismatch` if the shapes differ.
/// * `NodeGradError::GraphMismatch` if the nodes belong to different graphs.
pub fn add_op(a: &Node, b: &Node) -> Result<Node, NodeGradError> {
    let data = a.data().add(&b.data())?;
    a.graph()
        .create_node(data, Rc::new(AddBackward), &[a.clone(), b.clone()], vec![])
}

/// Adds `value` to every element of `a`.
pub fn add_scalar_op(a: &Node, value: f32) -> Result<Node, NodeGradError> {
    let data = a.data().add_scalar(value);
    a.graph().create_node(
        data,
        Rc::new(AddScalarBackward),
        &[a.clone()],
        vec![("scalar_value", ExtraValue::Scalar(value))],
    )
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
