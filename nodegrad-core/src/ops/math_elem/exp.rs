use crate::array::NdArray;
use crate::autograd::BackwardOp;
use crate::error::NodeGradError;
use crate::node::Node;
use std::rc::Rc;

/// Backward pass for `exp(a)`.
///
/// The derivative of `exp` is `exp` itself, so the node's own value is reused:
/// `grad_a = g * exp(a)`.
#[derive(Debug)]
struct ExpBackward;

impl BackwardOp for ExpBackward {
    fn name(&self) -> &'static str {
        "ExpBackward"
    }

    fn backward(&self, node: &Node, grad_output: &NdArray) -> Result<Vec<NdArray>, NodeGradError> {
        let out = node.data();
        Ok(vec![grad_output.mul(&out)?])
    }
}

/// Elementwise natural exponential.
pub fn exp_op(a: &Node) -> Result<Node, NodeGradError> {
    let data = a.data().map(f32::exp);
    a.graph()
        .create_node(data, Rc::new(ExpBackward), &[a.clone()], vec![])
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
