use crate::array::NdArray;
use crate::autograd::BackwardOp;
use crate::error::NodeGradError;
use crate::node::Node;
use crate::ops::parent_data;
use std::rc::Rc;

/// Backward pass for `|a|`: `grad_a = g * sign(a)`, with `sign(0) = 0`.
#[derive(Debug)]
struct AbsBackward;

impl BackwardOp for AbsBackward {
    fn name(&self) -> &'static str {
        "AbsBackward"
    }

    fn backward(&self, node: &Node, grad_output: &NdArray) -> Result<Vec<NdArray>, NodeGradError> {
        let a = parent_data(node, 0, self.name())?;
        let sign = a.map(|x| {
            if x > 0.0 {
                1.0
            } else if x < 0.0 {
                -1.0
            } else {
                0.0
            }
        });
        Ok(vec![grad_output.mul(&sign)?])
    }
}

/// Elementwise absolute value.
pub fn abs_op(a: &Node) -> Result<Node, NodeGradError> {
    let data = a.data().map(f32::abs);
    a.graph()
        .create_node(data, Rc::new(AbsBackward), &[a.clone()], vec![])
}

#[cfg(test)]
#[path = "abs_test.rs"]
mod tests;
