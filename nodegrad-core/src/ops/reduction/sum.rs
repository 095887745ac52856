use crate::array::NdArray;
use crate::autograd::BackwardOp;
use crate::error::NodeGradError;
use crate::node::{ExtraValue, Node};
use crate::ops::reduction::expand_reduced_grad;
use std::rc::Rc;

/// Backward pass for `sum`: every input element receives the gradient of the
/// sum it contributed to.
#[derive(Debug)]
struct SumBackward;

impl BackwardOp for SumBackward {
    fn name(&self) -> &'static str {
        "SumBackward"
    }

    fn backward(&self, node: &Node, grad_output: &NdArray) -> Result<Vec<NdArray>, NodeGradError> {
        let input_shape = node.extra_shape("input_shape", self.name())?;
        let axis = node.extra_axis("axis", self.name())?;
        Ok(vec![expand_reduced_grad(grad_output, &input_shape, axis)?])
    }
}

/// Sums the elements of `a`.
///
/// * `axis = None`: sums everything into a 0-d node.
/// * `axis = Some(k)`: sums along axis `k`, removing it from the shape.
///
/// # Errors
/// Returns `NodeGradError::AxisOutOfBounds` if `k` is not an axis of `a`.
pub fn sum_op(a: &Node, axis: Option<usize>) -> Result<Node, NodeGradError> {
    let (data, input_shape) = {
        let input = a.data();
        let data = match axis {
            None => input.sum_all(),
            Some(axis) => input.sum_axis(axis)?,
        };
        (data, input.shape().to_vec())
    };

    let mut extra = vec![("input_shape", ExtraValue::Shape(input_shape))];
    if let Some(axis) = axis {
        extra.push(("axis", ExtraValue::Axis(axis)));
    }
    a.graph()
        .create_node(data, Rc::new(SumBackward), &[a.clone()], extra)
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
