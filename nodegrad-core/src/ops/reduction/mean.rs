use crate::array::NdArray;
use crate::autograd::BackwardOp;
use crate::error::NodeGradError;
use crate::node::{ExtraValue, Node};
use crate::ops::reduction::expand_reduced_grad;
use std::rc::Rc;

/// Backward pass for `mean`: like `sum`, scaled by the reciprocal of the
/// number of elements averaged.
#[derive(Debug)]
struct MeanBackward;

impl BackwardOp for MeanBackward {
    fn name(&self) -> &'static str {
        "MeanBackward"
    }

    fn backward(&self, node: &Node, grad_output: &NdArray) -> Result<Vec<NdArray>, NodeGradError> {
        let input_shape = node.extra_shape("input_shape", self.name())?;
        let axis = node.extra_axis("axis", self.name())?;
        let count = reduced_count(&input_shape, axis);
        let expanded = expand_reduced_grad(grad_output, &input_shape, axis)?;
        Ok(vec![expanded.mul_scalar(1.0 / count as f32)])
    }
}

fn reduced_count(shape: &[usize], axis: Option<usize>) -> usize {
    match axis {
        None => shape.iter().product(),
        Some(axis) => shape.get(axis).copied().unwrap_or(1),
    }
}

/// Averages the elements of `a`, over everything or along one axis.
///
/// Averaging over zero elements yields NaN.
///
/// # Errors
/// Returns `NodeGradError::AxisOutOfBounds` if `axis` is not an axis of `a`.
pub fn mean_op(a: &Node, axis: Option<usize>) -> Result<Node, NodeGradError> {
    let (data, input_shape) = {
        let input = a.data();
        let summed = match axis {
            None => input.sum_all(),
            Some(axis) => input.sum_axis(axis)?,
        };
        let count = reduced_count(input.shape(), axis);
        (summed.mul_scalar(1.0 / count as f32), input.shape().to_vec())
    };

    let mut extra = vec![("input_shape", ExtraValue::Shape(input_shape))];
    if let Some(axis) = axis {
        extra.push(("axis", ExtraValue::Axis(axis)));
    }
    a.graph()
        .create_node(data, Rc::new(MeanBackward), &[a.clone()], extra)
}

#[cfg(test)]
#[path = "mean_test.rs"]
mod tests;
