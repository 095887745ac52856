//! Reductions over all elements or along a single axis.

pub mod mean;
pub mod sum;

pub use mean::mean_op;
pub use sum::sum_op;

use crate::array::NdArray;
use crate::error::NodeGradError;

/// Spreads a reduced gradient back over `input_shape`.
///
/// With `axis = None` the gradient is a single element broadcast to every
/// position; otherwise the removed axis is re-inserted and repeated.
pub(crate) fn expand_reduced_grad(
    grad_output: &NdArray,
    input_shape: &[usize],
    axis: Option<usize>,
) -> Result<NdArray, NodeGradError> {
    match axis {
        None => grad_output.broadcast_scalar(input_shape),
        Some(axis) => {
            let size = *input_shape.get(axis).ok_or(NodeGradError::AxisOutOfBounds {
                axis,
                rank: input_shape.len(),
            })?;
            grad_output.expand_axis(axis, size)
        }
    }
}
