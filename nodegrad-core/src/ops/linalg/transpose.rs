use crate::array::NdArray;
use crate::autograd::BackwardOp;
use crate::error::NodeGradError;
use crate::node::Node;
use std::rc::Rc;

const TRANSPOSE_BACKWARD: &str = "TransposeBackward";

/// Backward pass for a full-axis transpose: transposing the gradient again
/// restores the input's layout.
#[derive(Debug)]
struct TransposeBackward;

impl BackwardOp for TransposeBackward {
    fn name(&self) -> &'static str {
        TRANSPOSE_BACKWARD
    }

    fn backward(&self, _node: &Node, grad_output: &NdArray) -> Result<Vec<NdArray>, NodeGradError> {
        Ok(vec![grad_output.transpose()])
    }
}

fn is_single_transpose(node: &Node) -> bool {
    let guard = node.read_data();
    guard.parents.len() == 1
        && guard
            .grad_fn
            .as_ref()
            .map_or(false, |op| op.name() == TRANSPOSE_BACKWARD)
}

/// Reverses all axes of `a`.
///
/// If `a` is itself the transpose of a single parent, that parent is returned
/// unchanged and `a` is marked stale: it is unlinked from the graph at the
/// next reclamation.
pub fn transpose_op(a: &Node) -> Result<Node, NodeGradError> {
    if is_single_transpose(a) {
        if let Some(original) = a.parent(0) {
            log::trace!("Double transpose of node {} recovered node {}", a.id(), original.id());
            a.mark_stale();
            return Ok(original);
        }
    }
    let data = a.data().transpose();
    a.graph()
        .create_node(data, Rc::new(TransposeBackward), &[a.clone()], vec![])
}

#[cfg(test)]
#[path = "transpose_test.rs"]
mod tests;
