use crate::array::NdArray;
use crate::autograd::BackwardOp;
use crate::error::NodeGradError;
use crate::node::Node;
use crate::ops::parent_data;
use std::rc::Rc;

// --- LnBackward Definition ---

/// Backward pass for the natural logarithm `z = ln(a)`.
///
/// Using the chain rule with `dz/da = 1 / a`, the gradient is `g / a`.
#[derive(Debug)]
struct LnBackward;

impl BackwardOp for LnBackward {
    fn name(&self) -> &'static str {
        "LnBackward"
    }

    fn backward(&self, node: &Node, grad_output: &NdArray) -> Result<Vec<NdArray>, NodeGradError> {
        let a = parent_data(node, 0, self.name())?;
        Ok(vec![grad_output.div(&a)?])
    }
}

// --- log_op Implementation ---

/// Computes the elementwise natural logarithm.
///
/// # Domain Considerations
/// The logarithm is only defined for strictly positive numbers: zero maps to
/// `-inf` and negative elements to NaN, as with `f32::ln`. The gradient `1/x`
/// is likewise undefined at zero.
pub fn log_op(a: &Node) -> Result<Node, NodeGradError> {
    let data = a.data().map(f32::ln);
    a.graph()
        .create_node(data, Rc::new(LnBackward), &[a.clone()], vec![])
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
