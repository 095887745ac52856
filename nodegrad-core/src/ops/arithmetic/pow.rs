use crate::array::NdArray;
use crate::autograd::BackwardOp;
use crate::error::NodeGradError;
use crate::node::{ExtraValue, Node};
use crate::ops::parent_data;
use std::rc::Rc;

/// Backward pass for `a ** p`.
///
/// `d(a^p)/da = p * a^(p-1)`, with `p` read from the `"power"` metadata.
#[derive(Debug)]
struct PowBackward;

impl BackwardOp for PowBackward {
    fn name(&self) -> &'static str {
        "PowBackward"
    }

    fn backward(&self, node: &Node, grad_output: &NdArray) -> Result<Vec<NdArray>, NodeGradError> {
        let power = node.extra_scalar("power", self.name())?;
        let a = parent_data(node, 0, self.name())?;
        let local = a.map(|x| power * x.powf(power - 1.0));
        Ok(vec![grad_output.mul(&local)?])
    }
}

/// Raises every element of `a` to `power`.
///
/// Non-integer powers of negative elements yield NaN, as `f32::powf` does.
pub fn pow_op(a: &Node, power: f32) -> Result<Node, NodeGradError> {
    let data = a.data().powf(power);
    a.graph().create_node(
        data,
        Rc::new(PowBackward),
        &[a.clone()],
        vec![("power", ExtraValue::Scalar(power))],
    )
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
