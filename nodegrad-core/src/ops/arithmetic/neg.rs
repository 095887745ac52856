use crate::array::NdArray;
use crate::autograd::BackwardOp;
use crate::error::NodeGradError;
use crate::node::Node;
use std::rc::Rc;

#[derive(Debug)]
struct NegBackward;

impl BackwardOp for NegBackward {
    fn name(&self) -> &'static str {
        "NegBackward"
    }

    fn backward(&self, _node: &Node, grad_output: &NdArray) -> Result<Vec<NdArray>, NodeGradError> {
        Ok(vec![grad_output.neg()])
    }
}

/// Elementwise negation `-a`.
pub fn neg_op(a: &Node) -> Result<Node, NodeGradError> {
    let data = a.data().neg();
    a.graph()
        .create_node(data, Rc::new(NegBackward), &[a.clone()], vec![])
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
