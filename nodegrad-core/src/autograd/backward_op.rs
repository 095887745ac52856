use crate::array::NdArray;
use crate::error::NodeGradError;
use crate::node::Node;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable operation.
///
/// Every derived node stores one `BackwardOp` as its `grad_fn`. During
/// `backward()` the engine calls it once per node, after all contributions to
/// the node's gradient have been accumulated.
///
/// Implementations are usually zero-sized: everything they need is read from
/// the node itself, i.e. its value, its parents' values and the auxiliary
/// metadata stored on it at construction (see [`Node::extra`]). Operation
/// libraries built on top of the core implement this trait for their own ops
/// and build their results through [`Graph::create_node`](crate::autograd::Graph::create_node).
pub trait BackwardOp: Debug {
    /// Name reported in debug output, e.g. `"AddBackward"`.
    fn name(&self) -> &'static str;

    /// Computes the gradient for each parent of `node` given the gradient
    /// flowing into `node` (dL/dnode).
    ///
    /// # Returns
    /// * `Ok(Vec<NdArray>)`: one gradient per entry of `node.parents()`, in the
    ///   same order, each with its parent's shape.
    /// * `Err(NodeGradError)`: if the node lacks a parent or metadata the
    ///   operation relies on.
    fn backward(&self, node: &Node, grad_output: &NdArray) -> Result<Vec<NdArray>, NodeGradError>;
}
