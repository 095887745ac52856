// src/node/autograd_methods.rs

use crate::array::NdArray;
use crate::autograd::backward::{backward, BackwardOptions};
use crate::autograd::BackwardOp;
use crate::error::NodeGradError;
use crate::node::Node;
use std::rc::Rc;

impl Node {
    /// Checks if this node requires gradient computation.
    pub fn requires_grad(&self) -> bool {
        self.read_data().requires_grad
    }

    /// Returns a copy of the accumulated gradient, if any.
    pub fn grad(&self) -> Option<NdArray> {
        self.read_data().grad.clone()
    }

    /// Overwrites the gradient slot.
    ///
    /// # Errors
    /// Returns `NodeGradError::ShapeMismatch` if `grad` does not have the node's shape.
    pub fn set_grad(&self, grad: Option<NdArray>) -> Result<(), NodeGradError> {
        let mut guard = self.write_data();
        if let Some(g) = &grad {
            if g.shape != guard.data.shape {
                return Err(NodeGradError::ShapeMismatch {
                    expected: guard.data.shape.clone(),
                    actual: g.shape.clone(),
                    operation: "set_grad".to_string(),
                });
            }
        }
        guard.grad = grad;
        Ok(())
    }

    /// Resets the gradient of this node to None.
    pub fn zero_grad(&self) {
        self.write_data().grad = None;
    }

    /// Returns the gradient function that produced this node.
    pub fn grad_fn(&self) -> Option<Rc<dyn BackwardOp>> {
        self.read_data().grad_fn.clone()
    }

    /// A node without a gradient function is a leaf of the graph.
    pub fn is_leaf(&self) -> bool {
        self.read_data().grad_fn.is_none()
    }

    /// Accumulates `grad_to_add` into the gradient slot.
    ///
    /// Contributions arriving from different paths are summed; an empty slot
    /// simply takes the contribution.
    pub(crate) fn acc_grad(&self, grad_to_add: NdArray) -> Result<(), NodeGradError> {
        let mut guard = self.write_data();
        if grad_to_add.shape != guard.data.shape {
            return Err(NodeGradError::GradientAccumulationShapeMismatch {
                expected: guard.data.shape.clone(),
                actual: grad_to_add.shape,
            });
        }
        let summed = match guard.grad.take() {
            Some(existing) => existing.add(&grad_to_add)?,
            None => grad_to_add,
        };
        guard.grad = Some(summed);
        Ok(())
    }

    /// Computes the gradients of this node w.r.t. every graph leaf that requires them.
    ///
    /// Gradients of intermediate nodes are released after use. See
    /// [`backward`](crate::autograd::backward::backward) for details.
    ///
    /// # Arguments
    /// * `gradient`: Seed gradient for this node. If `None`, the node must hold a
    ///   single element and the seed is one.
    pub fn backward(&self, gradient: Option<NdArray>) -> Result<(), NodeGradError> {
        backward(self, gradient, BackwardOptions::default())
    }

    /// Like [`Node::backward`], with explicit options.
    pub fn backward_with_options(
        &self,
        gradient: Option<NdArray>,
        options: BackwardOptions,
    ) -> Result<(), NodeGradError> {
        backward(self, gradient, options)
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
