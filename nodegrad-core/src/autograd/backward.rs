use crate::array::{ones_like, NdArray};
use crate::autograd::graph::NodeId;
use crate::error::NodeGradError;
use crate::node::{Node, NodeType};
use std::collections::HashSet;
use std::rc::Rc;

/// Options for a backward pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackwardOptions {
    /// Keep the gradients of intermediate nodes after they have been
    /// propagated. By default only leaves and the output retain gradients.
    pub keep_grads: bool,
}

/// Builds a topological order of the gradient-bearing part of the graph
/// reachable from `root` along `parents`.
///
/// Each node appears after all of its parents (post-order DFS); traversing the
/// result in reverse visits every node before any of its parents. Nodes that do
/// not require gradients are skipped together with their ancestry. The
/// traversal uses an explicit stack so that long chains do not exhaust the call
/// stack.
pub(crate) fn build_topo(root: &Node) -> Vec<Node> {
    let mut sorted = Vec::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut stack: Vec<(Node, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted.push(node);
            continue;
        }
        let guard = node.read_data();
        if !guard.requires_grad || !visited.insert(guard.id) {
            continue;
        }
        let parents = guard.parents.clone();
        drop(guard);

        stack.push((node, true));
        for parent in parents.into_iter().rev() {
            stack.push((parent, false));
        }
    }
    sorted
}

/// Performs the backward pass starting from `output`.
///
/// 1. Reclaims stale nodes in the output's graph.
/// 2. Seeds `output.grad` with `gradient`, or with ones when `gradient` is
///    `None` and the output holds a single element.
/// 3. Walks the reverse topological order, calling each node's `grad_fn` and
///    accumulating the returned gradients into every parent that requires them.
///
/// Gradients are never reset implicitly: repeated passes keep adding into the
/// existing gradient slots of leaves. Unless `options.keep_grads` is set, the
/// gradient of each intermediate node other than `output` is dropped once it
/// has been propagated.
///
/// # Errors
/// * `GradientNotRequired` if `output` does not require gradients.
/// * `NonScalarImplicitGradient` if `gradient` is `None` and `output` has more
///   than one element.
/// * `ShapeMismatch` if `gradient` does not have the output's shape.
/// * Any error returned by a gradient function or by accumulation.
pub fn backward(
    output: &Node,
    gradient: Option<NdArray>,
    options: BackwardOptions,
) -> Result<(), NodeGradError> {
    output.graph().clear_stale_nodes();

    if !output.requires_grad() {
        return Err(NodeGradError::GradientNotRequired);
    }

    let seed = match gradient {
        Some(g) => {
            let shape = output.shape();
            if g.shape() != shape.as_slice() {
                return Err(NodeGradError::ShapeMismatch {
                    expected: shape,
                    actual: g.shape().to_vec(),
                    operation: "backward".to_string(),
                });
            }
            g
        }
        None => {
            let data = output.data();
            if data.numel() != 1 {
                return Err(NodeGradError::NonScalarImplicitGradient {
                    shape: data.shape().to_vec(),
                });
            }
            ones_like(&data)
        }
    };

    let sorted = build_topo(output);
    log::debug!(
        "Backward from node {} over {} node(s), keep_grads={}",
        output.id(),
        sorted.len(),
        options.keep_grads
    );

    output.write_data().grad = Some(seed);

    for node in sorted.iter().rev() {
        let (grad_fn, grad) = {
            let guard = node.read_data();
            match (&guard.grad_fn, &guard.grad) {
                (Some(op), Some(g)) => (Rc::clone(op), g.clone()),
                _ => continue,
            }
        };

        log::trace!("Node {}: {}", node.id(), grad_fn.name());
        let parent_grads = grad_fn.backward(node, &grad)?;
        let parents = node.parents();
        if parent_grads.len() != parents.len() {
            log::warn!(
                "{} returned {} gradient(s) for {} parent(s) on node {}",
                grad_fn.name(),
                parent_grads.len(),
                parents.len(),
                node.id()
            );
        }

        for (parent, parent_grad) in parents.iter().zip(parent_grads) {
            if parent.requires_grad() {
                parent.acc_grad(parent_grad)?;
            }
        }

        if !options.keep_grads && node.node_type() == NodeType::Intermediate && !node.ptr_eq(output) {
            node.zero_grad();
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
