// Read-only queries over the ancestry of a node.

use crate::autograd::graph::NodeId;
use crate::node::{Node, NodeType};
use std::collections::{HashMap, HashSet};

/// Visits `root` and every ancestor reachable along `parents` exactly once,
/// in depth-first pre-order (a node before its parents, parents left to right).
fn visit_ancestry<F>(root: &Node, mut visit: F)
where
    F: FnMut(&Node),
{
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut stack = vec![root.clone()];
    while let Some(node) = stack.pop() {
        if !visited.insert(node.id()) {
            continue;
        }
        visit(&node);
        stack.extend(node.parents().into_iter().rev());
    }
}

/// Collects every distinct `Parameter` node in the ancestry of `root`,
/// `root` included, in traversal order.
pub fn get_parameters(root: &Node) -> Vec<Node> {
    let mut params = Vec::new();
    visit_ancestry(root, |node| {
        if node.node_type() == NodeType::Parameter {
            params.push(node.clone());
        }
    });
    log::trace!("Found {} parameter(s) under node {}", params.len(), root.id());
    params
}

/// Counts the distinct nodes of each type in the ancestry of `root`,
/// `root` included. All three types are present in the result.
pub fn count_by_type(root: &Node) -> HashMap<NodeType, usize> {
    let mut counts: HashMap<NodeType, usize> = [
        (NodeType::Input, 0),
        (NodeType::Parameter, 0),
        (NodeType::Intermediate, 0),
    ]
    .into_iter()
    .collect();
    visit_ancestry(root, |node| {
        *counts.entry(node.node_type()).or_insert(0) += 1;
    });
    counts
}

#[cfg(test)]
#[path = "introspection_test.rs"]
mod tests;
