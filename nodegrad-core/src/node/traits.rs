// src/node/traits.rs

use crate::node::Node;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

impl Clone for Node {
    /// Shallow clone: the new handle aliases the same node.
    fn clone(&self) -> Self {
        Node {
            data: Rc::clone(&self.data),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.try_borrow() {
            Ok(guard) => write!(
                f,
                "Node(id={}, shape={:?}, node_type={:?}, grad_fn={:?}, requires_grad={})",
                guard.id,
                guard.data.shape,
                guard.node_type,
                guard.grad_fn.as_ref().map(|op| op.name()),
                guard.requires_grad
            ),
            Err(_) => write!(f, "Node(<mutably borrowed>)"),
        }
    }
}

/// Nodes compare by identity, not by value: two nodes holding equal data are
/// still different graph vertices.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}
