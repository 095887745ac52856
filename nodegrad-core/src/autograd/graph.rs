use crate::array::NdArray;
use crate::autograd::BackwardOp;
use crate::error::NodeGradError;
use crate::node::{ExtraValue, Node, NodeData, NodeType};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

/// Unique identifier of a node, assigned in creation order.
pub type NodeId = u64;

/// Shared state behind a [`Graph`] handle.
pub(crate) struct GraphState {
    next_id: Cell<NodeId>,
    /// Non-owning catalog of nodes created in this graph, keyed by id.
    registry: RefCell<BTreeMap<NodeId, Weak<RefCell<NodeData>>>>,
}

/// A computation-graph session.
///
/// Owns the monotonically increasing id counter and a registry of weak
/// references to every node created in it. The registry never keeps a node
/// alive: a node lives as long as a caller or a dependent node holds it.
///
/// `Graph` is a cheap-clone handle; every node keeps one to the graph it was
/// created in so that derived nodes land in the same session.
#[derive(Clone)]
pub struct Graph {
    pub(crate) state: Rc<GraphState>,
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            state: Rc::new(GraphState {
                next_id: Cell::new(0),
                registry: RefCell::new(BTreeMap::new()),
            }),
        }
    }

    pub(crate) fn next_id(&self) -> NodeId {
        let id = self.state.next_id.get();
        self.state.next_id.set(id + 1);
        id
    }

    pub(crate) fn register(&self, node: &Node) {
        let id = node.id();
        self.state
            .registry
            .borrow_mut()
            .insert(id, Rc::downgrade(&node.data));
    }

    /// Whether `other` is a handle to this same session.
    pub fn same_graph(&self, other: &Graph) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Creates a leaf (or hand-built intermediate) node holding `data`.
    pub fn node(&self, data: NdArray, node_type: NodeType) -> Node {
        Node::new(self, data, node_type)
    }

    /// Creates an `Input` leaf from flattened data and a shape.
    pub fn input(&self, data: Vec<f32>, shape: Vec<usize>) -> Result<Node, NodeGradError> {
        Ok(self.node(NdArray::new(data, shape)?, NodeType::Input))
    }

    /// Creates a `Parameter` leaf from flattened data and a shape.
    pub fn parameter(&self, data: Vec<f32>, shape: Vec<usize>) -> Result<Node, NodeGradError> {
        Ok(self.node(NdArray::new(data, shape)?, NodeType::Parameter))
    }

    /// Builds a derived `Intermediate` node. This is the only way operations
    /// add nodes to the graph.
    ///
    /// The new node requires gradients iff any parent does. It is appended to
    /// each parent's children, and `extra` is stored verbatim for `grad_fn`.
    ///
    /// # Errors
    /// Returns `NodeGradError::GraphMismatch` if a parent belongs to another
    /// graph. Nothing is created or linked in that case.
    pub fn create_node(
        &self,
        data: NdArray,
        grad_fn: Rc<dyn BackwardOp>,
        parents: &[Node],
        extra: Vec<(&str, ExtraValue)>,
    ) -> Result<Node, NodeGradError> {
        if parents.iter().any(|p| !p.graph().same_graph(self)) {
            return Err(NodeGradError::GraphMismatch {
                operation: grad_fn.name().to_string(),
            });
        }

        let requires_grad = parents.iter().any(|p| p.requires_grad());
        let node = Node::new(self, data, NodeType::Intermediate);
        {
            let mut guard = node.write_data();
            guard.requires_grad = requires_grad;
            guard.grad_fn = Some(grad_fn);
            guard.parents = parents.to_vec();
            guard
                .extra
                .extend(extra.into_iter().map(|(k, v)| (k.to_string(), v)));
        }
        for parent in parents {
            parent.write_data().children.push(Rc::downgrade(&node.data));
        }
        Ok(node)
    }

    /// Unlinks every node marked stale and drops its registry entry.
    ///
    /// For each stale node: it is removed from its parents' children, removed
    /// from its children's parents, and its own links are cleared. Registry
    /// entries and back-references whose node has already been dropped are
    /// pruned as well. Idempotent; a no-op when nothing is stale.
    ///
    /// Runs automatically before every backward pass.
    ///
    /// # Returns
    /// The number of stale nodes reclaimed.
    pub fn clear_stale_nodes(&self) -> usize {
        let live: Vec<Node> = {
            let mut registry = self.state.registry.borrow_mut();
            registry.retain(|_, weak| weak.strong_count() > 0);
            let live = registry
                .values()
                .filter_map(Weak::upgrade)
                .map(|data| Node { data })
                .collect();
            live
        };

        let mut reclaimed = 0;
        for node in live.iter().filter(|n| n.is_stale()) {
            let (id, parents, children) = {
                let mut guard = node.write_data();
                let parents = std::mem::take(&mut guard.parents);
                let children = std::mem::take(&mut guard.children);
                (guard.id, parents, children)
            };
            let node_ptr = Rc::as_ptr(&node.data);

            for parent in &parents {
                parent
                    .write_data()
                    .children
                    .retain(|weak| !std::ptr::eq(weak.as_ptr(), node_ptr));
            }
            for child in children.iter().filter_map(Weak::upgrade) {
                child
                    .borrow_mut()
                    .parents
                    .retain(|p| !Rc::ptr_eq(&p.data, &node.data));
            }
            self.state.registry.borrow_mut().remove(&id);
            log::trace!("Reclaimed stale node {}", id);
            reclaimed += 1;
        }

        for node in &live {
            node.write_data()
                .children
                .retain(|weak| weak.strong_count() > 0);
        }

        if reclaimed > 0 {
            log::debug!("Reclaimed {} stale node(s)", reclaimed);
        }
        reclaimed
    }

    /// Number of registered nodes that are still alive.
    pub fn live_nodes(&self) -> usize {
        self.state
            .registry
            .borrow()
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    /// Whether a live node with `id` is registered in this graph.
    pub fn is_registered(&self, id: NodeId) -> bool {
        self.state
            .registry
            .borrow()
            .get(&id)
            .map_or(false, |weak| weak.strong_count() > 0)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph(next_id={}, registered={})",
            self.state.next_id.get(),
            self.state.registry.borrow().len()
        )
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
