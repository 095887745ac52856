// src/node/node_data.rs

use crate::array::NdArray;
use crate::autograd::graph::{Graph, NodeId};
use crate::autograd::BackwardOp;
use crate::node::{ExtraValue, Node, NodeType};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// Internal storage and metadata for a Node.
///
/// It is wrapped in `Rc<RefCell<NodeData>>` by the `Node` handle.
pub struct NodeData {
    /// Process-unique id, assigned from the owning graph's counter.
    pub(crate) id: NodeId,
    /// The node's value. Never mutated after construction.
    pub(crate) data: NdArray,
    pub(crate) node_type: NodeType,
    /// Fixed at construction.
    pub(crate) requires_grad: bool,
    /// Accumulated gradient, same shape as `data`.
    pub(crate) grad: Option<NdArray>,
    /// Leaves have `grad_fn = None`.
    pub(crate) grad_fn: Option<Rc<dyn BackwardOp>>,
    /// Owning links to the operands this node was derived from.
    pub(crate) parents: Vec<Node>,
    /// Non-owning back-references, only used by reclamation.
    pub(crate) children: Vec<Weak<RefCell<NodeData>>>,
    pub(crate) extra: HashMap<String, ExtraValue>,
    pub(crate) stale: bool,
    pub(crate) version: u64,
    pub(crate) graph: Graph,
}

impl NodeData {
    pub(crate) fn new(id: NodeId, data: NdArray, node_type: NodeType, graph: Graph) -> Self {
        NodeData {
            id,
            data,
            node_type,
            requires_grad: node_type == NodeType::Parameter,
            grad: None,
            grad_fn: None,
            parents: Vec::new(),
            children: Vec::new(),
            extra: HashMap::new(),
            stale: false,
            version: 0,
            graph,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn data(&self) -> &NdArray {
        &self.data
    }

    pub fn shape(&self) -> &[usize] {
        &self.data.shape
    }

    pub fn grad(&self) -> Option<&NdArray> {
        self.grad.as_ref()
    }

    pub fn requires_grad(&self) -> bool {
        self.requires_grad
    }

    pub fn parents(&self) -> &[Node] {
        &self.parents
    }
}

impl Drop for NodeData {
    // Releases long parent chains iteratively instead of recursing once per link.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.parents);
        while let Some(parent) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(parent.data) {
                let mut inner = cell.into_inner();
                pending.append(&mut inner.parents);
            }
        }
    }
}
