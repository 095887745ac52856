// src/node/mod.rs

use crate::array::NdArray;
use crate::autograd::graph::{Graph, NodeId};
use crate::error::NodeGradError;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod autograd_methods;
pub mod node_data;
mod op_methods;
mod traits;

pub use node_data::NodeData;

/// Role of a node in the computation graph.
///
/// The role decides whether a node tracks gradients on its own:
/// `Parameter` always does, `Input` never does, and an `Intermediate` produced
/// by an operation does when at least one of its parents does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeType {
    /// Data fed into the graph (model inputs, constants).
    Input,
    /// Trainable leaf (weights, biases).
    Parameter,
    /// Result of an operation on other nodes.
    Intermediate,
}

/// Auxiliary value stored on a node for its gradient function.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtraValue {
    Scalar(f32),
    Shape(Vec<usize>),
    Axis(usize),
}

/// Right-hand operand of a node operation: another node or a plain scalar.
#[derive(Debug, Clone)]
pub enum Operand {
    Node(Node),
    Scalar(f32),
}

impl From<&Node> for Operand {
    fn from(node: &Node) -> Self {
        Operand::Node(node.clone())
    }
}

impl From<Node> for Operand {
    fn from(node: Node) -> Self {
        Operand::Node(node)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Operand::Scalar(value)
    }
}

// Lets unsuffixed float literals (`x.mul(2.0)`) pick a scalar operand.
impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value as f32)
    }
}

/// Handle to a value tracked in the computation graph.
///
/// `Node` uses `Rc<RefCell<NodeData>>` internally:
/// 1.  **Shared Ownership:** clones are cheap and alias the same node, so a
///     node is kept alive by its callers and by every dependent node that lists
///     it as a parent.
/// 2.  **Interior Mutability:** the gradient slot and the structural links can
///     be updated through a shared handle during backward passes and
///     reclamation.
///
/// The engine is single-threaded; handles are neither `Send` nor `Sync`.
pub struct Node {
    pub(crate) data: Rc<RefCell<NodeData>>,
}

impl Node {
    /// Creates a node directly from data, registered in `graph`.
    ///
    /// `Parameter` nodes require gradients; `Input` and `Intermediate` nodes
    /// created this way do not. Derived nodes are built by
    /// [`Graph::create_node`] instead.
    pub fn new(graph: &Graph, data: NdArray, node_type: NodeType) -> Node {
        let id = graph.next_id();
        let node = Node {
            data: Rc::new(RefCell::new(NodeData::new(
                id,
                data,
                node_type,
                graph.clone(),
            ))),
        };
        graph.register(&node);
        node
    }

    /// Borrows the node's internal data.
    /// Panics if the node is currently mutably borrowed.
    pub fn read_data(&self) -> Ref<'_, NodeData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, NodeData> {
        self.data.borrow_mut()
    }

    pub fn id(&self) -> NodeId {
        self.read_data().id
    }

    /// Borrows the node's value.
    pub fn data(&self) -> Ref<'_, NdArray> {
        Ref::map(self.read_data(), |d| &d.data)
    }

    /// Returns a copy of the node's elements in row-major order.
    pub fn to_vec(&self) -> Vec<f32> {
        self.read_data().data.to_vec()
    }

    pub fn shape(&self) -> Vec<usize> {
        self.read_data().data.shape.clone()
    }

    pub fn numel(&self) -> usize {
        self.read_data().data.numel()
    }

    pub fn node_type(&self) -> NodeType {
        self.read_data().node_type
    }

    /// Returns the graph session this node is registered in.
    pub fn graph(&self) -> Graph {
        self.read_data().graph.clone()
    }

    /// Returns the nodes this node was derived from, in operand order.
    pub fn parents(&self) -> Vec<Node> {
        self.read_data().parents.clone()
    }

    pub fn parent(&self, index: usize) -> Option<Node> {
        self.read_data().parents.get(index).cloned()
    }

    /// Returns the live nodes derived from this node.
    pub fn children(&self) -> Vec<Node> {
        self.read_data()
            .children
            .iter()
            .filter_map(|weak| weak.upgrade())
            .map(|data| Node { data })
            .collect()
    }

    /// Returns the auxiliary metadata stored under `key`, if any.
    pub fn extra(&self, key: &str) -> Option<ExtraValue> {
        self.read_data().extra.get(key).cloned()
    }

    pub(crate) fn extra_scalar(&self, key: &str, op: &str) -> Result<f32, NodeGradError> {
        match self.read_data().extra.get(key) {
            Some(ExtraValue::Scalar(value)) => Ok(*value),
            _ => Err(NodeGradError::MissingMetadata {
                key: key.to_string(),
                op: op.to_string(),
            }),
        }
    }

    pub(crate) fn extra_shape(&self, key: &str, op: &str) -> Result<Vec<usize>, NodeGradError> {
        match self.read_data().extra.get(key) {
            Some(ExtraValue::Shape(shape)) => Ok(shape.clone()),
            _ => Err(NodeGradError::MissingMetadata {
                key: key.to_string(),
                op: op.to_string(),
            }),
        }
    }

    pub(crate) fn extra_axis(&self, key: &str, op: &str) -> Result<Option<usize>, NodeGradError> {
        match self.read_data().extra.get(key) {
            Some(ExtraValue::Axis(axis)) => Ok(Some(*axis)),
            None => Ok(None),
            Some(_) => Err(NodeGradError::MissingMetadata {
                key: key.to_string(),
                op: op.to_string(),
            }),
        }
    }

    /// Whether the node has been superseded and awaits reclamation.
    pub fn is_stale(&self) -> bool {
        self.read_data().stale
    }

    pub(crate) fn mark_stale(&self) {
        self.write_data().stale = true;
    }

    /// Mutation counter, reserved for in-place tracking.
    pub fn version(&self) -> u64 {
        self.read_data().version
    }

    /// Whether both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}
