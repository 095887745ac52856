//! # Autograd Module
//!
//! Reverse-mode automatic differentiation over a dynamic graph of [`Node`](crate::node::Node)s.
//!
//! - [`graph`]: the [`Graph`] session owning the id counter and the non-owning
//!   node registry, the single node factory ([`Graph::create_node`]) and the
//!   stale-node reclaimer.
//! - [`backward`]: topological ordering, gradient-function dispatch and
//!   gradient accumulation.
//! - [`introspection`]: read-only traversals over a node's ancestry.
//! - [`grad_check`]: finite-difference verification of gradient functions.

pub mod backward;
pub mod backward_op;
pub mod grad_check;
pub mod graph;
pub mod introspection;

pub use backward::{backward, BackwardOptions};
pub use backward_op::BackwardOp;
pub use graph::{Graph, NodeId};
pub use introspection::{count_by_type, get_parameters};
