//! # Operations Module (`ops`)
//!
//! Differentiable operations on [`Node`]s. Operations are grouped by kind:
//!
//! - **`_op` Functions:** each operation has a core function (named `xxx_op`)
//!   that validates its operands, computes the forward value and builds the
//!   result through [`Graph::create_node`](crate::autograd::Graph::create_node).
//!   The methods on [`Node`] dispatch to these functions.
//! - **`Backward` Structs:** each operation has a matching zero-sized struct
//!   (e.g. `AddBackward`, `MatmulBackward`) implementing
//!   [`BackwardOp`](crate::autograd::BackwardOp). It reads whatever it needs
//!   from the node: the forward value, the parents' values and the metadata
//!   stored at construction.
//!
//! ## Submodules
//!
//! - [`arithmetic`]: elementwise add, sub, mul (node or scalar operand), neg, pow.
//! - [`linalg`]: matrix product and transpose.
//! - [`view`]: reshape.
//! - [`math_elem`]: elementwise abs, exp, log.
//! - [`reduction`]: sum and mean, over all elements or along one axis.

use crate::array::NdArray;
use crate::error::NodeGradError;
use crate::node::Node;

pub mod arithmetic;
pub mod linalg;
pub mod math_elem;
pub mod reduction;
pub mod view;

/// Copies out the value of `node`'s parent at `index`.
///
/// # Errors
/// Returns `NodeGradError::MissingParent` if the node has no such parent, e.g.
/// after reclamation removed a stale one.
pub(crate) fn parent_data(node: &Node, index: usize, op: &str) -> Result<NdArray, NodeGradError> {
    node.read_data()
        .parents
        .get(index)
        .map(|p| p.data().clone())
        .ok_or_else(|| NodeGradError::MissingParent {
            index,
            op: op.to_string(),
        })
}
