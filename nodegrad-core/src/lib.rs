//! # nodegrad-core
//!
//! A reverse-mode automatic-differentiation engine over a dynamic computation
//! graph of dense `f32` arrays.
//!
//! Values are tracked as [`Node`]s created in a [`Graph`] session. Operations on
//! nodes build new nodes through the graph; [`Node::backward`] then computes
//! gradients of a scalar (or explicitly seeded) output with respect to every
//! leaf that requires them.
//!
//! ```
//! use nodegrad_core::{Graph, NodeGradError};
//!
//! fn main() -> Result<(), NodeGradError> {
//!     let graph = Graph::new();
//!     let a = graph.parameter(vec![2.0], vec![1])?;
//!     let b = graph.parameter(vec![3.0], vec![1])?;
//!     let f = a.mul(&b)?.pow(2.0)?;
//!     f.backward(None)?;
//!     assert_eq!(a.grad().map(|g| g.to_vec()), Some(vec![36.0]));
//!     assert_eq!(b.grad().map(|g| g.to_vec()), Some(vec![24.0]));
//!     Ok(())
//! }
//! ```

pub mod array;
pub mod autograd;
pub mod error;
pub mod node;
pub mod ops;
#[cfg(test)]
pub(crate) mod utils;

pub use array::NdArray;
pub use autograd::{BackwardOptions, Graph};
pub use error::NodeGradError;
pub use node::{ExtraValue, Node, NodeType, Operand};
