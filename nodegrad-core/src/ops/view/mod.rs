//! Shape-changing operations that keep the elements in row-major order.

pub mod reshape;

pub use reshape::reshape_op;
