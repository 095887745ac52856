use crate::array::NdArray;
use crate::autograd::Graph;
use crate::node::{Node, NodeType};

/// Checks that an array has `expected_shape` and that every element lies
/// within `tolerance` of `expected_data`.
///
/// Panics with the offending index on the first mismatch.
pub fn check_array_near(
    actual: &NdArray,
    expected_shape: &[usize],
    expected_data: &[f32],
    tolerance: f32,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");
    assert_eq!(
        actual.numel(),
        expected_data.len(),
        "Data length mismatch"
    );

    for (i, (a, e)) in actual.as_slice().iter().zip(expected_data.iter()).enumerate() {
        let diff = (*a - *e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Helper to create an `Input` node for testing purposes.
pub fn create_test_node(graph: &Graph, data: Vec<f32>, shape: Vec<usize>) -> Node {
    let array = NdArray::new(data, shape).expect("Failed to create test node");
    Node::new(graph, array, NodeType::Input)
}

/// Helper to create a `Parameter` node (gradient-tracking leaf) for testing.
pub fn create_test_node_with_grad(graph: &Graph, data: Vec<f32>, shape: Vec<usize>) -> Node {
    let array = NdArray::new(data, shape).expect("Failed to create test node with grad");
    Node::new(graph, array, NodeType::Parameter)
}
