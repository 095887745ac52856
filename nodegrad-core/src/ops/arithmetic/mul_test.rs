use crate::array::NdArray;
use crate::autograd::grad_check::check_grad;
use crate::autograd::Graph;
use crate::error::NodeGradError;
use crate::node::ExtraValue;
use crate::ops::arithmetic::{mul_op, mul_scalar_op};
use crate::utils::testing::{check_array_near, create_test_node, create_test_node_with_grad};

#[test]
fn test_mul_nodes_ok() -> Result<(), NodeGradError> {
    let graph = Graph::new();
    let a = create_test_node(&graph, vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]);
    let b = create_test_node(&graph, vec![5.0, 6.0, 7.0, 8.0], vec![2, 2]);
    let result = mul_op(&a, &b)?;
    check_array_near(&result.data(), &[2, 2], &[5.0, 12.0, 21.0, 32.0], 1e-6);
    Ok(())
}

#[test]
fn test_mul_shape_mismatch() {
    let graph = Graph::new();
    let a = create_test_node(&graph, vec![1.0, 2.0], vec![2]);
    let b = create_test_node(&graph, vec![1.0, 2.0], vec![2, 1]);
    assert_eq!(
        mul_op(&a, &b).unwrap_err(),
        NodeGradError::ShapeMismatch {
            expected: vec![2],
            actual: vec![2, 1],
            operation: "multiplication".to_string(),
        }
    );
}

#[test]
fn test_mul_backward() -> Result<(), NodeGradError> {
    let graph = Graph::new();
    let a = create_test_node_with_grad(&graph, vec![2.0, 3.0], vec![2]);
    let b = create_test_node_with_grad(&graph, vec![4.0, 5.0], vec![2]);
    let output = mul_op(&a, &b)?;
    output.backward(Some(NdArray::from_vec(vec![1.0, 10.0])))?;

    check_array_near(&a.grad().unwrap(), &[2], &[4.0, 50.0], 1e-6);
    check_array_near(&b.grad().unwrap(), &[2], &[2.0, 30.0], 1e-6);
    Ok(())
}

#[test]
fn test_mul_scalar_backward_reads_metadata() -> Result<(), NodeGradError> {
    let graph = Graph::new();
    let a = create_test_node_with_grad(&graph, vec![1.0, 2.0], vec![2]);
    let output = mul_scalar_op(&a, 3.0)?;
    assert_eq!(output.extra("scalar_value"), Some(ExtraValue::Scalar(3.0)));
    check_array_near(&output.data(), &[2], &[3.0, 6.0], 1e-6);

    output.backward(Some(NdArray::from_vec(vec![1.0, 1.0])))?;
    check_array_near(&a.grad().unwrap(), &[2], &[3.0, 3.0], 1e-6);
    Ok(())
}

#[test]
fn test_mul_grad_check() {
    let graph = Graph::new();
    let a = create_test_node_with_grad(&graph, vec![0.5, -1.5, 2.0, 1.25], vec![2, 2]);
    let b = create_test_node_with_grad(&graph, vec![1.0, 0.25, -0.75, 2.0], vec![2, 2]);
    let output_grad = NdArray::new(vec![1.0, -2.0, 0.5, 1.5], vec![2, 2]).unwrap();
    let result = check_grad(
        |inputs| mul_op(&inputs[0], &inputs[1]),
        &[a, b],
        &output_grad,
        1e-3,
        1e-3,
        1e-2,
    );
    assert!(result.is_ok(), "{:?}", result);
}
