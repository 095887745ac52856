use crate::array::NdArray;
use crate::autograd::grad_check::check_grad;
use crate::autograd::Graph;
use crate::error::NodeGradError;
use crate::node::ExtraValue;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::utils::testing::{check_array_near, create_test_node_with_grad};
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() -> Result<(), NodeGradError> {
    let graph = Graph::new();
    let a = create_test_node_with_grad(&graph, vec![1.0, 2.0, 3.0], vec![3]);
    let output = pow_op(&a, 2.0)?;
    check_array_near(&output.data(), &[3], &[1.0, 4.0, 9.0], 1e-6);
    assert_eq!(output.extra("power"), Some(ExtraValue::Scalar(2.0)));
    Ok(())
}

#[test]
fn test_pow_backward() -> Result<(), NodeGradError> {
    let graph = Graph::new();
    let a = create_test_node_with_grad(&graph, vec![1.0, 2.0, 3.0], vec![3]);
    let output = pow_op(&a, 3.0)?;
    output.backward(Some(NdArray::from_vec(vec![1.0, 1.0, 1.0])))?;
    // 3 * x^2
    check_array_near(&a.grad().unwrap(), &[3], &[3.0, 12.0, 27.0], 1e-5);
    Ok(())
}

#[test]
fn test_product_squared_gradients() -> Result<(), NodeGradError> {
    let graph = Graph::new();
    let a = create_test_node_with_grad(&graph, vec![2.0], vec![1]);
    let b = create_test_node_with_grad(&graph, vec![3.0], vec![1]);
    let f = pow_op(&mul_op(&a, &b)?, 2.0)?;
    f.backward(None)?;

    assert_relative_eq!(a.grad().unwrap().as_slice()[0], 36.0, epsilon = 1e-5);
    assert_relative_eq!(b.grad().unwrap().as_slice()[0], 24.0, epsilon = 1e-5);
    Ok(())
}

#[test]
fn test_pow_fractional_grad_check() {
    let graph = Graph::new();
    let a = create_test_node_with_grad(&graph, vec![0.5, 1.5, 2.0, 4.0], vec![4]);
    let output_grad = NdArray::from_vec(vec![1.0, -1.0, 0.5, 2.0]);
    let result = check_grad(|inputs| pow_op(&inputs[0], 0.5), &[a], &output_grad, 1e-3, 1e-3, 1e-2);
    assert!(result.is_ok(), "{:?}", result);
}
