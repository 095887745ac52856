use crate::array::NdArray;
use crate::autograd::grad_check::check_grad;
use crate::autograd::Graph;
use crate::error::NodeGradError;
use crate::ops::math_elem::log_op;
use crate::utils::testing::{check_array_near, create_test_node_with_grad};
use approx::assert_relative_eq;

#[test]
fn test_ln_forward_basic() -> Result<(), NodeGradError> {
    let graph = Graph::new();
    let a = create_test_node_with_grad(&graph, vec![1.0, std::f32::consts::E, 10.0], vec![3]);
    let result = log_op(&a)?;
    let expected = [0.0, 1.0, 10.0f32.ln()];
    assert_relative_eq!(result.data().as_slice(), &expected[..], epsilon = 1e-6);
    Ok(())
}

#[test]
fn test_ln_forward_non_positive() -> Result<(), NodeGradError> {
    let graph = Graph::new();
    let a = create_test_node_with_grad(&graph, vec![1.0, 0.0, -1.0], vec![3]);
    let result = log_op(&a)?;
    let data = result.to_vec();
    assert!(data[0].is_finite());
    assert!(data[1].is_infinite() && data[1].is_sign_negative());
    assert!(data[2].is_nan());
    Ok(())
}

#[test]
fn test_ln_backward() -> Result<(), NodeGradError> {
    let graph = Graph::new();
    let a = create_test_node_with_grad(&graph, vec![1.0, 2.0, 4.0], vec![3]);
    let result = log_op(&a)?;
    result.backward(Some(NdArray::from_vec(vec![0.1, 0.2, 0.3])))?;
    check_array_near(&a.grad().unwrap(), &[3], &[0.1, 0.1, 0.075], 1e-6);
    Ok(())
}

#[test]
fn test_ln_grad_check() {
    let graph = Graph::new();
    let a = create_test_node_with_grad(&graph, vec![0.5, 1.0, 2.0, 3.0], vec![2, 2]);
    let output_grad = NdArray::new(vec![1.0, -1.0, 0.5, 2.0], vec![2, 2]).unwrap();
    let result = check_grad(|inputs| log_op(&inputs[0]), &[a], &output_grad, 1e-3, 1e-3, 1e-2);
    assert!(result.is_ok(), "{:?}", result);
}
