use crate::array::NdArray;
use crate::autograd::grad_check::check_grad;
use crate::autograd::Graph;
use crate::error::NodeGradError;
use crate::node::ExtraValue;
use crate::ops::view::reshape_op;
use crate::utils::testing::{check_array_near, create_test_node, create_test_node_with_grad};

#[test]
fn test_reshape_forward() -> Result<(), NodeGradError> {
    let graph = Graph::new();
    let a = create_test_node(&graph, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]);
    let r = reshape_op(&a, &[3, 2])?;
    check_array_near(&r.data(), &[3, 2], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 1e-6);
    assert_eq!(r.extra("original_shape"), Some(ExtraValue::Shape(vec![2, 3])));
    Ok(())
}

#[test]
fn test_reshape_size_mismatch() {
    let graph = Graph::new();
    let a = create_test_node(&graph, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]);
    assert_eq!(
        reshape_op(&a, &[4, 2]).unwrap_err(),
        NodeGradError::SizeMismatch {
            from: vec![2, 3],
            to: vec![4, 2],
        }
    );
}

#[test]
fn test_reshape_backward_restores_shape() -> Result<(), NodeGradError> {
    let graph = Graph::new();
    let a = create_test_node_with_grad(&graph, vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]);
    let r = reshape_op(&a, &[4])?;
    r.backward(Some(NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0])))?;
    check_array_near(&a.grad().unwrap(), &[2, 2], &[1.0, 2.0, 3.0, 4.0], 1e-6);
    Ok(())
}

#[test]
fn test_reshape_to_scalar_then_implicit_backward() -> Result<(), NodeGradError> {
    let graph = Graph::new();
    let a = create_test_node_with_grad(&graph, vec![3.0], vec![1, 1]);
    let r = reshape_op(&a, &[])?;
    assert_eq!(r.shape(), Vec::<usize>::new());
    r.backward(None)?;
    check_array_near(&a.grad().unwrap(), &[1, 1], &[1.0], 1e-6);
    Ok(())
}

#[test]
fn test_reshape_grad_check() {
    let graph = Graph::new();
    let a = create_test_node_with_grad(&graph, vec![0.5, -1.0, 2.0, 1.5, 0.25, -0.5], vec![2, 3]);
    let output_grad = NdArray::new(vec![1.0, -1.0, 0.5, 2.0, 3.0, -0.5], vec![6]).unwrap();
    let result = check_grad(|inputs| reshape_op(&inputs[0], &[6]), &[a], &output_grad, 1e-3, 1e-3, 1e-2);
    assert!(result.is_ok(), "{:?}", result);
}
