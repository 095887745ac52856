use crate::array::{ones, zeros, NdArray};
use crate::autograd::Graph;
use crate::error::NodeGradError;
use crate::node::{ExtraValue, NodeType, Operand};
use crate::utils::testing::{check_array_near, create_test_node, create_test_node_with_grad};

#[test]
fn test_set_grad_checks_shape() -> Result<(), NodeGradError> {
    let graph = Graph::new();
    let a = create_test_node_with_grad(&graph, vec![1.0, 2.0], vec![2]);
    a.set_grad(Some(ones(&[2])))?;
    check_array_near(&a.grad().unwrap(), &[2], &[1.0, 1.0], 1e-6);

    assert_eq!(
        a.set_grad(Some(ones(&[3]))),
        Err(NodeGradError::ShapeMismatch {
            expected: vec![2],
            actual: vec![3],
            operation: "set_grad".to_string(),
        })
    );
    a.zero_grad();
    assert!(a.grad().is_none());
    Ok(())
}

#[test]
fn test_acc_grad_sums_contributions() -> Result<(), NodeGradError> {
    let graph = Graph::new();
    let a = create_test_node_with_grad(&graph, vec![1.0, 2.0], vec![2]);
    a.acc_grad(NdArray::from_vec(vec![1.0, 2.0]))?;
    a.acc_grad(NdArray::from_vec(vec![0.5, 0.5]))?;
    check_array_near(&a.grad().unwrap(), &[2], &[1.5, 2.5], 1e-6);

    assert_eq!(
        a.acc_grad(zeros(&[1, 2])),
        Err(NodeGradError::GradientAccumulationShapeMismatch {
            expected: vec![2],
            actual: vec![1, 2],
        })
    );
    Ok(())
}

#[test]
fn test_repeated_backward_accumulates() -> Result<(), NodeGradError> {
    let graph = Graph::new();
    let a = create_test_node_with_grad(&graph, vec![1.0], vec![1]);
    let b1 = a.mul(2.0)?;
    b1.backward(None)?;
    check_array_near(&a.grad().unwrap(), &[1], &[2.0], 1e-6);

    let b2 = a.mul(3.0)?;
    b2.backward(None)?;
    check_array_near(&a.grad().unwrap(), &[1], &[5.0], 1e-6);
    Ok(())
}

#[test]
fn test_grad_fn_and_leaf() -> Result<(), NodeGradError> {
    let graph = Graph::new();
    let a = create_test_node_with_grad(&graph, vec![1.0], vec![1]);
    assert!(a.is_leaf());
    assert!(a.grad_fn().is_none());
    let b = a.add(1.0)?;
    assert!(!b.is_leaf());
    assert_eq!(b.grad_fn().map(|f| f.name()), Some("AddScalarBackward"));
    assert_eq!(b.extra("scalar_value"), Some(ExtraValue::Scalar(1.0)));
    assert_eq!(b.extra("missing"), None);
    Ok(())
}

#[test]
fn test_matmul_rejects_scalar_operand() {
    let graph = Graph::new();
    let a = create_test_node_with_grad(&graph, vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]);
    assert_eq!(
        a.matmul(2.0).unwrap_err(),
        NodeGradError::TypeMismatch {
            operation: "matrix multiplication".to_string(),
            expected: "Node".to_string(),
        }
    );
    assert!(a.children().is_empty());
}

#[test]
fn test_operand_conversions() {
    let graph = Graph::new();
    let a = create_test_node(&graph, vec![1.0], vec![1]);
    assert!(matches!(Operand::from(&a), Operand::Node(ref n) if n.ptr_eq(&a)));
    assert!(matches!(Operand::from(2.0), Operand::Scalar(v) if v == 2.0));
}

#[test]
fn test_identity_equality_and_debug() {
    let graph = Graph::new();
    let a = create_test_node_with_grad(&graph, vec![1.0], vec![1]);
    let same = a.clone();
    let twin = create_test_node_with_grad(&graph, vec![1.0], vec![1]);
    assert_eq!(a, same);
    assert_ne!(a, twin);

    let text = format!("{:?}", a);
    assert!(text.contains("node_type=Parameter"));
    assert!(text.contains("requires_grad=true"));
    assert!(text.contains("grad_fn=None"));
}

#[test]
fn test_node_accessors() -> Result<(), NodeGradError> {
    let graph = Graph::new();
    let a = graph.input(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3])?;
    assert_eq!(a.shape(), vec![2, 3]);
    assert_eq!(a.numel(), 6);
    assert_eq!(a.node_type(), NodeType::Input);
    assert_eq!(a.version(), 0);
    assert!(!a.is_stale());
    assert!(a.graph().same_graph(&graph));
    assert_eq!(a.to_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert!(matches!(
        graph.parameter(vec![1.0, 2.0], vec![3]),
        Err(NodeGradError::ArrayCreation { data_len: 2, .. })
    ));
    Ok(())
}

#[test]
fn test_complex_expression_forward() -> Result<(), NodeGradError> {
    // ((a + b) * (a - b)) @ c, summed
    let graph = Graph::new();
    let a = graph.parameter(vec![3.0, 4.0, 5.0, 6.0], vec![2, 2])?;
    let b = graph.parameter(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2])?;
    let c = graph.input(vec![1.0, 1.0, 1.0, 1.0], vec![2, 2])?;

    let diff_sq = a.add(&b)?.mul(&a.sub(&b)?)?;
    let out = diff_sq.matmul(&c)?.sum(None)?;
    // a^2 - b^2 = [8, 12, 16, 20]; each element contributes twice.
    check_array_near(&out.data(), &[], &[112.0], 1e-5);

    out.backward(None)?;
    // d/da = 2a * 2, d/db = -2b * 2
    check_array_near(&a.grad().unwrap(), &[2, 2], &[12.0, 16.0, 20.0, 24.0], 1e-4);
    check_array_near(&b.grad().unwrap(), &[2, 2], &[-4.0, -8.0, -12.0, -16.0], 1e-4);
    assert!(c.grad().is_none());
    Ok(())
}
