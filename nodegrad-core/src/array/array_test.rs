use super::*;

#[test]
fn test_new_validates_length() {
    let a = NdArray::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    assert_eq!(a.shape(), &[2, 2]);
    assert_eq!(a.numel(), 4);

    let err = NdArray::new(vec![1.0, 2.0, 3.0], vec![2, 2]).unwrap_err();
    assert_eq!(
        err,
        NodeGradError::ArrayCreation {
            data_len: 3,
            shape: vec![2, 2]
        }
    );
}

#[test]
fn test_scalar_is_zero_dimensional() {
    let s = NdArray::scalar(3.5);
    assert_eq!(s.ndim(), 0);
    assert_eq!(s.numel(), 1);
    assert_eq!(s.item(), Some(3.5));
    assert_eq!(NdArray::from_vec(vec![1.0, 2.0]).item(), None);
}

#[test]
fn test_elementwise_ops() -> Result<(), NodeGradError> {
    let a = NdArray::from_vec(vec![1.0, 2.0, 3.0]);
    let b = NdArray::from_vec(vec![4.0, 5.0, 6.0]);
    assert_eq!(a.add(&b)?.as_slice(), &[5.0, 7.0, 9.0]);
    assert_eq!(b.sub(&a)?.as_slice(), &[3.0, 3.0, 3.0]);
    assert_eq!(a.mul(&b)?.as_slice(), &[4.0, 10.0, 18.0]);
    assert_eq!(b.div(&a)?.as_slice(), &[4.0, 2.5, 2.0]);
    assert_eq!(a.add_scalar(1.0).as_slice(), &[2.0, 3.0, 4.0]);
    assert_eq!(a.mul_scalar(-2.0).as_slice(), &[-2.0, -4.0, -6.0]);
    assert_eq!(a.neg().as_slice(), &[-1.0, -2.0, -3.0]);
    assert_eq!(a.powf(2.0).as_slice(), &[1.0, 4.0, 9.0]);
    Ok(())
}

#[test]
fn test_elementwise_shape_mismatch() {
    let a = NdArray::from_vec(vec![1.0, 2.0, 3.0]);
    let b = NdArray::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    match a.add(&b) {
        Err(NodeGradError::ShapeMismatch { operation, .. }) => assert_eq!(operation, "addition"),
        other => panic!("Expected ShapeMismatch, got {:?}", other),
    }
}

#[test]
fn test_reshape() -> Result<(), NodeGradError> {
    let a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let r = a.reshape(&[2, 3])?;
    assert_eq!(r.shape(), &[2, 3]);
    assert_eq!(r.as_slice(), a.as_slice());

    let scalar = NdArray::from_vec(vec![5.0]).reshape(&[])?;
    assert_eq!(scalar.ndim(), 0);

    assert!(matches!(
        a.reshape(&[4, 2]),
        Err(NodeGradError::SizeMismatch { .. })
    ));
    Ok(())
}
