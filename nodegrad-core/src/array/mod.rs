// src/array/mod.rs

use crate::error::NodeGradError;

pub mod create;
mod linalg;
mod reduce;
pub mod utils;

pub use create::{full, ones, ones_like, rand, randn, zeros, zeros_like};

/// Dense, row-major `f32` buffer with a shape.
///
/// This is the value carried by every node and every gradient. An empty shape
/// describes a 0-d scalar holding exactly one element.
///
/// Arrays are plain values: cloning copies the buffer, and no operation mutates
/// an array in place.
#[derive(Debug, Clone, PartialEq)]
pub struct NdArray {
    pub(crate) data: Vec<f32>,
    pub(crate) shape: Vec<usize>,
}

impl NdArray {
    /// Creates a new array from flattened row-major data and a shape.
    ///
    /// # Errors
    /// Returns `NodeGradError::ArrayCreation` if `data.len()` does not match the
    /// number of elements described by `shape`.
    pub fn new(data: Vec<f32>, shape: Vec<usize>) -> Result<Self, NodeGradError> {
        let numel: usize = shape.iter().product();
        if data.len() != numel {
            return Err(NodeGradError::ArrayCreation {
                data_len: data.len(),
                shape,
            });
        }
        Ok(NdArray { data, shape })
    }

    /// Creates a 0-d array holding a single value.
    pub fn scalar(value: f32) -> Self {
        NdArray {
            data: vec![value],
            shape: vec![],
        }
    }

    /// Creates a 1-d array from a vector.
    pub fn from_vec(data: Vec<f32>) -> Self {
        let len = data.len();
        NdArray {
            data,
            shape: vec![len],
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn numel(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.data.clone()
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Returns the single element of a one-element array.
    pub fn item(&self) -> Option<f32> {
        if self.data.len() == 1 {
            Some(self.data[0])
        } else {
            None
        }
    }

    /// Applies `f` to every element, keeping the shape.
    pub fn map<F>(&self, f: F) -> NdArray
    where
        F: Fn(f32) -> f32,
    {
        NdArray {
            data: self.data.iter().map(|&x| f(x)).collect(),
            shape: self.shape.clone(),
        }
    }

    /// Combines two arrays of identical shape element by element.
    ///
    /// # Errors
    /// Returns `NodeGradError::ShapeMismatch` (tagged with `operation`) if the
    /// shapes differ. No broadcasting is performed.
    pub fn zip_with<F>(&self, other: &NdArray, operation: &str, f: F) -> Result<NdArray, NodeGradError>
    where
        F: Fn(f32, f32) -> f32,
    {
        if self.shape != other.shape {
            return Err(NodeGradError::ShapeMismatch {
                expected: self.shape.clone(),
                actual: other.shape.clone(),
                operation: operation.to_string(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(NdArray {
            data,
            shape: self.shape.clone(),
        })
    }

    pub fn add(&self, other: &NdArray) -> Result<NdArray, NodeGradError> {
        self.zip_with(other, "addition", |a, b| a + b)
    }

    pub fn sub(&self, other: &NdArray) -> Result<NdArray, NodeGradError> {
        self.zip_with(other, "subtraction", |a, b| a - b)
    }

    pub fn mul(&self, other: &NdArray) -> Result<NdArray, NodeGradError> {
        self.zip_with(other, "multiplication", |a, b| a * b)
    }

    pub fn div(&self, other: &NdArray) -> Result<NdArray, NodeGradError> {
        self.zip_with(other, "division", |a, b| a / b)
    }

    pub fn add_scalar(&self, value: f32) -> NdArray {
        self.map(|x| x + value)
    }

    pub fn mul_scalar(&self, value: f32) -> NdArray {
        self.map(|x| x * value)
    }

    pub fn neg(&self) -> NdArray {
        self.map(|x| -x)
    }

    pub fn powf(&self, exponent: f32) -> NdArray {
        self.map(|x| x.powf(exponent))
    }

    /// Returns the same elements under a new shape.
    ///
    /// # Errors
    /// Returns `NodeGradError::SizeMismatch` if the element count would change.
    pub fn reshape(&self, new_shape: &[usize]) -> Result<NdArray, NodeGradError> {
        let new_numel: usize = new_shape.iter().product();
        if new_numel != self.numel() {
            return Err(NodeGradError::SizeMismatch {
                from: self.shape.clone(),
                to: new_shape.to_vec(),
            });
        }
        Ok(NdArray {
            data: self.data.clone(),
            shape: new_shape.to_vec(),
        })
    }
}

impl From<f32> for NdArray {
    fn from(value: f32) -> Self {
        NdArray::scalar(value)
    }
}

impl From<Vec<f32>> for NdArray {
    fn from(data: Vec<f32>) -> Self {
        NdArray::from_vec(data)
    }
}

#[cfg(test)]
#[path = "array_test.rs"]
mod tests;
