// src/array/create.rs

use crate::array::NdArray;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Creates a new array filled with zeros with the specified shape.
pub fn zeros(shape: &[usize]) -> NdArray {
    full(shape, 0.0)
}

/// Creates a new array filled with ones with the specified shape.
pub fn ones(shape: &[usize]) -> NdArray {
    full(shape, 1.0)
}

/// Creates a new array filled with a specific value with the specified shape.
pub fn full(shape: &[usize], value: f32) -> NdArray {
    let numel = shape.iter().product();
    NdArray {
        data: vec![value; numel],
        shape: shape.to_vec(),
    }
}

/// Creates a zero-filled array with the same shape as `array`.
pub fn zeros_like(array: &NdArray) -> NdArray {
    zeros(&array.shape)
}

/// Creates a one-filled array with the same shape as `array`.
pub fn ones_like(array: &NdArray) -> NdArray {
    ones(&array.shape)
}

/// Samples every element uniformly from `[0, 1)`.
pub fn rand(shape: &[usize]) -> NdArray {
    let numel = shape.iter().product();
    let mut rng = rand::thread_rng();
    let data: Vec<f32> = (0..numel).map(|_| rng.gen::<f32>()).collect();
    NdArray {
        data,
        shape: shape.to_vec(),
    }
}

/// Samples every element from the standard normal distribution.
pub fn randn(shape: &[usize]) -> NdArray {
    let numel = shape.iter().product();
    let mut rng = rand::thread_rng();
    let data: Vec<f32> = (0..numel)
        .map(|_| StandardNormal.sample(&mut rng))
        .collect();
    NdArray {
        data,
        shape: shape.to_vec(),
    }
}
