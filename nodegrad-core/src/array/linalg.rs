// Axis permutations and the batched matrix product kernel.

use crate::array::utils::{
    broadcast_shapes, calculate_strides, coord_to_index_broadcasted, index_to_coord,
};
use crate::array::NdArray;
use crate::error::NodeGradError;

impl NdArray {
    /// Materializes the array with its axes reordered by `axes`.
    /// `axes` must be a permutation of `0..ndim`.
    fn permute(&self, axes: &[usize]) -> NdArray {
        let new_shape: Vec<usize> = axes.iter().map(|&a| self.shape[a]).collect();
        let old_strides = calculate_strides(&self.shape);
        let new_strides = calculate_strides(&new_shape);
        let numel = self.numel();

        let mut data = Vec::with_capacity(numel);
        for i in 0..numel {
            let coord = index_to_coord(i, &new_strides, &new_shape);
            let src: usize = coord
                .iter()
                .zip(axes.iter())
                .map(|(&c, &axis)| c * old_strides[axis])
                .sum();
            data.push(self.data[src]);
        }
        NdArray {
            data,
            shape: new_shape,
        }
    }

    /// Reverses the order of all axes (NumPy `.T`).
    /// 0-d and 1-d arrays come back unchanged.
    pub fn transpose(&self) -> NdArray {
        let axes: Vec<usize> = (0..self.ndim()).rev().collect();
        self.permute(&axes)
    }

    /// Swaps the last two axes, leaving batch axes in place.
    ///
    /// # Errors
    /// Returns `NodeGradError::AxisOutOfBounds` for arrays with fewer than 2 axes.
    pub fn swap_last_two(&self) -> Result<NdArray, NodeGradError> {
        let rank = self.ndim();
        if rank < 2 {
            return Err(NodeGradError::AxisOutOfBounds { axis: 1, rank });
        }
        let mut axes: Vec<usize> = (0..rank).collect();
        axes.swap(rank - 2, rank - 1);
        Ok(self.permute(&axes))
    }

    /// Matrix product over the last two axes, broadcasting leading batch axes.
    ///
    /// `[.., M, K] @ [.., K, N] -> [broadcast(..), M, N]`
    ///
    /// # Errors
    /// * `NodeGradError::DimensionError` if either operand has fewer than 2 axes.
    /// * `NodeGradError::AlignmentError` if the inner dimensions differ or the
    ///   batch axes cannot be broadcast together.
    pub fn matmul(&self, other: &NdArray) -> Result<NdArray, NodeGradError> {
        let a_shape = &self.shape;
        let b_shape = &other.shape;
        if a_shape.len() < 2 || b_shape.len() < 2 {
            return Err(NodeGradError::DimensionError {
                lhs: a_shape.clone(),
                rhs: b_shape.clone(),
            });
        }

        let a_rank = a_shape.len();
        let b_rank = b_shape.len();
        let (m, k) = (a_shape[a_rank - 2], a_shape[a_rank - 1]);
        let (k2, n) = (b_shape[b_rank - 2], b_shape[b_rank - 1]);
        if k != k2 {
            return Err(NodeGradError::AlignmentError {
                lhs: a_shape.clone(),
                rhs: b_shape.clone(),
            });
        }

        let a_batch = &a_shape[..a_rank - 2];
        let b_batch = &b_shape[..b_rank - 2];
        let out_batch = broadcast_shapes(a_batch, b_batch).map_err(|_| {
            NodeGradError::AlignmentError {
                lhs: a_shape.clone(),
                rhs: b_shape.clone(),
            }
        })?;

        let a_batch_strides = calculate_strides(a_batch);
        let b_batch_strides = calculate_strides(b_batch);
        let out_batch_strides = calculate_strides(&out_batch);
        let batch_count: usize = out_batch.iter().product();

        let mut output_shape = out_batch.clone();
        output_shape.push(m);
        output_shape.push(n);
        let mut output = vec![0.0f32; batch_count * m * n];

        for batch in 0..batch_count {
            let coord = index_to_coord(batch, &out_batch_strides, &out_batch);
            let a_offset = coord_to_index_broadcasted(&coord, a_batch, &a_batch_strides) * m * k;
            let b_offset = coord_to_index_broadcasted(&coord, b_batch, &b_batch_strides) * k * n;
            let out_offset = batch * m * n;

            for i in 0..m {
                for l in 0..k {
                    let a_val = self.data[a_offset + i * k + l];
                    let b_row = b_offset + l * n;
                    let out_row = out_offset + i * n;
                    for j in 0..n {
                        output[out_row + j] += a_val * other.data[b_row + j];
                    }
                }
            }
        }

        NdArray::new(output, output_shape)
    }
}

#[cfg(test)]
#[path = "linalg_test.rs"]
mod tests;
