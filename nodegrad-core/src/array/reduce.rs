// Reductions and their broadcast-back counterparts used by gradient functions.

use crate::array::utils::{calculate_strides, coord_to_index_broadcasted, index_to_coord};
use crate::array::{full, zeros, NdArray};
use crate::error::NodeGradError;

impl NdArray {
    /// Sums every element into a 0-d array.
    pub fn sum_all(&self) -> NdArray {
        NdArray::scalar(self.data.iter().sum())
    }

    /// Sums along `axis`, removing it from the shape.
    pub fn sum_axis(&self, axis: usize) -> Result<NdArray, NodeGradError> {
        let rank = self.ndim();
        if axis >= rank {
            return Err(NodeGradError::AxisOutOfBounds { axis, rank });
        }
        let outer: usize = self.shape[..axis].iter().product();
        let len = self.shape[axis];
        let inner: usize = self.shape[axis + 1..].iter().product();

        let mut out_shape = self.shape.clone();
        out_shape.remove(axis);
        let mut out = vec![0.0f32; outer * inner];
        for o in 0..outer {
            for l in 0..len {
                let src = (o * len + l) * inner;
                let dst = o * inner;
                for i in 0..inner {
                    out[dst + i] += self.data[src + i];
                }
            }
        }
        NdArray::new(out, out_shape)
    }

    /// Inverse of `sum_axis` for gradients: re-inserts `axis` with length `size`,
    /// repeating the values along it.
    pub fn expand_axis(&self, axis: usize, size: usize) -> Result<NdArray, NodeGradError> {
        let rank = self.ndim();
        if axis > rank {
            return Err(NodeGradError::AxisOutOfBounds { axis, rank });
        }
        let outer: usize = self.shape[..axis].iter().product();
        let inner: usize = self.shape[axis..].iter().product();

        let mut out_shape = self.shape.clone();
        out_shape.insert(axis, size);
        let mut out = Vec::with_capacity(outer * size * inner);
        for o in 0..outer {
            let row = &self.data[o * inner..(o + 1) * inner];
            for _ in 0..size {
                out.extend_from_slice(row);
            }
        }
        NdArray::new(out, out_shape)
    }

    /// Broadcasts a one-element array to `shape`.
    pub fn broadcast_scalar(&self, shape: &[usize]) -> Result<NdArray, NodeGradError> {
        match self.item() {
            Some(value) => Ok(full(shape, value)),
            None => Err(NodeGradError::ShapeMismatch {
                expected: vec![],
                actual: self.shape.clone(),
                operation: "broadcast_scalar".to_string(),
            }),
        }
    }

    /// Folds broadcast dimensions back so the result has `target_shape`.
    ///
    /// Leading dimensions absent from `target_shape` and dimensions where the
    /// target has size 1 are summed over. Used when a forward pass broadcast an
    /// operand and its gradient must be reduced to the operand's shape.
    pub fn sum_to_shape(&self, target_shape: &[usize]) -> Result<NdArray, NodeGradError> {
        if self.shape == target_shape {
            return Ok(self.clone());
        }
        let mismatch = || NodeGradError::ShapeMismatch {
            expected: target_shape.to_vec(),
            actual: self.shape.clone(),
            operation: "sum_to_shape".to_string(),
        };
        if target_shape.len() > self.ndim() {
            return Err(mismatch());
        }
        let rank_diff = self.ndim() - target_shape.len();
        for (i, &dim) in target_shape.iter().enumerate() {
            if dim != 1 && dim != self.shape[rank_diff + i] {
                return Err(mismatch());
            }
        }

        let mut out = zeros(target_shape);
        let src_strides = calculate_strides(&self.shape);
        let dst_strides = calculate_strides(target_shape);
        for (i, &value) in self.data.iter().enumerate() {
            let coord = index_to_coord(i, &src_strides, &self.shape);
            let dst = coord_to_index_broadcasted(&coord, target_shape, &dst_strides);
            out.data[dst] += value;
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "reduce_test.rs"]
mod tests;
