//! Storage for matrices with both dimensions dynamic.

use dense_core::{Dyn, Scalar, ShapeError};

use crate::buffer::GrowBuffer;
use crate::storage::{check_shape, Storage};

/// Dynamic rows and dynamic columns.
///
/// Growth is keyed on the element count `rows * cols`, not on either
/// extent: trading rows for columns at constant area never reallocates.
#[derive(Clone, Debug)]
pub struct DynStorage<T> {
    rows: usize,
    cols: usize,
    buffer: GrowBuffer<T>,
}

impl<T: Scalar> Storage for DynStorage<T> {
    type Elem = T;
    type Rows = Dyn;
    type Cols = Dyn;

    fn try_new(rows: usize, cols: usize) -> Result<Self, ShapeError> {
        let len = check_shape::<T, Dyn, Dyn>(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            buffer: GrowBuffer::new(len),
        })
    }

    fn try_resize(&mut self, rows: usize, cols: usize) -> Result<(), ShapeError> {
        let len = check_shape::<T, Dyn, Dyn>(rows, cols)?;
        self.buffer.grow_to(len);
        self.rows = rows;
        self.cols = cols;
        Ok(())
    }

    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn cols(&self) -> usize {
        self.cols
    }

    fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    fn memory_bytes(&self) -> usize {
        self.buffer.memory_bytes()
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        self.buffer.active(self.rows * self.cols)
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self.buffer.active_mut(self.rows * self.cols)
    }

    fn shrink_to_fit(&mut self) {
        self.buffer.shrink_to(self.rows * self.cols);
    }
}
