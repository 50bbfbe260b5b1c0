//! Storage for matrices with exactly one dynamic dimension.
//!
//! [`DynRowsStorage`] fixes the column count and records the row count;
//! [`DynColsStorage`] is its mirror. Both size their buffer as
//! `dynamic extent * fixed extent` and grow it only when that product
//! passes the high-water mark.

use dense_core::{Const, Dyn, Scalar, ShapeError};

use crate::buffer::GrowBuffer;
use crate::storage::{check_shape, Storage};

/// Dynamic rows, `C` fixed columns.
#[derive(Clone, Debug)]
pub struct DynRowsStorage<T, const C: usize> {
    rows: usize,
    buffer: GrowBuffer<T>,
}

impl<T: Scalar, const C: usize> Storage for DynRowsStorage<T, C> {
    type Elem = T;
    type Rows = Dyn;
    type Cols = Const<C>;

    fn try_new(rows: usize, cols: usize) -> Result<Self, ShapeError> {
        let len = check_shape::<T, Dyn, Const<C>>(rows, cols)?;
        Ok(Self {
            rows,
            buffer: GrowBuffer::new(len),
        })
    }

    fn try_resize(&mut self, rows: usize, cols: usize) -> Result<(), ShapeError> {
        let len = check_shape::<T, Dyn, Const<C>>(rows, cols)?;
        self.buffer.grow_to(len);
        self.rows = rows;
        Ok(())
    }

    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn cols(&self) -> usize {
        C
    }

    fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    fn memory_bytes(&self) -> usize {
        self.buffer.memory_bytes()
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        self.buffer.active(self.rows * C)
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self.buffer.active_mut(self.rows * C)
    }

    fn shrink_to_fit(&mut self) {
        self.buffer.shrink_to(self.rows * C);
    }
}

/// `R` fixed rows, dynamic columns.
#[derive(Clone, Debug)]
pub struct DynColsStorage<T, const R: usize> {
    cols: usize,
    buffer: GrowBuffer<T>,
}

impl<T: Scalar, const R: usize> Storage for DynColsStorage<T, R> {
    type Elem = T;
    type Rows = Const<R>;
    type Cols = Dyn;

    fn try_new(rows: usize, cols: usize) -> Result<Self, ShapeError> {
        let len = check_shape::<T, Const<R>, Dyn>(rows, cols)?;
        Ok(Self {
            cols,
            buffer: GrowBuffer::new(len),
        })
    }

    fn try_resize(&mut self, rows: usize, cols: usize) -> Result<(), ShapeError> {
        let len = check_shape::<T, Const<R>, Dyn>(rows, cols)?;
        self.buffer.grow_to(len);
        self.cols = cols;
        Ok(())
    }

    #[inline]
    fn rows(&self) -> usize {
        R
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
        self.buffer.active(R * self.cols)
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self.buffer.active_mut(R * self.cols)
    }

    fn shrink_to_fit(&mut self) {
        self.buffer.shrink_to(R * self.cols);
    }
}
