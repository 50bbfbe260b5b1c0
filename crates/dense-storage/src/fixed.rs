//! Storage for matrices whose extents are both fixed at compile time.

use std::mem;

use dense_core::{Const, Scalar, ShapeError};

use crate::storage::{check_shape, Storage};

/// Inline `R x C` storage.
///
/// The elements live inside the value as `[[T; R]; C]`: one `[T; R]` per
/// column, which is exactly the column-major layout. Nothing is ever
/// heap-allocated and resize never changes anything.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedStorage<T, const R: usize, const C: usize> {
    data: [[T; R]; C],
}

impl<T: Scalar, const R: usize, const C: usize> Storage for FixedStorage<T, R, C> {
    type Elem = T;
    type Rows = Const<R>;
    type Cols = Const<C>;

    fn try_new(rows: usize, cols: usize) -> Result<Self, ShapeError> {
        check_shape::<T, Const<R>, Const<C>>(rows, cols)?;
        Ok(Self {
            data: [[T::default(); R]; C],
        })
    }

    fn try_resize(&mut self, rows: usize, cols: usize) -> Result<(), ShapeError> {
        check_shape::<T, Const<R>, Const<C>>(rows, cols).map(|_| ())
    }

    #[inline]
    fn rows(&self) -> usize {
        R
    }

    #[inline]
    fn cols(&self) -> usize {
        C
    }

    fn capacity(&self) -> usize {
        R * C
    }

    fn memory_bytes(&self) -> usize {
        mem::size_of::<[[T; R]; C]>()
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }
}
