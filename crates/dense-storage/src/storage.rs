//! The contract shared by all storage strategies.

use std::mem;

use dense_core::{Axis, Dim, Scalar, ShapeError};

/// Owned, contiguous, column-major element storage with a shape.
///
/// Implementors differ only in which extents are compile-time constants
/// and in how they react to [`try_resize`](Storage::try_resize).
pub trait Storage: Sized {
    /// Element type.
    type Elem: Scalar;
    /// Row dimension marker.
    type Rows: Dim;
    /// Column dimension marker.
    type Cols: Dim;

    /// Allocate storage for a `rows x cols` matrix.
    ///
    /// Elements start at `Elem::default()`.
    fn try_new(rows: usize, cols: usize) -> Result<Self, ShapeError>;

    /// Allocate storage for a `rows x cols` matrix.
    ///
    /// # Panics
    ///
    /// Panics if a fixed extent is not matched, an extent is zero, or
    /// `rows * cols` elements cannot be addressed.
    #[track_caller]
    fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Ok(storage) => storage,
            Err(err) => panic!("{err}"),
        }
    }

    /// Reshape to `rows x cols`, reallocating only if the new element
    /// count exceeds the current capacity.
    ///
    /// Element values after a resize are not meaningful as a matrix; the
    /// caller is expected to overwrite them.
    fn try_resize(&mut self, rows: usize, cols: usize) -> Result<(), ShapeError>;

    /// Reshape to `rows x cols`.
    ///
    /// # Panics
    ///
    /// Panics if a fixed extent is not matched, an extent is zero, or
    /// `rows * cols` elements cannot be addressed.
    #[track_caller]
    fn resize(&mut self, rows: usize, cols: usize) {
        if let Err(err) = self.try_resize(rows, cols) {
            panic!("{err}");
        }
    }

    /// Current row count.
    fn rows(&self) -> usize;

    /// Current column count.
    fn cols(&self) -> usize;

    /// Number of elements the current allocation can hold.
    fn capacity(&self) -> usize;

    /// Bytes held for elements: the whole capacity, not just the active
    /// region. Inline storage reports the size of its array.
    fn memory_bytes(&self) -> usize;

    /// The active `rows * cols` elements, column-major.
    fn as_slice(&self) -> &[Self::Elem];

    /// The active `rows * cols` elements, column-major.
    fn as_mut_slice(&mut self) -> &mut [Self::Elem];

    /// Release capacity beyond the active elements. No-op for fixed storage.
    fn shrink_to_fit(&mut self) {}
}

/// Validate both extents against their dimension markers and return the
/// element count `rows * cols`.
///
/// The count and its size in bytes must both fit; a shape that passes is
/// safe to multiply out anywhere else.
pub(crate) fn check_shape<T, R: Dim, C: Dim>(
    rows: usize,
    cols: usize,
) -> Result<usize, ShapeError> {
    R::check(Axis::Rows, rows)?;
    C::check(Axis::Cols, cols)?;
    rows
        .checked_mul(cols)
        .filter(|&len| {
            len.checked_mul(mem::size_of::<T>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(ShapeError::TooLarge { rows, cols })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dense_core::{Dyn, U2};

    #[test]
    fn check_shape_returns_element_count() {
        assert_eq!(check_shape::<f64, Dyn, U2>(5, 2), Ok(10));
    }

    #[test]
    fn check_shape_rejects_overflowing_count() {
        let rows = usize::MAX / 2 + 1;
        assert_eq!(
            check_shape::<u8, Dyn, Dyn>(rows, 2),
            Err(ShapeError::TooLarge { rows, cols: 2 })
        );
    }

    #[test]
    fn check_shape_rejects_overflowing_byte_size() {
        let rows = usize::MAX / 8;
        assert_eq!(
            check_shape::<f64, Dyn, U2>(rows, 2),
            Err(ShapeError::TooLarge { rows, cols: 2 })
        );
    }

    #[test]
    fn extent_errors_take_precedence() {
        assert_eq!(
            check_shape::<f64, Dyn, U2>(usize::MAX, 3),
            Err(ShapeError::FixedExtentMismatch {
                axis: Axis::Cols,
                expected: 2,
                got: 3,
            })
        );
    }
}
