//! Elementwise evaluation between expressions.
//!
//! The loops here are the only place elements move between operands.
//! Traversal is column-major, matching the storage layout, so a
//! matrix-to-matrix copy walks both buffers linearly.

use crate::error::{IndexError, ShapeError};
use crate::expr::{Expr, ExprMut};

/// Check that two shapes are equal.
pub fn check_same_shape(expected: (usize, usize), got: (usize, usize)) -> Result<(), ShapeError> {
    if expected == got {
        Ok(())
    } else {
        Err(ShapeError::ShapeMismatch { expected, got })
    }
}

/// Check that `(row, col)` lies within `[0, rows) x [0, cols)`.
#[inline]
pub fn check_index(row: usize, col: usize, rows: usize, cols: usize) -> Result<(), IndexError> {
    if row < rows && col < cols {
        Ok(())
    } else {
        Err(IndexError::OutOfRange {
            row,
            col,
            rows,
            cols,
        })
    }
}

/// Copy every element of `src` into `dst`.
///
/// # Panics
///
/// Panics if the shapes differ.
#[track_caller]
pub fn assign<D, S>(dst: &mut D, src: &S)
where
    D: ExprMut + ?Sized,
    S: Expr<Scalar = D::Scalar> + ?Sized,
{
    zip_apply(dst, src, |_, s| s);
}

/// `dst[i, j] = f(dst[i, j], src[i, j])` for every element.
///
/// # Panics
///
/// Panics if the shapes differ.
#[track_caller]
pub fn zip_apply<D, S, F>(dst: &mut D, src: &S, mut f: F)
where
    D: ExprMut + ?Sized,
    S: Expr<Scalar = D::Scalar> + ?Sized,
    F: FnMut(D::Scalar, D::Scalar) -> D::Scalar,
{
    if let Err(err) = check_same_shape(dst.shape(), src.shape()) {
        panic!("{err}");
    }
    let (rows, cols) = dst.shape();
    for col in 0..cols {
        for row in 0..rows {
            let value = src.read(row, col);
            let slot = dst.write(row, col);
            *slot = f(*slot, value);
        }
    }
}

/// `dst[i, j] = f(dst[i, j])` for every element.
pub fn map_in_place<D, F>(dst: &mut D, mut f: F)
where
    D: ExprMut + ?Sized,
    F: FnMut(D::Scalar) -> D::Scalar,
{
    let (rows, cols) = dst.shape();
    for col in 0..cols {
        for row in 0..rows {
            let slot = dst.write(row, col);
            *slot = f(*slot);
        }
    }
}
