//! Borrowed views over a matrix.
//!
//! A view forwards the expression contract to the matrix it borrows and
//! owns nothing. [`MatrixViewMut`] can write elements but has no way to
//! resize, so the borrowed buffer cannot be reallocated underneath it.

use std::fmt;

use dense_core::{Expr, ExprMut};

/// Read-only view of an expression, usually a [`Matrix`](crate::Matrix).
pub struct MatrixView<'a, M: ?Sized> {
    inner: &'a M,
}

impl<'a, M: ?Sized> MatrixView<'a, M> {
    /// Borrow `inner`.
    pub fn new(inner: &'a M) -> Self {
        Self { inner }
    }
}

impl<M: ?Sized> Clone for MatrixView<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: ?Sized> Copy for MatrixView<'_, M> {}

impl<M: Expr + ?Sized> Expr for MatrixView<'_, M> {
    type Scalar = M::Scalar;

    #[inline]
    fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        self.inner.cols()
    }

    #[inline]
    fn read(&self, row: usize, col: usize) -> Self::Scalar {
        self.inner.read(row, col)
    }
}

impl<M: fmt::Debug + ?Sized> fmt::Debug for MatrixView<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MatrixView").field(&self.inner).finish()
    }
}

/// Writable view of an expression, usually a [`Matrix`](crate::Matrix).
///
/// Supports element writes and the compound assignments from
/// [`ExprMut`], but not resizing assignment.
pub struct MatrixViewMut<'a, M: ?Sized> {
    inner: &'a mut M,
}

impl<'a, M: ?Sized> MatrixViewMut<'a, M> {
    /// Borrow `inner` mutably.
    pub fn new(inner: &'a mut M) -> Self {
        Self { inner }
    }

    /// A read-only view of the same value.
    pub fn as_view(&self) -> MatrixView<'_, M> {
        MatrixView::new(&*self.inner)
    }
}

impl<M: Expr + ?Sized> Expr for MatrixViewMut<'_, M> {
    type Scalar = M::Scalar;

    #[inline]
    fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        self.inner.cols()
    }

    #[inline]
    fn read(&self, row: usize, col: usize) -> Self::Scalar {
        self.inner.read(row, col)
    }
}

impl<M: ExprMut + ?Sized> ExprMut for MatrixViewMut<'_, M> {
    #[inline]
    fn write(&mut self, row: usize, col: usize) -> &mut Self::Scalar {
        self.inner.write(row, col)
    }
}

impl<M: fmt::Debug + ?Sized> fmt::Debug for MatrixViewMut<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MatrixViewMut").field(&self.inner).finish()
    }
}
