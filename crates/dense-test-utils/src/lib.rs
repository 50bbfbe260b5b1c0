//! Test utilities and mock types for dense development.
//!
//! Provides closure-backed mock implementations of [`Expr`]
//! ([`MockExpr`], [`CountingExpr`]), deterministic matrix fixtures and a
//! one-call logger setup for tests that want to see storage traces.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::Cell;

use dense_core::{Expr, Scalar};

pub use fixtures::{init_logging, sequential, sequential_i32};

/// An [`Expr`] whose elements come from a closure.
///
/// Stands in for a lazily evaluated expression that is not a matrix.
pub struct MockExpr<T, F> {
    rows: usize,
    cols: usize,
    f: F,
    _scalar: std::marker::PhantomData<T>,
}

impl<T, F> MockExpr<T, F>
where
    T: Scalar,
    F: Fn(usize, usize) -> T,
{
    pub fn new(rows: usize, cols: usize, f: F) -> Self {
        Self {
            rows,
            cols,
            f,
            _scalar: std::marker::PhantomData,
        }
    }
}

impl<T, F> Expr for MockExpr<T, F>
where
    T: Scalar,
    F: Fn(usize, usize) -> T,
{
    type Scalar = T;

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn read(&self, row: usize, col: usize) -> T {
        (self.f)(row, col)
    }
}

/// Wraps an [`Expr`] and counts element reads.
///
/// Used to check that assignment evaluates every source element exactly
/// once and reads nothing when the destination cannot take the shape.
pub struct CountingExpr<E> {
    inner: E,
    reads: Cell<usize>,
}

impl<E: Expr> CountingExpr<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            reads: Cell::new(0),
        }
    }

    /// Number of `read` calls so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl<E: Expr> Expr for CountingExpr<E> {
    type Scalar = E::Scalar;

    fn rows(&self) -> usize {
        self.inner.rows()
    }

    fn cols(&self) -> usize {
        self.inner.cols()
    }

    fn read(&self, row: usize, col: usize) -> E::Scalar {
        self.reads.set(self.reads.get() + 1);
        self.inner.read(row, col)
    }
}
