//! Lazy arithmetic expression nodes.
//!
//! Each node borrows or owns its operands and computes an element only
//! when [`Expr::read`] is called, which normally happens inside
//! [`eval::assign`](crate::eval::assign) when the node is assigned into
//! a matrix. Nothing is materialised in between.

use num_traits::Zero;

use crate::eval::check_same_shape;
use crate::expr::Expr;

/// Elementwise `lhs + rhs`.
#[derive(Clone, Copy, Debug)]
pub struct Sum<A, B> {
    lhs: A,
    rhs: B,
}

impl<A, B> Sum<A, B>
where
    A: Expr,
    B: Expr<Scalar = A::Scalar>,
{
    /// Build the node.
    ///
    /// # Panics
    ///
    /// Panics if the operand shapes differ.
    #[track_caller]
    pub fn new(lhs: A, rhs: B) -> Self {
        if let Err(err) = check_same_shape(lhs.shape(), rhs.shape()) {
            panic!("{err}");
        }
        Self { lhs, rhs }
    }
}

impl<A, B> Expr for Sum<A, B>
where
    A: Expr,
    B: Expr<Scalar = A::Scalar>,
{
    type Scalar = A::Scalar;

    fn rows(&self) -> usize {
        self.lhs.rows()
    }

    fn cols(&self) -> usize {
        self.lhs.cols()
    }

    #[inline]
    fn read(&self, row: usize, col: usize) -> Self::Scalar {
        self.lhs.read(row, col) + self.rhs.read(row, col)
    }
}

/// Elementwise `lhs - rhs`.
#[derive(Clone, Copy, Debug)]
pub struct Difference<A, B> {
    lhs: A,
    rhs: B,
}

impl<A, B> Difference<A, B>
where
    A: Expr,
    B: Expr<Scalar = A::Scalar>,
{
    /// Build the node.
    ///
    /// # Panics
    ///
    /// Panics if the operand shapes differ.
    #[track_caller]
    pub fn new(lhs: A, rhs: B) -> Self {
        if let Err(err) = check_same_shape(lhs.shape(), rhs.shape()) {
            panic!("{err}");
        }
        Self { lhs, rhs }
    }
}

impl<A, B> Expr for Difference<A, B>
where
    A: Expr,
    B: Expr<Scalar = A::Scalar>,
{
    type Scalar = A::Scalar;

    fn rows(&self) -> usize {
        self.lhs.rows()
    }

    fn cols(&self) -> usize {
        self.lhs.cols()
    }

    #[inline]
    fn read(&self, row: usize, col: usize) -> Self::Scalar {
        self.lhs.read(row, col) - self.rhs.read(row, col)
    }
}

/// Every element of `inner` multiplied by a scalar.
#[derive(Clone, Copy, Debug)]
pub struct Scaled<A: Expr> {
    inner: A,
    factor: A::Scalar,
}

impl<A: Expr> Scaled<A> {
    /// Build the node.
    pub fn new(inner: A, factor: A::Scalar) -> Self {
        Self { inner, factor }
    }
}

impl<A: Expr> Expr for Scaled<A> {
    type Scalar = A::Scalar;

    fn rows(&self) -> usize {
        self.inner.rows()
    }

    fn cols(&self) -> usize {
        self.inner.cols()
    }

    #[inline]
    fn read(&self, row: usize, col: usize) -> Self::Scalar {
        self.inner.read(row, col) * self.factor
    }
}

/// Every element of `inner` negated.
#[derive(Clone, Copy, Debug)]
pub struct Negated<A> {
    inner: A,
}

impl<A: Expr> Negated<A> {
    /// Build the node.
    pub fn new(inner: A) -> Self {
        Self { inner }
    }
}

impl<A: Expr> Expr for Negated<A> {
    type Scalar = A::Scalar;

    fn rows(&self) -> usize {
        self.inner.rows()
    }

    fn cols(&self) -> usize {
        self.inner.cols()
    }

    #[inline]
    fn read(&self, row: usize, col: usize) -> Self::Scalar {
        A::Scalar::zero() - self.inner.read(row, col)
    }
}

/// Builder methods for composing expression nodes.
///
/// Methods take the operand by value; pass `&matrix` to keep the matrix
/// usable afterwards (`(&a).sum(&b)`).
pub trait ExprExt: Expr + Sized {
    /// `self + rhs`, lazily.
    #[track_caller]
    fn sum<B>(self, rhs: B) -> Sum<Self, B>
    where
        B: Expr<Scalar = Self::Scalar>,
    {
        Sum::new(self, rhs)
    }

    /// `self - rhs`, lazily.
    #[track_caller]
    fn difference<B>(self, rhs: B) -> Difference<Self, B>
    where
        B: Expr<Scalar = Self::Scalar>,
    {
        Difference::new(self, rhs)
    }

    /// `self * factor`, lazily.
    fn scaled(self, factor: Self::Scalar) -> Scaled<Self> {
        Scaled::new(self, factor)
    }

    /// `-self`, lazily.
    fn negated(self) -> Negated<Self> {
        Negated::new(self)
    }
}

impl<E: Expr> ExprExt for E {}
