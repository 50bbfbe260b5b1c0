//! The expression capability contract.
//!
//! Anything that can appear as an operand of matrix arithmetic implements
//! [`Expr`]: a shape plus an element read at `(row, col)`. Writable
//! operands add [`ExprMut`], which supplies compound assignment once, for
//! every implementor. Owning operands that can change shape add
//! [`Resizable`], which supplies resize-then-assign.
//!
//! All dispatch is static: the provided methods are monomorphised for each
//! concrete operand type and call back into its `read`/`write`.

use crate::error::ShapeError;
use crate::eval;
use crate::scalar::Scalar;

/// A readable 2-D operand.
pub trait Expr {
    /// Element type.
    type Scalar: Scalar;

    /// Current row count.
    fn rows(&self) -> usize;

    /// Current column count.
    fn cols(&self) -> usize;

    /// Evaluate the element at `(row, col)`.
    ///
    /// Callers guarantee `row < rows()` and `col < cols()`.
    fn read(&self, row: usize, col: usize) -> Self::Scalar;

    /// `(rows(), cols())`.
    fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }
}

impl<E: Expr + ?Sized> Expr for &E {
    type Scalar = E::Scalar;

    #[inline]
    fn rows(&self) -> usize {
        (**self).rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        (**self).cols()
    }

    #[inline]
    fn read(&self, row: usize, col: usize) -> Self::Scalar {
        (**self).read(row, col)
    }
}

/// A writable 2-D operand.
///
/// The compound-assignment methods are implemented here once and reused
/// by every implementor. The operand's shape never changes through them;
/// the right-hand side must already match it.
pub trait ExprMut: Expr {
    /// Mutable access to the element at `(row, col)`.
    fn write(&mut self, row: usize, col: usize) -> &mut Self::Scalar;

    /// `self[i, j] += other[i, j]` for every element.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    #[track_caller]
    fn add_assign_expr<E>(&mut self, other: &E) -> &mut Self
    where
        E: Expr<Scalar = Self::Scalar> + ?Sized,
    {
        eval::zip_apply(self, other, |a, b| a + b);
        self
    }

    /// `self[i, j] -= other[i, j]` for every element.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    #[track_caller]
    fn sub_assign_expr<E>(&mut self, other: &E) -> &mut Self
    where
        E: Expr<Scalar = Self::Scalar> + ?Sized,
    {
        eval::zip_apply(self, other, |a, b| a - b);
        self
    }

    /// Multiply every element by `factor`.
    fn mul_assign_scalar(&mut self, factor: Self::Scalar) -> &mut Self {
        eval::map_in_place(self, |a| a * factor);
        self
    }

    /// Divide every element by `divisor`.
    fn div_assign_scalar(&mut self, divisor: Self::Scalar) -> &mut Self {
        eval::map_in_place(self, |a| a / divisor);
        self
    }
}

/// A writable operand that owns its shape.
///
/// Assignment from an expression resizes the destination to the source's
/// shape before any element is read, so the evaluation engine never sees
/// a mismatch.
pub trait Resizable: ExprMut {
    /// Change the shape to `rows x cols`, or report why that shape is not
    /// representable.
    fn try_resize(&mut self, rows: usize, cols: usize) -> Result<(), ShapeError>;

    /// Change the shape to `rows x cols`.
    ///
    /// # Panics
    ///
    /// Panics if the shape violates a fixed extent or has a zero extent.
    #[track_caller]
    fn resize(&mut self, rows: usize, cols: usize) {
        if let Err(err) = self.try_resize(rows, cols) {
            panic!("{err}");
        }
    }

    /// Resize to `src`'s shape, then copy every element of `src`.
    fn try_assign_expr<E>(&mut self, src: &E) -> Result<&mut Self, ShapeError>
    where
        E: Expr<Scalar = Self::Scalar> + ?Sized,
    {
        self.try_resize(src.rows(), src.cols())?;
        eval::assign(self, src);
        Ok(self)
    }

    /// Resize to `src`'s shape, then copy every element of `src`.
    ///
    /// # Panics
    ///
    /// Panics if `src`'s shape is not representable by `Self`.
    #[track_caller]
    fn assign_expr<E>(&mut self, src: &E) -> &mut Self
    where
        E: Expr<Scalar = Self::Scalar> + ?Sized,
    {
        match self.try_assign_expr(src) {
            Ok(this) => this,
            Err(err) => panic!("{err}"),
        }
    }
}
