//! The dense matrix value.
//!
//! [`Matrix<T, R, C>`] owns one storage strategy, chosen from `(R, C)` by
//! [`SelectStorage`], and implements the expression contract on top of it.
//! Every assignment resizes the destination to the source's shape first,
//! then copies through [`eval::assign`].

use std::fmt;
use std::ops::{AddAssign, DivAssign, Index, IndexMut, MulAssign, SubAssign};

use dense_core::{eval, Dim, Expr, ExprMut, Resizable, Scalar, ShapeError};
use dense_storage::{SelectStorage, Storage, StorageFor};

use crate::view::{MatrixView, MatrixViewMut};

/// A dense, column-major matrix with `R` rows and `C` columns.
///
/// `R` and `C` are each either [`Const<N>`](dense_core::Const) or
/// [`Dyn`](dense_core::Dyn). Fully fixed matrices keep their elements
/// inline and never touch the heap; any dynamic axis puts the elements in
/// a grow-only heap buffer.
///
/// Element `(row, col)` is stored at offset `row + col * rows()`.
pub struct Matrix<T, R, C>
where
    T: Scalar,
    (R, C): SelectStorage<T>,
{
    storage: StorageFor<T, R, C>,
}

impl<T, R, C> Matrix<T, R, C>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    (R, C): SelectStorage<T>,
{
    /// Create a `rows x cols` matrix with every element at `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if a fixed axis is given an extent other than its own, or if
    /// either extent is zero, or if the element count overflows.
    #[track_caller]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            storage: Storage::new(rows, cols),
        }
    }

    /// Create a `rows x cols` matrix, or report why the shape is illegal.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, ShapeError> {
        Ok(Self {
            storage: Storage::try_new(rows, cols)?,
        })
    }

    /// A `rows x cols` matrix of zeros.
    #[track_caller]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let mut m = Self::new(rows, cols);
        m.fill(T::zero());
        m
    }

    /// A `rows x cols` matrix with ones on the main diagonal.
    #[track_caller]
    pub fn identity(rows: usize, cols: usize) -> Self {
        Self::from_fn(rows, cols, |r, c| if r == c { T::one() } else { T::zero() })
    }

    /// A `rows x cols` matrix whose element `(r, c)` is `f(r, c)`.
    ///
    /// `f` is called in column-major order.
    #[track_caller]
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut m = Self::new(rows, cols);
        let data = m.storage.as_mut_slice();
        for col in 0..cols {
            for row in 0..rows {
                data[row + col * rows] = f(row, col);
            }
        }
        m
    }

    /// A `rows x cols` matrix copied from column-major `data`.
    pub fn from_column_slice(rows: usize, cols: usize, data: &[T]) -> Result<Self, ShapeError> {
        let mut m = Self::try_new(rows, cols)?;
        if data.len() != rows * cols {
            return Err(ShapeError::SliceLength {
                expected: rows * cols,
                got: data.len(),
            });
        }
        m.storage.as_mut_slice().copy_from_slice(data);
        Ok(m)
    }

    /// Evaluate `src` into a new matrix of the same shape.
    pub fn try_from_expr<E>(src: &E) -> Result<Self, ShapeError>
    where
        E: Expr<Scalar = T> + ?Sized,
    {
        let mut m = Self::try_new(src.rows(), src.cols())?;
        eval::assign(&mut m, src);
        Ok(m)
    }

    /// Evaluate `src` into a new matrix of the same shape.
    ///
    /// # Panics
    ///
    /// Panics if `src`'s shape is not representable by this matrix type.
    #[track_caller]
    pub fn from_expr<E>(src: &E) -> Self
    where
        E: Expr<Scalar = T> + ?Sized,
    {
        match Self::try_from_expr(src) {
            Ok(m) => m,
            Err(err) => panic!("{err}"),
        }
    }

    /// Resize to `src`'s shape and copy every element of `src`.
    ///
    /// Returns `self` so assignments can be chained.
    ///
    /// # Panics
    ///
    /// Panics if `src`'s shape is not representable by this matrix type.
    #[track_caller]
    pub fn assign<E>(&mut self, src: &E) -> &mut Self
    where
        E: Expr<Scalar = T> + ?Sized,
    {
        self.assign_expr(src)
    }

    /// Resize to `src`'s shape and copy every element of `src`.
    ///
    /// On error `self` is unchanged.
    pub fn try_assign<E>(&mut self, src: &E) -> Result<&mut Self, ShapeError>
    where
        E: Expr<Scalar = T> + ?Sized,
    {
        self.try_assign_expr(src)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.storage.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.storage.cols()
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Elements the current allocation can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Bytes held for elements, including capacity beyond the active
    /// `rows * cols`.
    pub fn memory_bytes(&self) -> usize {
        self.storage.memory_bytes()
    }

    /// Reshape to `rows x cols`.
    ///
    /// Element values are not carried over as a matrix: offsets below the
    /// old capacity keep whatever they held, anything newly exposed starts
    /// at `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if a fixed axis is given an extent other than its own, or if
    /// either extent is zero, or if the element count overflows.
    #[track_caller]
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.storage.resize(rows, cols);
    }

    /// Reshape to `rows x cols`, or report why the shape is illegal.
    pub fn try_resize(&mut self, rows: usize, cols: usize) -> Result<(), ShapeError> {
        self.storage.try_resize(rows, cols)
    }

    /// Release heap capacity beyond `rows * cols`. No-op for fixed shapes.
    pub fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit();
    }

    /// The elements in column-major order.
    ///
    /// A reallocating resize invalidates the slice; the borrow checker
    /// enforces that.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// The elements in column-major order, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    /// Address of the first element. Stable until a reallocating resize.
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_slice().as_ptr()
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) {
        self.storage.as_mut_slice().fill(value);
    }

    /// The element at `(row, col)`, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        eval::check_index(row, col, self.rows(), self.cols()).ok()?;
        self.storage.as_slice().get(row + col * self.rows())
    }

    /// The element at `(row, col)` mutably, or `None` if out of range.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        eval::check_index(row, col, self.rows(), self.cols()).ok()?;
        let rows = self.rows();
        self.storage.as_mut_slice().get_mut(row + col * rows)
    }

    /// A borrowed, read-only view.
    pub fn view(&self) -> MatrixView<'_, Self> {
        MatrixView::new(self)
    }

    /// A borrowed, writable view. It cannot resize the matrix.
    pub fn view_mut(&mut self) -> MatrixViewMut<'_, Self> {
        MatrixViewMut::new(self)
    }

    /// Linear offset of `(row, col)`.
    ///
    /// Range-checked in debug builds and with the `bounds-check` feature.
    #[inline]
    #[track_caller]
    fn offset(&self, row: usize, col: usize) -> usize {
        #[cfg(any(debug_assertions, feature = "bounds-check"))]
        {
            if let Err(err) = eval::check_index(row, col, self.rows(), self.cols()) {
                panic!("{err}");
            }
        }
        row + col * self.storage.rows()
    }
}

impl<T, R, C> Expr for Matrix<T, R, C>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    (R, C): SelectStorage<T>,
{
    type Scalar = T;

    #[inline]
    fn rows(&self) -> usize {
        self.storage.rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        self.storage.cols()
    }

    #[inline]
    #[track_caller]
    fn read(&self, row: usize, col: usize) -> T {
        self.storage.as_slice()[self.offset(row, col)]
    }
}

impl<T, R, C> ExprMut for Matrix<T, R, C>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    (R, C): SelectStorage<T>,
{
    #[inline]
    #[track_caller]
    fn write(&mut self, row: usize, col: usize) -> &mut T {
        let offset = self.offset(row, col);
        &mut self.storage.as_mut_slice()[offset]
    }
}

impl<T, R, C> Resizable for Matrix<T, R, C>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    (R, C): SelectStorage<T>,
{
    fn try_resize(&mut self, rows: usize, cols: usize) -> Result<(), ShapeError> {
        self.storage.try_resize(rows, cols)
    }
}

impl<T, R, C> Index<(usize, usize)> for Matrix<T, R, C>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    (R, C): SelectStorage<T>,
{
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.storage.as_slice()[self.offset(row, col)]
    }
}

impl<T, R, C> IndexMut<(usize, usize)> for Matrix<T, R, C>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    (R, C): SelectStorage<T>,
{
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.write(row, col)
    }
}

impl<T, R, C> Clone for Matrix<T, R, C>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    (R, C): SelectStorage<T>,
{
    fn clone(&self) -> Self {
        Self::from_expr(self)
    }

    /// Resize-then-copy into the existing storage.
    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T, R, C> Default for Matrix<T, R, C>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    (R, C): SelectStorage<T>,
{
    /// Fixed axes get their extent, dynamic axes get 1.
    fn default() -> Self {
        Self::new(R::default_extent(), C::default_extent())
    }
}

impl<T, R, C> PartialEq for Matrix<T, R, C>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    (R, C): SelectStorage<T>,
{
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.as_slice() == other.as_slice()
    }
}

impl<T, R, C> fmt::Debug for Matrix<T, R, C>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    (R, C): SelectStorage<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Vec<T>> = (0..self.rows())
            .map(|r| (0..self.cols()).map(|c| self.read(r, c)).collect())
            .collect();
        f.debug_struct("Matrix")
            .field("rows", &self.rows())
            .field("cols", &self.cols())
            .field("elements", &rows)
            .finish()
    }
}

impl<T, R, C, E> AddAssign<&E> for Matrix<T, R, C>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    (R, C): SelectStorage<T>,
    E: Expr<Scalar = T> + ?Sized,
{
    #[track_caller]
    fn add_assign(&mut self, rhs: &E) {
        self.add_assign_expr(rhs);
    }
}

impl<T, R, C, E> SubAssign<&E> for Matrix<T, R, C>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    (R, C): SelectStorage<T>,
    E: Expr<Scalar = T> + ?Sized,
{
    #[track_caller]
    fn sub_assign(&mut self, rhs: &E) {
        self.sub_assign_expr(rhs);
    }
}

impl<T, R, C> MulAssign<T> for Matrix<T, R, C>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    (R, C): SelectStorage<T>,
{
    fn mul_assign(&mut self, factor: T) {
        self.mul_assign_scalar(factor);
    }
}

impl<T, R, C> DivAssign<T> for Matrix<T, R, C>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    (R, C): SelectStorage<T>,
{
    fn div_assign(&mut self, divisor: T) {
        self.div_assign_scalar(divisor);
    }
}
