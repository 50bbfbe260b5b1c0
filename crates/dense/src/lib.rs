//! Dense matrices whose rows and columns are each fixed at compile time or
//! chosen at construction.
//!
//! This is the facade crate: it defines [`Matrix`], its borrowed views and
//! the shape aliases, and re-exports the pieces of `dense-core` and
//! `dense-storage` a caller needs.
//!
//! # Quick start
//!
//! ```rust
//! use dense::prelude::*;
//!
//! // Fixed 3x3: inline storage, no heap allocation.
//! let mut a = Matrix3d::identity(3, 3);
//! a[(0, 2)] = 5.0;
//!
//! // Fully dynamic: assignment resizes the destination first.
//! let mut b = MatrixXd::new(1, 1);
//! b.assign(&a);
//! assert_eq!(b.shape(), (3, 3));
//!
//! // Compound assignment and lazy expressions come from the generic base.
//! b += &a;
//! b *= 0.5;
//! let c = MatrixXd::from_expr(&(&a).sum(&b));
//! assert_eq!(c[(0, 2)], 10.0);
//! ```
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`matrix`] | [`Matrix`] |
//! | [`view`] | [`MatrixView`], [`MatrixViewMut`] |
//! | [`aliases`] | `Matrix3f`, `VectorXd`, `RowVector2i`, ... |
//! | [`types`] | `dense-core`: dimension markers, traits, evaluation, errors |
//! | [`storage`] | `dense-storage`: the four storage strategies |
//!
//! # Bounds checking
//!
//! Element access through `m[(r, c)]`, [`Expr::read`] and
//! [`ExprMut::write`] panics on an out-of-range index in debug builds, or
//! in any build with the `bounds-check` feature. Otherwise the offset is
//! computed without a range check. [`Matrix::get`] is always checked.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod aliases;
pub mod matrix;
pub mod view;

/// Dimension markers, scalar and expression traits, evaluation and errors
/// (`dense-core`).
pub use dense_core as types;

/// Storage strategies (`dense-storage`).
pub use dense_storage as storage;

pub use aliases::*;
pub use dense_core::{
    Axis, Const, Dim, Dyn, Expr, ExprExt, ExprMut, IndexError, Resizable, Scalar, ShapeError,
    U1, U2, U3, U4,
};
pub use matrix::Matrix;
pub use view::{MatrixView, MatrixViewMut};

#[cfg(feature = "complex")]
pub use num_complex::Complex;

/// Common imports.
///
/// ```rust
/// use dense::prelude::*;
/// ```
pub mod prelude {
    pub use crate::aliases::*;
    pub use crate::matrix::Matrix;
    pub use crate::view::{MatrixView, MatrixViewMut};
    pub use dense_core::{
        Const, Dim, Dyn, Expr, ExprExt, ExprMut, Resizable, Scalar, ShapeError, U1, U2, U3, U4,
    };

    #[cfg(feature = "complex")]
    pub use num_complex::Complex;
}
