//! Core types and traits for the dense matrix workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the abstractions every other crate builds on:
//!
//! - [`Dim`] markers ([`Const`], [`Dyn`]) that describe whether a matrix
//!   axis is fixed at compile time or resolved at construction.
//! - The [`Scalar`] element bound.
//! - The expression capability contract ([`Expr`], [`ExprMut`],
//!   [`Resizable`]) with its generic compound-assignment behaviour.
//! - The [`eval`] engine that moves elements between expressions.
//! - Lazy arithmetic nodes in [`ops`].
//! - Shape and index error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dim;
pub mod error;
pub mod eval;
pub mod expr;
pub mod ops;
pub mod scalar;

// Public re-exports for the primary API surface.
pub use dim::{Const, Dim, Dyn, U1, U2, U3, U4};
pub use error::{Axis, IndexError, ShapeError};
pub use expr::{Expr, ExprMut, Resizable};
pub use ops::{Difference, ExprExt, Negated, Scaled, Sum};
pub use scalar::Scalar;
