//! Compile-time dimension markers.
//!
//! A matrix type names one [`Dim`] per axis. [`Const<N>`] bakes the extent
//! into the type; [`Dyn`] defers it to construction. The pair of markers
//! is the shape descriptor that `dense-storage` uses to pick a storage
//! strategy.

use std::fmt::Debug;

use crate::error::{Axis, ShapeError};

/// A dimension marker: either a fixed extent or "dynamic".
pub trait Dim: Copy + Debug + Default + Eq + 'static {
    /// The compile-time extent, or `None` for a dynamic axis.
    const FIXED: Option<usize>;

    /// Check that `extent` is a legal extent for this axis.
    ///
    /// A fixed axis accepts exactly its compile-time extent. Every axis,
    /// fixed or dynamic, rejects zero.
    fn check(axis: Axis, extent: usize) -> Result<(), ShapeError> {
        if extent == 0 {
            return Err(ShapeError::ZeroExtent { axis });
        }
        match Self::FIXED {
            Some(expected) if expected != extent => Err(ShapeError::FixedExtentMismatch {
                axis,
                expected,
                got: extent,
            }),
            _ => Ok(()),
        }
    }

    /// Whether this axis is resolved at construction time.
    fn is_dynamic() -> bool {
        Self::FIXED.is_none()
    }

    /// The extent a default-constructed matrix gets on this axis:
    /// the fixed extent, or 1 for a dynamic axis.
    fn default_extent() -> usize {
        Self::FIXED.unwrap_or(1)
    }
}

/// An axis whose extent `N` is fixed at compile time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Const<const N: usize>;

impl<const N: usize> Dim for Const<N> {
    const FIXED: Option<usize> = Some(N);
}

/// An axis whose extent is chosen when a matrix is constructed or resized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dyn;

impl Dim for Dyn {
    const FIXED: Option<usize> = None;
}

/// Fixed extent 1 (the collapsed axis of a vector).
pub type U1 = Const<1>;
/// Fixed extent 2.
pub type U2 = Const<2>;
/// Fixed extent 3.
pub type U3 = Const<3>;
/// Fixed extent 4.
pub type U4 = Const<4>;
