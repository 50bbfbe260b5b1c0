//! Compile-time selection of a storage strategy from a shape descriptor.
//!
//! The shape descriptor is the pair of dimension markers `(R, C)`. Each of
//! the four combinations of [`Const`] and [`Dyn`] maps to one concrete
//! storage type; the mapping is resolved during type checking, so no
//! storage access ever branches on the shape category.

use std::fmt::Debug;

use dense_core::{Const, Dyn, Scalar};

use crate::dynamic::DynStorage;
use crate::fixed::FixedStorage;
use crate::partial::{DynColsStorage, DynRowsStorage};
use crate::storage::Storage;

/// Maps a `(rows, cols)` dimension-marker pair to its storage strategy.
pub trait SelectStorage<T: Scalar> {
    /// The storage strategy for this shape.
    type Storage: Storage<Elem = T> + Clone + Debug;
}

impl<T: Scalar, const R: usize, const C: usize> SelectStorage<T> for (Const<R>, Const<C>) {
    type Storage = FixedStorage<T, R, C>;
}

impl<T: Scalar, const C: usize> SelectStorage<T> for (Dyn, Const<C>) {
    type Storage = DynRowsStorage<T, C>;
}

impl<T: Scalar, const R: usize> SelectStorage<T> for (Const<R>, Dyn) {
    type Storage = DynColsStorage<T, R>;
}

impl<T: Scalar> SelectStorage<T> for (Dyn, Dyn) {
    type Storage = DynStorage<T>;
}

/// The storage strategy for elements `T` and dimension markers `R`, `C`.
pub type StorageFor<T, R, C> = <(R, C) as SelectStorage<T>>::Storage;
