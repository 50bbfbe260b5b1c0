//! Storage strategies for dense, column-major matrices.
//!
//! A matrix type names a row [`Dim`](dense_core::Dim) and a column
//! [`Dim`](dense_core::Dim). That pair selects, at compile time, exactly one
//! of four storage strategies, all behind the [`Storage`] trait:
//!
//! ```text
//! (Const<R>, Const<C>) → FixedStorage<T, R, C>   inline [[T; R]; C], never reallocates
//! (Dyn,      Const<C>) → DynRowsStorage<T, C>    GrowBuffer, grows on rows * C
//! (Const<R>, Dyn)      → DynColsStorage<T, R>    GrowBuffer, grows on R * cols
//! (Dyn,      Dyn)      → DynStorage<T>           GrowBuffer, grows on rows * cols
//! ```
//!
//! # Resize policy
//!
//! Dynamic strategies keep a high-water allocation. A resize whose element
//! count fits in it only updates the recorded extents; a resize past it
//! replaces the allocation with a fresh one. Capacity never shrinks on the
//! resize path; [`Storage::shrink_to_fit`] is the explicit way back down.
//!
//! Element `(row, col)` always lives at offset `row + col * rows`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod dynamic;
pub mod fixed;
pub mod partial;
pub mod select;
pub mod storage;

// Public re-exports for the primary API surface.
pub use buffer::GrowBuffer;
pub use dynamic::DynStorage;
pub use fixed::FixedStorage;
pub use partial::{DynColsStorage, DynRowsStorage};
pub use select::{SelectStorage, StorageFor};
pub use storage::Storage;
