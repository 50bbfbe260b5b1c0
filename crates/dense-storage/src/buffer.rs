//! Grow-only heap buffer shared by the dynamic storage strategies.
//!
//! [`GrowBuffer`] owns a `Vec<T>` whose length is the high-water element
//! count. Growing past it swaps in a fresh allocation; shrinking the
//! active region never touches the allocation.

use dense_core::Scalar;

/// Heap allocation that only grows on the resize path.
#[derive(Clone, Debug)]
pub struct GrowBuffer<T> {
    /// Backing storage. `data.len()` is the capacity in elements; every
    /// slot is initialised.
    data: Vec<T>,
}

impl<T: Scalar> GrowBuffer<T> {
    /// Allocate `len` default-initialised elements.
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![T::default(); len],
        }
    }

    /// Make room for `len` active elements.
    ///
    /// Returns `true` if a new allocation was made. The new allocation is
    /// distinct from the old one: the old buffer is still alive while the
    /// new one is requested. Elements at offsets below the old capacity are
    /// carried over; the rest start at `T::default()`.
    pub fn grow_to(&mut self, len: usize) -> bool {
        if len <= self.data.len() {
            return false;
        }
        let mut fresh = Vec::with_capacity(len);
        fresh.extend_from_slice(&self.data);
        fresh.resize(len, T::default());
        log::trace!(
            target: "dense_storage",
            "regrow buffer: {} -> {} elements",
            self.data.len(),
            len
        );
        self.data = fresh;
        true
    }

    /// Reallocate down to exactly `len` elements if the buffer is larger.
    pub fn shrink_to(&mut self, len: usize) {
        if self.data.len() <= len {
            return;
        }
        log::trace!(
            target: "dense_storage",
            "shrink buffer: {} -> {} elements",
            self.data.len(),
            len
        );
        self.data = self.data[..len].to_vec();
    }

    /// The first `len` elements.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds the capacity.
    #[inline]
    pub fn active(&self, len: usize) -> &[T] {
        &self.data[..len]
    }

    /// The first `len` elements, mutably.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds the capacity.
    #[inline]
    pub fn active_mut(&mut self, len: usize) -> &mut [T] {
        &mut self.data[..len]
    }

    /// Capacity in elements.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Memory used by the backing allocation, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_default_initialised() {
        let buf = GrowBuffer::<f32>::new(8);
        assert_eq!(buf.capacity(), 8);
        assert!(buf.active(8).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn grow_within_capacity_keeps_allocation() {
        let mut buf = GrowBuffer::<i32>::new(16);
        let ptr = buf.active(16).as_ptr();
        assert!(!buf.grow_to(4));
        assert!(!buf.grow_to(16));
        assert_eq!(buf.active(16).as_ptr(), ptr);
    }

    #[test]
    fn grow_past_capacity_reallocates_and_keeps_prefix() {
        let mut buf = GrowBuffer::<i32>::new(3);
        buf.active_mut(3).copy_from_slice(&[7, 8, 9]);
        let ptr = buf.active(3).as_ptr();
        assert!(buf.grow_to(5));
        assert_ne!(buf.active(5).as_ptr(), ptr);
        assert_eq!(buf.active(5), &[7, 8, 9, 0, 0]);
        assert_eq!(buf.capacity(), 5);
    }

    #[test]
    fn shrink_to_releases_slack() {
        let mut buf = GrowBuffer::<f64>::new(10);
        buf.shrink_to(4);
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.memory_bytes(), 32);
        buf.shrink_to(6);
        assert_eq!(buf.capacity(), 4);
    }

    #[test]
    #[should_panic]
    fn active_past_capacity_panics() {
        let buf = GrowBuffer::<f64>::new(2);
        let _ = buf.active(3);
    }
}
