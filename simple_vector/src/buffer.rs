use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use core::slice::SliceIndex;

use crate::error::{Result, SimpleVectorError};

/// Exclusive owner of a single heap allocation holding a fixed number of slots.
///
/// Every slot always holds an initialized `T`. A zero-slot buffer performs no
/// allocation. There is no `Clone` impl: storage changes hands only through a
/// Rust move, [`OwnedBuffer::swap`] or [`OwnedBuffer::take`], so two buffers
/// never alias.
///
/// The buffer knows nothing about sizes or growth; it only acquires, releases
/// and exposes storage.
#[derive(Debug)]
pub struct OwnedBuffer<T> {
    slots: Box<[T]>,
}

impl<T> OwnedBuffer<T> {
    /// Creates a buffer that owns no storage.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            slots: Box::default(),
        }
    }

    fn allocate(count: usize) -> Result<Vec<T>> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(count)
            .map_err(|_| SimpleVectorError::AllocationFailed { requested: count })?;
        Ok(slots)
    }

    /// Allocates exactly as many slots as `items` yields and moves the items in.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::AllocationFailed` if the allocator refuses
    /// the request. No item is consumed in that case.
    pub fn try_from_exact<I>(items: I) -> Result<Self>
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator<Item = T>,
    {
        let items = items.into_iter();
        let mut slots = Self::allocate(items.len())?;
        slots.extend(items);
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    /// Number of slots, live or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if the buffer owns heap storage. Zero-sized element
    /// types never do, whatever the slot count.
    #[must_use]
    pub fn is_allocated(&self) -> bool {
        core::mem::size_of::<T>() != 0 && !self.slots.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Start address of the storage.
    ///
    /// Always valid to compute, but must not be dereferenced when the buffer
    /// is empty.
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        self.slots.as_ptr()
    }

    /// Exchanges storage with `other`. Constant time, never allocates.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.slots, &mut other.slots);
    }

    /// Moves the storage out, leaving `self` owning nothing.
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self {
            slots: core::mem::take(&mut self.slots),
        }
    }

    /// Gives up ownership of the storage.
    #[must_use]
    pub fn release(self) -> Box<[T]> {
        self.slots
    }
}

impl<T: Default> OwnedBuffer<T> {
    /// Allocates `count` slots holding `T::default()`.
    ///
    /// # Panics
    ///
    /// Diverts to the global allocation error handler if the allocation fails.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self::try_new(count).unwrap_or_else(|err| crate::error::fail::<T>(err))
    }

    /// Allocates `count` slots holding `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::AllocationFailed` if the allocator refuses
    /// the request.
    pub fn try_new(count: usize) -> Result<Self> {
        Self::try_from_padded(core::iter::empty(), count)
    }

    /// Allocates `count` slots, fills the leading ones from `items` and the
    /// rest with `T::default()`. Items beyond `count` are not consumed.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::AllocationFailed` if the allocator refuses
    /// the request. No item is consumed in that case.
    pub fn try_from_padded<I>(items: I, count: usize) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut slots = Self::allocate(count)?;
        slots.extend(items.into_iter().take(count));
        slots.resize_with(count, T::default);
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }
}

impl<T> Default for OwnedBuffer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Box<[T]>> for OwnedBuffer<T> {
    fn from(slots: Box<[T]>) -> Self {
        Self { slots }
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for OwnedBuffer<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.slots[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for OwnedBuffer<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.slots[index]
    }
}
