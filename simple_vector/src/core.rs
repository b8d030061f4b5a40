use crate::buffer::OwnedBuffer;
use crate::error::{fail, Result, SimpleVectorError};
use crate::growth;
use crate::iter::{Iter, IterMut};
use crate::reserve::ReserveProxy;

/// A growable array on top of a single [`OwnedBuffer`].
///
/// The buffer's slot count is the capacity. Slots `[0, len)` are live;
/// the slots after them hold defaults or values left behind by `pop_back`,
/// `erase`, `clear` and relocation, and are never handed out.
pub struct SimpleVector<T> {
    items: OwnedBuffer<T>,
    size: usize,
}

impl<T> SimpleVector<T> {
    /// Creates an empty vector. Does not allocate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: OwnedBuffer::empty(),
            size: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items[..self.size]
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items[..self.size]
    }

    fn check_bounds(&self, index: usize) -> Result<()> {
        if index >= self.size {
            Err(SimpleVectorError::IndexOutOfBounds {
                index,
                length: self.size,
            })
        } else {
            Ok(())
        }
    }

    /// Gets the element at `index`, or `None` past the live range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Bounds-checked access.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::IndexOutOfBounds` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.check_bounds(index)?;
        Ok(&self.items[index])
    }

    /// Bounds-checked mutable access.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::IndexOutOfBounds` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_bounds(index)?;
        Ok(&mut self.items[index])
    }

    /// Forgets every element without touching the capacity. O(1).
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Drops the last element out of the live range. No-op on an empty vector.
    pub fn pop_back(&mut self) {
        if self.size > 0 {
            self.size -= 1;
        }
    }

    /// Removes the element at `index`, shifting the tail one slot left.
    ///
    /// Returns the index of the element that now occupies the erased slot,
    /// which equals `len()` when the last element was erased.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        assert!(
            index < self.size,
            "Index {} out of bounds for vector of length {}",
            index,
            self.size
        );
        self.shift_left(index)
    }

    /// Removes the element at `index`, shifting the tail one slot left.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::IndexOutOfBounds` if `index >= len()`;
    /// the vector is left unchanged.
    pub fn try_erase(&mut self, index: usize) -> Result<usize> {
        self.check_bounds(index)?;
        Ok(self.shift_left(index))
    }

    fn shift_left(&mut self, index: usize) -> usize {
        // The erased value rotates into the first non-live slot.
        self.items[index..self.size].rotate_left(1);
        self.size -= 1;
        index
    }

    /// Exchanges contents with `other` in constant time.
    pub fn swap(&mut self, other: &mut Self) {
        self.items.swap(&mut other.items);
        core::mem::swap(&mut self.size, &mut other.size);
    }

    /// Moves the contents out, leaving `self` with zero length and capacity.
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self {
            items: self.items.take(),
            size: core::mem::take(&mut self.size),
        }
    }

    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Wraps a buffer whose every slot is live.
    pub(crate) fn from_full_buffer(items: OwnedBuffer<T>) -> Self {
        let size = items.len();
        Self { items, size }
    }

    pub(crate) fn into_parts(self) -> (OwnedBuffer<T>, usize) {
        (self.items, self.size)
    }
}

impl<T: Clone> SimpleVector<T> {
    /// Creates a vector of `size` copies of `value`, with capacity exactly `size`.
    #[must_use]
    pub fn with_value(size: usize, value: &T) -> Self {
        Self::try_with_value(size, value).unwrap_or_else(|err| fail::<T>(err))
    }

    /// # Errors
    ///
    /// Returns `SimpleVectorError::AllocationFailed` if the allocation fails.
    pub fn try_with_value(size: usize, value: &T) -> Result<Self> {
        let items = OwnedBuffer::try_from_exact((0..size).map(|_| value.clone()))?;
        Ok(Self::from_full_buffer(items))
    }

    /// Copies `items` in order, with capacity exactly `items.len()`.
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self {
        Self::try_from_slice(items).unwrap_or_else(|err| fail::<T>(err))
    }

    /// # Errors
    ///
    /// Returns `SimpleVectorError::AllocationFailed` if the allocation fails.
    pub fn try_from_slice(items: &[T]) -> Result<Self> {
        let items = OwnedBuffer::try_from_exact(items.iter().cloned())?;
        Ok(Self::from_full_buffer(items))
    }

    /// Deep copy sized to the live range; no spare capacity is carried over.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::AllocationFailed` if the allocation fails.
    pub fn try_clone(&self) -> Result<Self> {
        Self::try_from_slice(self.as_slice())
    }
}

impl<T: Default> SimpleVector<T> {
    /// Creates a vector of `size` default values, with capacity exactly `size`.
    #[must_use]
    pub fn with_size(size: usize) -> Self {
        Self::try_with_size(size).unwrap_or_else(|err| fail::<T>(err))
    }

    /// # Errors
    ///
    /// Returns `SimpleVectorError::AllocationFailed` if the allocation fails.
    pub fn try_with_size(size: usize) -> Result<Self> {
        Ok(Self {
            items: OwnedBuffer::try_new(size)?,
            size,
        })
    }

    /// Creates an empty vector whose capacity is the one carried by `proxy`.
    #[must_use]
    pub fn with_reserve(proxy: ReserveProxy) -> Self {
        let mut vector = Self::new();
        vector.reserve(proxy.capacity());
        vector
    }

    /// Moves the live elements into a fresh buffer of `capacity` slots.
    ///
    /// The new buffer is allocated before anything moves, so a failed
    /// allocation leaves the vector untouched.
    fn reallocate(&mut self, capacity: usize) -> Result<()> {
        let live = self.size;
        let mut relocated = OwnedBuffer::try_from_padded(
            self.items[..live].iter_mut().map(core::mem::take),
            capacity,
        )?;

        #[cfg(feature = "log")]
        log::trace!(
            "reallocating vector: capacity {} -> {}, {} live elements",
            self.items.len(),
            capacity,
            live
        );

        self.items.swap(&mut relocated);
        Ok(())
    }

    fn make_room_for_one(&mut self) -> Result<()> {
        if self.size == self.capacity() {
            let capacity = growth::grown_capacity(self.capacity())?;
            self.reallocate(capacity)?;
        }
        Ok(())
    }

    /// Makes room for `additional` more elements ahead of a bulk append.
    pub(crate) fn grow_for(&mut self, additional: usize) -> Result<()> {
        let required = self.size.checked_add(additional).ok_or(
            SimpleVectorError::CapacityOverflow {
                requested_size: usize::MAX,
            },
        )?;
        if let Some(capacity) = growth::extended_capacity(self.capacity(), required) {
            self.reallocate(capacity)?;
        }
        Ok(())
    }

    /// Appends `value`, doubling the capacity (minimum 1) when full.
    pub fn push_back(&mut self, value: T) {
        if let Err(err) = self.try_push_back(value) {
            fail::<T>(err);
        }
    }

    /// Appends `value`, doubling the capacity (minimum 1) when full.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::AllocationFailed` or
    /// `SimpleVectorError::CapacityOverflow` if growing fails; the vector
    /// is left unchanged and `value` is dropped.
    pub fn try_push_back(&mut self, value: T) -> Result<()> {
        self.make_room_for_one()?;
        self.items[self.size] = value;
        self.size += 1;
        Ok(())
    }

    /// Inserts `value` at `index`, shifting the tail one slot right.
    /// `index == len()` appends. Returns the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        assert!(
            index <= self.size,
            "Index {} out of bounds for vector of length {}",
            index,
            self.size
        );
        match self.try_insert(index, value) {
            Ok(inserted) => inserted,
            Err(err) => fail::<T>(err),
        }
    }

    /// Inserts `value` at `index`, shifting the tail one slot right.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::IndexOutOfBounds` if `index > len()`,
    /// or a growth error if the vector is full and cannot grow. The vector
    /// is left unchanged in both cases.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T> {
        if index > self.size {
            return Err(SimpleVectorError::IndexOutOfBounds {
                index,
                length: self.size,
            });
        }
        // Grow before shifting; `index` stays valid in the new buffer.
        self.make_room_for_one()?;
        self.items[index..=self.size].rotate_right(1);
        self.items[index] = value;
        self.size += 1;
        Ok(&mut self.items[index])
    }

    /// Makes the capacity at least `capacity`, allocating exactly that much
    /// when it grows. Never shrinks.
    pub fn reserve(&mut self, capacity: usize) {
        if let Err(err) = self.try_reserve(capacity) {
            fail::<T>(err);
        }
    }

    /// # Errors
    ///
    /// Returns `SimpleVectorError::AllocationFailed` if the allocation fails;
    /// the vector is left unchanged.
    pub fn try_reserve(&mut self, capacity: usize) -> Result<()> {
        if let Some(capacity) = growth::reserved_capacity(self.capacity(), capacity) {
            self.reallocate(capacity)?;
        }
        Ok(())
    }

    /// Sets the length to `new_size`.
    ///
    /// Shrinking only truncates. Growing inside the capacity default-fills
    /// the new slots in place. Growing past the capacity reallocates to
    /// `2 * new_size` slots.
    pub fn resize(&mut self, new_size: usize) {
        if let Err(err) = self.try_resize(new_size) {
            fail::<T>(err);
        }
    }

    /// # Errors
    ///
    /// Returns `SimpleVectorError::AllocationFailed` or
    /// `SimpleVectorError::CapacityOverflow` if the reallocating branch fails;
    /// the vector is left unchanged.
    pub fn try_resize(&mut self, new_size: usize) -> Result<()> {
        if new_size > self.capacity() {
            let capacity = growth::resized_capacity(new_size)?;
            // Relocation pads everything past the live range with defaults.
            self.reallocate(capacity)?;
        } else if new_size > self.size {
            self.items[self.size..new_size].fill_with(T::default);
        }
        self.size = new_size;
        Ok(())
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SimpleVector<T> {
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|err| fail::<T>(err))
    }

    /// Copy-and-swap: the full copy is built before `self` is touched.
    fn clone_from(&mut self, source: &Self) {
        let mut replacement = source.clone();
        self.swap(&mut replacement);
    }
}
