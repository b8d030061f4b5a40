use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::slice::SliceIndex;

use crate::buffer::OwnedBuffer;
use crate::core::SimpleVector;
use crate::error::fail;
use crate::reserve::ReserveProxy;

// Comparisons look at the live range only; capacity never takes part.

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialEq> PartialEq<[T]> for SimpleVector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for SimpleVector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVector<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVector<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for SimpleVector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for SimpleVector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(items: [T; N]) -> Self {
        let buffer = OwnedBuffer::try_from_exact(items).unwrap_or_else(|err| fail::<T>(err));
        Self::from_full_buffer(buffer)
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T: Default> From<ReserveProxy> for SimpleVector<T> {
    fn from(proxy: ReserveProxy) -> Self {
        Self::with_reserve(proxy)
    }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let items = items.into_iter();
        let (lower, _) = items.size_hint();
        if let Err(err) = self.grow_for(lower) {
            fail::<T>(err);
        }
        for item in items {
            self.push_back(item);
        }
    }
}

impl<'a, T: Default + Copy + 'a> Extend<&'a T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, items: I) {
        self.extend(items.into_iter().copied());
    }
}

impl<T: Default> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut vector = Self::new();
        vector.extend(items);
        vector
    }
}
