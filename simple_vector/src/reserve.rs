/// Capacity request consumed by [`SimpleVector::with_reserve`](crate::SimpleVector::with_reserve).
///
/// Produced by [`reserve`]; carries nothing but the slot count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveProxy {
    capacity: usize,
}

impl ReserveProxy {
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Builds a [`ReserveProxy`] for `capacity` slots.
///
/// ```
/// use simple_vector::{reserve, SimpleVector};
///
/// let v: SimpleVector<i32> = SimpleVector::with_reserve(reserve(8));
/// assert_eq!(v.len(), 0);
/// assert_eq!(v.capacity(), 8);
/// ```
#[must_use]
pub const fn reserve(capacity: usize) -> ReserveProxy {
    ReserveProxy::new(capacity)
}
