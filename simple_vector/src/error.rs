use thiserror::Error;

/// Error types for `SimpleVector` and `OwnedBuffer` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SimpleVectorError {
    /// Index falls past the live elements; spare capacity does not count
    #[error("Index out of bounds: index {index} is outside the {length} live elements")]
    IndexOutOfBounds {
        /// Requested position
        index: usize,
        /// Live element count at the time of the request
        length: usize,
    },
    /// The allocator could not provide storage for the requested slot count
    #[error("Allocation failed: could not allocate {requested} slots")]
    AllocationFailed {
        /// Number of slots requested
        requested: usize,
    },
    /// Capacity arithmetic does not fit in `usize`
    #[error("Capacity overflow: cannot grow to hold {requested_size} elements")]
    CapacityOverflow {
        /// Size that triggered the growth
        requested_size: usize,
    },
}

pub type Result<T> = core::result::Result<T, SimpleVectorError>;

/// Turns a growth error into the same failure `alloc`'s own containers
/// produce: the allocation error handler for refused allocations, a panic
/// for everything else.
pub(crate) fn fail<T>(err: SimpleVectorError) -> ! {
    if let SimpleVectorError::AllocationFailed { requested } = err {
        if let Ok(layout) = core::alloc::Layout::array::<T>(requested) {
            alloc::alloc::handle_alloc_error(layout);
        }
    }
    panic!("{err}")
}
