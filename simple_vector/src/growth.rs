//! Capacity arithmetic for the reallocation paths.
//!
//! Four triggers, four policies:
//! - implicit growth (`push_back`, `insert` on a full vector) doubles, starting at 1;
//! - `reserve(n)` is caller-directed and allocates exactly `n`;
//! - `resize(n)` past the capacity allocates `2 * n`;
//! - `extend` needing more room takes the larger of the doubled capacity and
//!   the exact requirement.

use crate::error::{Result, SimpleVectorError};

/// Capacity after an implicit growth step: `max(1, 2 * capacity)`.
///
/// # Errors
///
/// Returns `SimpleVectorError::CapacityOverflow` if doubling overflows `usize`.
pub(crate) fn grown_capacity(capacity: usize) -> Result<usize> {
    if capacity == 0 {
        return Ok(1);
    }
    capacity
        .checked_mul(2)
        .ok_or(SimpleVectorError::CapacityOverflow {
            requested_size: capacity.saturating_add(1),
        })
}

/// Capacity for a `resize` that no longer fits: `2 * new_size`.
///
/// # Errors
///
/// Returns `SimpleVectorError::CapacityOverflow` if doubling overflows `usize`.
pub(crate) fn resized_capacity(new_size: usize) -> Result<usize> {
    new_size
        .checked_mul(2)
        .ok_or(SimpleVectorError::CapacityOverflow {
            requested_size: new_size,
        })
}

/// Capacity for `reserve(requested)`, or `None` when no reallocation is needed.
pub(crate) fn reserved_capacity(capacity: usize, requested: usize) -> Option<usize> {
    (requested > capacity).then_some(requested)
}

/// Capacity for holding `required` elements through `extend`, or `None` when
/// the current capacity already suffices.
pub(crate) fn extended_capacity(capacity: usize, required: usize) -> Option<usize> {
    if required <= capacity {
        return None;
    }
    let doubled = grown_capacity(capacity).unwrap_or(required);
    Some(doubled.max(required))
}
