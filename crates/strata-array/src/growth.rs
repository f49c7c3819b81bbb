//! Capacity growth rule.
//!
//! Capacity doubles whenever a push finds the array full. Growing from
//! zero jumps straight to [`ArrayConfig::DEFAULT_INITIAL_CAPACITY`] so an
//! empty-configured array behaves like a default one after its first push.

use crate::config::ArrayConfig;
use crate::error::ArrayError;

/// Capacity to grow to from `current` slots.
///
/// Returns `None` if doubling overflows `usize`.
pub fn next_capacity(current: usize) -> Option<usize> {
    if current == 0 {
        return Some(ArrayConfig::DEFAULT_INITIAL_CAPACITY);
    }
    current.checked_mul(2)
}

/// Byte size of `capacity` slots of `element_size` bytes each.
///
/// The result is also bounded by `isize::MAX`, the largest allocation
/// the global allocator accepts.
pub fn storage_bytes(capacity: usize, element_size: usize) -> Result<usize, ArrayError> {
    capacity
        .checked_mul(element_size)
        .filter(|&bytes| bytes <= isize::MAX as usize)
        .ok_or(ArrayError::CapacityOverflow {
            requested_elements: capacity,
            element_size,
        })
}
