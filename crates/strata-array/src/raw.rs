//! Type-erased contiguous storage.
//!
//! A [`RawArray`] stores elements as opaque fixed-width byte slots in a
//! single owned buffer. The element size is chosen at construction and
//! never changes. Capacity doubles when a push finds the buffer full and
//! never shrinks.

use std::fmt;
use std::ops::Range;
use std::slice::ChunksExact;

use tracing::{debug, trace};

use crate::config::ArrayConfig;
use crate::error::ArrayError;
use crate::growth;

/// Growable array of fixed-width byte elements.
///
/// Invariants:
/// - `len <= capacity`
/// - `storage.len() == capacity * element_size`
/// - bytes in `[0, len * element_size)` are live elements; bytes past
///   that are zero and never handed out.
///
/// Any slice obtained from [`element_at`](Self::element_at) borrows the
/// array, so a relocating push cannot happen while it is alive.
#[derive(Clone)]
pub struct RawArray {
    /// Backing storage, `capacity * element_size` bytes.
    storage: Vec<u8>,
    element_size: usize,
    len: usize,
    capacity: usize,
}

impl RawArray {
    /// Create an array for `element_size`-byte elements with the default
    /// initial capacity of two slots.
    pub fn new(element_size: usize) -> Result<Self, ArrayError> {
        Self::with_config(ArrayConfig::new(element_size))
    }

    /// Create an array with room for `initial_capacity` elements.
    pub fn with_capacity(element_size: usize, initial_capacity: usize) -> Result<Self, ArrayError> {
        Self::with_config(ArrayConfig::new(element_size).with_initial_capacity(initial_capacity))
    }

    /// Create an array from a validated configuration.
    pub fn with_config(config: ArrayConfig) -> Result<Self, ArrayError> {
        config.validate()?;
        let bytes = config.initial_bytes()?;
        let storage = allocate(bytes, &[])?;
        debug!(
            element_size = config.element_size,
            capacity = config.initial_capacity,
            "created array"
        );
        Ok(Self {
            storage,
            element_size: config.element_size,
            len: 0,
            capacity: config.initial_capacity,
        })
    }

    /// Append a copy of `value`, growing the storage if the array is full.
    ///
    /// `value` must be exactly [`element_size`](Self::element_size) bytes.
    pub fn push(&mut self, value: &[u8]) -> Result<(), ArrayError> {
        self.check_width(value.len())?;
        self.push_with(|slot| slot.copy_from_slice(value))
    }

    /// Append one element, letting `fill` write its bytes in place.
    ///
    /// `fill` receives a zeroed slot of exactly `element_size` bytes. The
    /// slot only becomes live once `fill` returns.
    pub fn push_with<F>(&mut self, fill: F) -> Result<(), ArrayError>
    where
        F: FnOnce(&mut [u8]),
    {
        if self.len == self.capacity {
            self.grow()?;
        }
        let range = self.slot_range(self.len);
        fill(&mut self.storage[range]);
        self.len += 1;
        Ok(())
    }

    /// Remove the last element, copying its bytes into `out`.
    ///
    /// Returns [`ArrayError::Empty`] and leaves `out` untouched if there is
    /// nothing to pop.
    pub fn pop_into(&mut self, out: &mut [u8]) -> Result<(), ArrayError> {
        self.check_width(out.len())?;
        self.pop_with(|bytes| out.copy_from_slice(bytes))
            .ok_or(ArrayError::Empty)
    }

    /// Remove the last element, handing its bytes to `read`.
    ///
    /// The vacated slot is zeroed after `read` returns.
    pub fn pop_with<R, F>(&mut self, read: F) -> Option<R>
    where
        F: FnOnce(&[u8]) -> R,
    {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let range = self.slot_range(self.len);
        let result = read(&self.storage[range.clone()]);
        self.storage[range].fill(0);
        Some(result)
    }

    /// Bytes of the element at `index`.
    pub fn element_at(&self, index: usize) -> Result<&[u8], ArrayError> {
        self.check_index(index)?;
        Ok(&self.storage[self.slot_range(index)])
    }

    /// Mutable bytes of the element at `index`.
    pub fn element_at_mut(&mut self, index: usize) -> Result<&mut [u8], ArrayError> {
        self.check_index(index)?;
        let range = self.slot_range(index);
        Ok(&mut self.storage[range])
    }

    /// Iterate over live elements in push order.
    pub fn iter(&self) -> ChunksExact<'_, u8> {
        self.storage[..self.len * self.element_size].chunks_exact(self.element_size)
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated element slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes per element.
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Size of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.storage.len()
    }

    /// Relocate into a buffer of the next capacity, copying live elements.
    fn grow(&mut self) -> Result<(), ArrayError> {
        let new_capacity =
            growth::next_capacity(self.capacity).ok_or(ArrayError::CapacityOverflow {
                requested_elements: self.capacity,
                element_size: self.element_size,
            })?;
        let new_bytes = growth::storage_bytes(new_capacity, self.element_size)?;
        let live_bytes = self.len * self.element_size;
        let relocated = allocate(new_bytes, &self.storage[..live_bytes])?;
        trace!(
            old_capacity = self.capacity,
            new_capacity,
            element_size = self.element_size,
            copied_bytes = live_bytes,
            "relocated array storage"
        );
        // Old buffer is released here.
        self.storage = relocated;
        self.capacity = new_capacity;
        Ok(())
    }

    fn slot_range(&self, index: usize) -> Range<usize> {
        let start = index * self.element_size;
        start..start + self.element_size
    }

    fn check_width(&self, actual: usize) -> Result<(), ArrayError> {
        if actual != self.element_size {
            return Err(ArrayError::ElementSizeMismatch {
                expected: self.element_size,
                actual,
            });
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }
}

/// Allocate a zero-filled buffer of `bytes` bytes whose prefix is a copy
/// of `prefix`.
fn allocate(bytes: usize, prefix: &[u8]) -> Result<Vec<u8>, ArrayError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(bytes)
        .map_err(|_| ArrayError::AllocationFailed {
            requested_bytes: bytes,
        })?;
    buf.extend_from_slice(prefix);
    buf.resize(bytes, 0);
    Ok(buf)
}

impl fmt::Debug for RawArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawArray")
            .field("element_size", &self.element_size)
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<'a> IntoIterator for &'a RawArray {
    type Item = &'a [u8];
    type IntoIter = ChunksExact<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_array_is_empty_with_default_capacity() {
        let arr = RawArray::new(8).unwrap();
        assert_eq!(arr.len(), 0);
        assert!(arr.is_empty());
        assert_eq!(arr.capacity(), 2);
        assert_eq!(arr.element_size(), 8);
        assert_eq!(arr.memory_bytes(), 16);
    }

    #[test]
    fn zero_element_size_is_an_error() {
        assert_eq!(RawArray::new(0).unwrap_err(), ArrayError::ZeroElementSize);
    }

    #[test]
    fn push_then_element_at_returns_same_bytes() {
        let mut arr = RawArray::new(4).unwrap();
        arr.push(&[1, 2, 3, 4]).unwrap();
        arr.push(&[5, 6, 7, 8]).unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.element_at(0).unwrap(), &[1, 2, 3, 4]);
        assert_eq!(arr.element_at(1).unwrap(), &[5, 6, 7, 8]);
    }

    #[test]
    fn push_rejects_wrong_width() {
        let mut arr = RawArray::new(4).unwrap();
        assert_eq!(
            arr.push(&[1, 2, 3]),
            Err(ArrayError::ElementSizeMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert!(arr.is_empty());
    }

    #[test]
    fn growth_doubles_and_preserves_data() {
        let mut arr = RawArray::new(2).unwrap();
        for i in 0u8..5 {
            arr.push(&[i, i + 100]).unwrap();
        }
        assert_eq!(arr.capacity(), 8);
        for i in 0u8..5 {
            assert_eq!(arr.element_at(i as usize).unwrap(), &[i, i + 100]);
        }
    }

    #[test]
    fn zero_initial_capacity_grows_on_first_push() {
        let mut arr = RawArray::with_capacity(1, 0).unwrap();
        assert_eq!(arr.capacity(), 0);
        assert_eq!(arr.memory_bytes(), 0);
        arr.push(&[9]).unwrap();
        assert_eq!(arr.capacity(), 2);
        assert_eq!(arr.element_at(0).unwrap(), &[9]);
    }

    #[test]
    fn pop_returns_last_and_shrinks_len() {
        let mut arr = RawArray::new(2).unwrap();
        arr.push(&[1, 1]).unwrap();
        arr.push(&[2, 2]).unwrap();
        let mut out = [0u8; 2];
        arr.pop_into(&mut out).unwrap();
        assert_eq!(out, [2, 2]);
        assert_eq!(arr.len(), 1);
        assert_eq!(arr.capacity(), 2);
    }

    #[test]
    fn pop_on_empty_leaves_buffer_untouched() {
        let mut arr = RawArray::new(3).unwrap();
        let mut out = [7u8; 3];
        assert_eq!(arr.pop_into(&mut out), Err(ArrayError::Empty));
        assert_eq!(out, [7, 7, 7]);
    }

    #[test]
    fn pop_rejects_wrong_width_without_removing() {
        let mut arr = RawArray::new(3).unwrap();
        arr.push(&[1, 2, 3]).unwrap();
        let mut out = [0u8; 2];
        assert!(matches!(
            arr.pop_into(&mut out),
            Err(ArrayError::ElementSizeMismatch { .. })
        ));
        assert_eq!(arr.len(), 1);
    }

    #[test]
    fn pop_zeroes_vacated_slot() {
        let mut arr = RawArray::new(2).unwrap();
        arr.push(&[0xAA, 0xBB]).unwrap();
        arr.pop_with(|_| ()).unwrap();
        // The slot is handed out zeroed on the next push.
        arr.push_with(|slot| assert_eq!(&*slot, &[0u8, 0][..])).unwrap();
    }

    #[test]
    fn element_at_past_len_is_out_of_range() {
        let mut arr = RawArray::new(1).unwrap();
        arr.push(&[1]).unwrap();
        // Index 1 is within capacity but not live.
        assert_eq!(
            arr.element_at(1),
            Err(ArrayError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert!(matches!(
            arr.element_at_mut(5),
            Err(ArrayError::IndexOutOfRange { index: 5, len: 1 })
        ));
    }

    #[test]
    fn element_at_mut_writes_through() {
        let mut arr = RawArray::new(2).unwrap();
        arr.push(&[1, 2]).unwrap();
        arr.element_at_mut(0).unwrap().copy_from_slice(&[3, 4]);
        assert_eq!(arr.element_at(0).unwrap(), &[3, 4]);
    }

    #[test]
    fn iter_visits_live_elements_in_order() {
        let mut arr = RawArray::new(1).unwrap();
        for b in [10u8, 20, 30] {
            arr.push(&[b]).unwrap();
        }
        let mut out = [0u8];
        arr.pop_into(&mut out).unwrap();
        let seen: Vec<&[u8]> = arr.iter().collect();
        assert_eq!(seen, vec![&[10u8][..], &[20u8][..]]);
        assert_eq!((&arr).into_iter().count(), 2);
    }

    #[test]
    fn huge_initial_capacity_reports_allocation_failure() {
        let result = RawArray::with_capacity(1, isize::MAX as usize);
        assert_eq!(
            result.unwrap_err(),
            ArrayError::AllocationFailed {
                requested_bytes: isize::MAX as usize
            }
        );
    }

    #[test]
    fn debug_omits_storage() {
        let arr = RawArray::new(4).unwrap();
        assert_eq!(
            format!("{arr:?}"),
            "RawArray { element_size: 4, len: 0, capacity: 2 }"
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn pushes_are_retrievable_in_order(
                element_size in 1usize..16,
                count in 0usize..64,
                seed in any::<u8>(),
            ) {
                let mut arr = RawArray::new(element_size).unwrap();
                let elements: Vec<Vec<u8>> = (0..count)
                    .map(|i| {
                        (0..element_size)
                            .map(|j| seed.wrapping_add((i * 31 + j) as u8))
                            .collect()
                    })
                    .collect();
                for e in &elements {
                    arr.push(e).unwrap();
                }
                prop_assert_eq!(arr.len(), count);
                prop_assert!(arr.capacity() >= count);
                for (i, e) in elements.iter().enumerate() {
                    prop_assert_eq!(arr.element_at(i).unwrap(), e.as_slice());
                }
            }

            #[test]
            fn push_then_pop_round_trips(
                prefix in proptest::collection::vec(any::<[u8; 4]>(), 0..20),
                value in any::<[u8; 4]>(),
            ) {
                let mut arr = RawArray::new(4).unwrap();
                for p in &prefix {
                    arr.push(p).unwrap();
                }
                let before = arr.len();
                arr.push(&value).unwrap();
                let mut out = [0u8; 4];
                arr.pop_into(&mut out).unwrap();
                prop_assert_eq!(out, value);
                prop_assert_eq!(arr.len(), before);
            }

            #[test]
            fn growth_from_two_keeps_every_element(k in 0usize..40) {
                let mut arr = RawArray::new(8).unwrap();
                let n = 2 * k + 1;
                for i in 0..n {
                    arr.push(&(i as u64).to_le_bytes()).unwrap();
                }
                prop_assert!(arr.capacity() >= n);
                prop_assert!(arr.capacity().is_power_of_two());
                for i in 0..n {
                    prop_assert_eq!(arr.element_at(i).unwrap(), &(i as u64).to_le_bytes()[..]);
                }
            }
        }
    }
}
