//! Typed view over [`RawArray`] storage.
//!
//! [`TypedArray<T>`] fixes the element size to `T::SIZE` at compile time
//! and encodes/decodes through [`Element`], so callers never handle raw
//! byte slices. Growth and pop semantics are those of the underlying
//! [`RawArray`].

use std::fmt;
use std::marker::PhantomData;

use crate::element::Element;
use crate::error::ArrayError;
use crate::raw::RawArray;

/// Growable array of `T`, stored as `T::SIZE`-byte slots.
pub struct TypedArray<T: Element> {
    raw: RawArray,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Element> TypedArray<T> {
    /// Create an empty array with the default initial capacity.
    ///
    /// Fails with [`ArrayError::ZeroElementSize`] if `T::SIZE` is zero.
    pub fn new() -> Result<Self, ArrayError> {
        Ok(Self::from_raw_unchecked(RawArray::new(T::SIZE)?))
    }

    /// Create an empty array with room for `initial_capacity` elements.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, ArrayError> {
        Ok(Self::from_raw_unchecked(RawArray::with_capacity(
            T::SIZE,
            initial_capacity,
        )?))
    }

    /// Wrap existing raw storage whose element size matches `T::SIZE`.
    pub fn from_raw(raw: RawArray) -> Result<Self, ArrayError> {
        if raw.element_size() != T::SIZE {
            return Err(ArrayError::ElementSizeMismatch {
                expected: T::SIZE,
                actual: raw.element_size(),
            });
        }
        Ok(Self::from_raw_unchecked(raw))
    }

    fn from_raw_unchecked(raw: RawArray) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    /// Append `value`.
    pub fn push(&mut self, value: &T) -> Result<(), ArrayError> {
        self.raw.push_with(|slot| value.write_to(slot))
    }

    /// Remove and return the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        self.raw.pop_with(T::read_from)
    }

    /// Decode the element at `index`.
    pub fn get(&self, index: usize) -> Result<T, ArrayError> {
        self.raw.element_at(index).map(T::read_from)
    }

    /// Decode every live element in push order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.raw.iter().map(T::read_from)
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Number of allocated element slots.
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// The underlying byte storage.
    pub fn as_raw(&self) -> &RawArray {
        &self.raw
    }

    /// Unwrap into the underlying byte storage.
    pub fn into_raw(self) -> RawArray {
        self.raw
    }
}

impl<T: Element> Clone for TypedArray<T> {
    fn clone(&self) -> Self {
        Self::from_raw_unchecked(self.raw.clone())
    }
}

impl<T: Element + fmt::Debug> fmt::Debug for TypedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
