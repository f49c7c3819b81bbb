//! Array configuration parameters.

use crate::error::ArrayError;
use crate::growth;

/// Configuration for a [`RawArray`](crate::RawArray).
///
/// Validated at construction; all values are immutable after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Bytes per element. Must be non-zero.
    pub element_size: usize,

    /// Number of element slots allocated up front.
    ///
    /// Default: 2. Zero is allowed; the first push then allocates
    /// [`DEFAULT_INITIAL_CAPACITY`](Self::DEFAULT_INITIAL_CAPACITY) slots.
    pub initial_capacity: usize,
}

impl ArrayConfig {
    /// Default number of slots allocated at creation.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 2;

    /// Create a config for elements of `element_size` bytes with the
    /// default initial capacity.
    pub fn new(element_size: usize) -> Self {
        Self {
            element_size,
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
        }
    }

    /// Replace the initial capacity.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Check structural invariants.
    ///
    /// Rejects a zero element size and an initial capacity whose byte size
    /// overflows `usize`.
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.element_size == 0 {
            return Err(ArrayError::ZeroElementSize);
        }
        growth::storage_bytes(self.initial_capacity, self.element_size)?;
        Ok(())
    }

    /// Size in bytes of the initial storage block.
    pub fn initial_bytes(&self) -> Result<usize, ArrayError> {
        growth::storage_bytes(self.initial_capacity, self.element_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_initial_capacity_is_two() {
        let config = ArrayConfig::new(52);
        assert_eq!(config.initial_capacity, 2);
        assert_eq!(config.initial_bytes(), Ok(104));
    }

    #[test]
    fn zero_element_size_rejected() {
        assert_eq!(
            ArrayConfig::new(0).validate(),
            Err(ArrayError::ZeroElementSize)
        );
    }

    #[test]
    fn zero_initial_capacity_is_valid() {
        let config = ArrayConfig::new(4).with_initial_capacity(0);
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_bytes(), Ok(0));
    }

    #[test]
    fn overflowing_initial_capacity_rejected() {
        let config = ArrayConfig::new(16).with_initial_capacity(usize::MAX / 2);
        assert!(matches!(
            config.validate(),
            Err(ArrayError::CapacityOverflow { .. })
        ));
    }
}
