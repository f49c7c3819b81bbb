//! Array-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during array construction and access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An array was configured with an element size of zero bytes.
    ZeroElementSize,
    /// A byte slice passed in or out of the array has the wrong width.
    ElementSizeMismatch {
        /// Element size the array was created with.
        expected: usize,
        /// Length of the slice that was supplied.
        actual: usize,
    },
    /// The allocator could not provide the requested storage.
    AllocationFailed {
        /// Size of the refused allocation in bytes.
        requested_bytes: usize,
    },
    /// The byte size of the requested capacity does not fit in `usize`.
    CapacityOverflow {
        /// Number of element slots requested.
        requested_elements: usize,
        /// Bytes per element slot.
        element_size: usize,
    },
    /// Pop on an array holding no elements.
    Empty,
    /// Element access at or past the live length.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of live elements at the time of the access.
        len: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroElementSize => write!(f, "element size must be at least one byte"),
            Self::ElementSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "element size mismatch: expected {expected} bytes, got {actual} bytes"
                )
            }
            Self::AllocationFailed { requested_bytes } => {
                write!(f, "allocation of {requested_bytes} bytes failed")
            }
            Self::CapacityOverflow {
                requested_elements,
                element_size,
            } => {
                write!(
                    f,
                    "capacity overflow: {requested_elements} elements of {element_size} bytes"
                )
            }
            Self::Empty => write!(f, "array is empty"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl Error for ArrayError {}
