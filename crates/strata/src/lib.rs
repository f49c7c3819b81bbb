//! Strata: owned growable containers with explicit storage management.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Strata sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! // Type-erased storage: the array only knows each element is 6 bytes.
//! let mut arr = RawArray::new(6).unwrap();
//! arr.push(b"hello\0").unwrap();
//! arr.push(b"world\0").unwrap();
//! arr.push(b"again\0").unwrap();
//! assert_eq!(arr.capacity(), 4);
//! assert_eq!(arr.element_at(1).unwrap(), b"world\0");
//!
//! let mut out = [0u8; 6];
//! arr.pop_into(&mut out).unwrap();
//! assert_eq!(&out, b"again\0");
//!
//! // Linked list with O(1) append.
//! let mut list = IntList::new();
//! for v in [5, 10, 20, 40] {
//!     list.append(v);
//! }
//! let mut seen = Vec::new();
//! list.for_each(|node| seen.push(*node.value()));
//! assert_eq!(seen, [5, 10, 20, 40]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `strata-array` | `RawArray`, `TypedArray`, `Element`, `ArrayConfig`, `ArrayError` |
//! | [`list`] | `strata-list` | `LinkedList`, `Node`, iterators, `traverse` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Type-erased dynamic array (`strata-array`).
///
/// [`array::RawArray`] stores fixed-width byte elements;
/// [`array::TypedArray`] layers a compile-time element type on top.
pub use strata_array as array;

/// Singly linked list (`strata-list`).
///
/// [`list::LinkedList`] owns its chain from the head and appends through
/// a non-owning tail reference.
pub use strata_list as list;

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    // Array
    pub use strata_array::{ArrayConfig, ArrayError, Element, RawArray, TypedArray};

    // List
    pub use strata_list::{traverse, IntList, LinkedList, Node};
}
