//! Singly linked list with O(1) tail append and iterative traversal.
//!
//! # Ownership
//!
//! ```text
//! LinkedList
//! └── Chain (owns every node; allocated with Box, linked by raw pointers)
//!     ├── head ─→ Node ─next→ Node ─next→ ... ─→ last Node (next = None)
//!     └── tail ─────────────────────────────────┘ (navigation only)
//! ```
//!
//! The chain frees nodes from the head. The tail pointer is used only to
//! append and never frees a node. Linking by raw pointers rather than
//! nested `Box`es keeps the tail pointer valid when the list is moved.
//! Dropping a list walks the chain in a loop, so very long lists are
//! released without recursion.
//!
//! # Traversal
//!
//! [`traverse`] applies a visitor to a node and each node after it.
//! [`LinkedList::iter`] and [`LinkedList::nodes`] expose the same walk as
//! ordinary iterators.
//!
//! # Concurrency
//!
//! A list is a plain owned value with no internal synchronisation. Wrap
//! it in a `Mutex` to mutate it from several threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod iter;
pub mod list;
pub mod node;
mod raw;

// Public re-exports for the primary API surface.
pub use iter::{traverse, IntoIter, Iter, Nodes};
pub use list::{IntList, LinkedList};
pub use node::Node;
