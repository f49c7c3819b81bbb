//! Type-erased growable array with a fixed element size.
//!
//! The element type is unknown to the container: each array is created
//! with an element size in bytes and stores values as opaque,
//! fixed-width slots in one contiguous owned buffer.
//!
//! # Architecture
//!
//! ```text
//! TypedArray<T: Element> (compile-time element type)
//! └── RawArray (element_size fixed at construction)
//!     ├── Vec<u8> storage, capacity * element_size bytes
//!     └── growth: capacity doubles on a full push, never shrinks
//! ```
//!
//! # Storage relocation
//!
//! A push that finds the array full allocates a new buffer of twice the
//! capacity, copies the live elements byte-for-byte, and releases the old
//! buffer. Borrowed element slices tie up the array, so the borrow
//! checker rules out reading through a slice after a relocating push.
//!
//! # Checked access
//!
//! Every caller contract is checked and reported through [`ArrayError`]:
//! zero element size, wrongly sized input/output slices, pop on an empty
//! array, out-of-range index, and allocator refusal.
//!
//! # Concurrency
//!
//! Arrays are plain owned values with no internal synchronisation. Share
//! one across threads behind a `Mutex` when concurrent mutation is needed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod element;
pub mod error;
pub mod growth;
pub mod raw;
pub mod typed;

// Public re-exports for the primary API surface.
pub use config::ArrayConfig;
pub use element::Element;
pub use error::ArrayError;
pub use raw::RawArray;
pub use typed::TypedArray;
