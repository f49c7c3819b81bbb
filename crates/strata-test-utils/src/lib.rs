//! Test fixtures and proptest strategies for Strata development.
//!
//! Provides the fixed-layout [`User`](fixtures::User) record used by the
//! array demonstration and scenario tests, plus strategies for
//! generating records and byte elements.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::User;
