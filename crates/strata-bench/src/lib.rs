//! Benchmark profiles for the Strata containers.
//!
//! Shared builders so every benchmark measures containers of the same
//! shape.

#![forbid(unsafe_code)]

use strata_array::{ArrayError, RawArray};
use strata_list::LinkedList;

/// Element count used by the default benchmark profile.
pub const PROFILE_LEN: usize = 10_000;

/// A `RawArray` of `len` 8-byte elements holding `0..len` little-endian.
pub fn filled_array(len: usize) -> Result<RawArray, ArrayError> {
    let mut array = RawArray::new(8)?;
    for i in 0..len as u64 {
        array.push(&i.to_le_bytes())?;
    }
    Ok(array)
}

/// A list holding `0..len`.
pub fn filled_list(len: usize) -> LinkedList<u64> {
    (0..len as u64).collect()
}
