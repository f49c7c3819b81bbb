//! Proptest strategies for array and list inputs.

use proptest::collection::vec;
use proptest::prelude::*;

use crate::fixtures::User;

/// Names that fit the record without truncation.
pub fn arb_name() -> impl Strategy<Value = String> {
    "[a-z]{1,20}"
}

/// Arbitrary [`User`] records.
pub fn arb_user() -> impl Strategy<Value = User> {
    (arb_name(), any::<i16>()).prop_map(|(name, id)| User::new(&name, id))
}

/// An element size and a list of elements of exactly that size.
pub fn arb_elements(
    max_size: usize,
    max_count: usize,
) -> impl Strategy<Value = (usize, Vec<Vec<u8>>)> {
    (1..=max_size).prop_flat_map(move |size| {
        (Just(size), vec(vec(any::<u8>(), size), 0..max_count))
    })
}
