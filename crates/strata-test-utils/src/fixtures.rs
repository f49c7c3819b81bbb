//! Reusable record fixtures.
//!
//! [`User`] mirrors a C-style record with a fixed 50-byte,
//! NUL-terminated name field and a 16-bit id: 52 bytes per element.

use std::fmt;

use strata_array::Element;

const NAME_LEN: usize = 50;

/// Fixed-layout user record.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct User {
    name: [u8; NAME_LEN],
    pub id: i16,
}

impl User {
    /// Width of the name field in bytes, terminator included.
    pub const NAME_LEN: usize = NAME_LEN;

    /// Build a record. Names longer than `NAME_LEN - 1` bytes are cut at
    /// the last char boundary that fits, leaving room for the terminator.
    pub fn new(name: &str, id: i16) -> Self {
        let mut end = name.len().min(Self::NAME_LEN - 1);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        let mut field = [0u8; Self::NAME_LEN];
        field[..end].copy_from_slice(&name.as_bytes()[..end]);
        Self { name: field, id }
    }

    /// The name up to its terminator.
    pub fn name(&self) -> &str {
        let end = self
            .name
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(Self::NAME_LEN);
        std::str::from_utf8(&self.name[..end]).unwrap_or_default()
    }
}

impl Element for User {
    const SIZE: usize = Self::NAME_LEN + std::mem::size_of::<i16>();

    fn write_to(&self, out: &mut [u8]) {
        let (name, id) = out.split_at_mut(Self::NAME_LEN);
        name.copy_from_slice(&self.name);
        self.id.write_to(id);
    }

    fn read_from(bytes: &[u8]) -> Self {
        let (name, id) = bytes.split_at(Self::NAME_LEN);
        let mut field = [0u8; Self::NAME_LEN];
        field.copy_from_slice(name);
        Self {
            name: field,
            id: i16::read_from(id),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name: {}, id: {}", self.name(), self.id)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name())
            .field("id", &self.id)
            .finish()
    }
}

/// The three records pushed by the array demonstration, in push order.
pub fn sample_users() -> [User; 3] {
    [User::new("meg", 1), User::new("bobo", 2), User::new("rigby", 3)]
}
