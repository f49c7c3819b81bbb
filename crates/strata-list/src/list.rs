//! The list itself: owned node chain with head and tail pointers.

use std::fmt;

use tracing::trace;

use crate::iter::{traverse, IntoIter, Iter, Nodes};
use crate::node::Node;
use crate::raw::Chain;

/// Singly linked list with O(1) append at the tail.
///
/// Invariants:
/// - `head()` is `None` iff `tail()` is `None` iff `len() == 0`
/// - the chain from the head reaches the tail node in `len - 1` hops
/// - the tail node's `next` is always `None`
pub struct LinkedList<T> {
    chain: Chain<T>,
}

/// List of integers, the shape used by the demonstration driver.
pub type IntList = LinkedList<i32>;

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    /// Append `value` as the new last node.
    pub fn append(&mut self, value: T) {
        self.chain.push_back(value);
        trace!(len = self.chain.len(), "appended list node");
    }

    /// First node, or `None` if the list is empty.
    pub fn head(&self) -> Option<&Node<T>> {
        self.chain.head()
    }

    /// Last node, or `None` if the list is empty.
    pub fn tail(&self) -> Option<&Node<T>> {
        self.chain.tail()
    }

    /// First value.
    pub fn first(&self) -> Option<&T> {
        self.head().map(Node::value)
    }

    /// Last value.
    pub fn last(&self) -> Option<&T> {
        self.tail().map(Node::value)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Whether the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over values in append order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head(), self.len())
    }

    /// Iterate over nodes in append order.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self.head())
    }

    /// Apply `visitor` to every node in append order. No-op when empty.
    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&Node<T>),
    {
        if let Some(head) = self.head() {
            traverse(head, visitor);
        }
    }

    /// Release every node, leaving the list empty.
    pub fn clear(&mut self) {
        // The old chain frees its nodes front to back.
        self.chain = Chain::new();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.chain)
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
