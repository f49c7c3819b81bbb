//! List nodes.

use std::fmt;
use std::ptr::NonNull;

/// One link in a [`LinkedList`](crate::LinkedList).
///
/// The chain a node belongs to owns it and its successor. Nodes are only
/// reachable by reference through the list that owns the chain.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self { value, next: None }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Whether this node ends the chain.
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Successors are omitted; printing the whole chain recursively
        // would grow the stack with the list length.
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("is_last", &self.is_last())
            .finish()
    }
}
