//! Borrowing and owning iteration, and visitor-style traversal.
//!
//! All walks are explicit loops over the `next` links, so stack usage is
//! constant regardless of list length.

use std::iter::FusedIterator;

use crate::list::LinkedList;
use crate::node::Node;
use crate::raw::Chain;

/// Apply `visitor` to `start` and then to every node after it, in order.
///
/// Restartable: calling it again from the same node revisits the same
/// sequence.
pub fn traverse<T, F>(start: &Node<T>, visitor: F)
where
    F: FnMut(&Node<T>),
{
    Nodes::from_node(start).for_each(visitor);
}

/// Iterator over the nodes of a chain.
pub struct Nodes<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Nodes<'a, T> {
    pub(crate) fn new(first: Option<&'a Node<T>>) -> Self {
        Self { next: first }
    }

    /// Iterate from `start` to the end of its chain.
    pub fn from_node(start: &'a Node<T>) -> Self {
        Self::new(Some(start))
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next();
        Some(node)
    }
}

impl<T> FusedIterator for Nodes<'_, T> {}

impl<T> Clone for Nodes<'_, T> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

/// Iterator over the values of a [`LinkedList`], in append order.
pub struct Iter<'a, T> {
    nodes: Nodes<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(first: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            nodes: Nodes::new(first),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            remaining: self.remaining,
        }
    }
}

/// Owning iterator produced by [`LinkedList::into_iter`].
pub struct IntoIter<T> {
    chain: Chain<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(chain: Chain<T>) -> Self {
        Self { chain }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.chain.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.chain.len(), Some(self.chain.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
