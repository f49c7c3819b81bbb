//! Raw-pointer node chain.
//!
//! This is the only module in the crate allowed to contain `unsafe` code.
//! A [`Chain`] owns every node through pointers obtained from
//! `Box::leak` and releases them with `Box::from_raw`. No `Box` is held
//! while nodes are linked, so moving the chain never retags a node and
//! the `tail` pointer stays valid for as long as the chain owns the node.

#![allow(unsafe_code)]

use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::node::Node;

/// Owned chain of heap nodes with head and tail pointers.
///
/// Invariants:
/// - `head.is_none()` iff `tail.is_none()` iff `len == 0`
/// - every pointer reachable from `head` came from `Box::leak` in
///   [`push_back`](Self::push_back) and is owned by this chain alone
/// - `tail` is the last node reachable from `head`; its `next` is `None`
pub(crate) struct Chain<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> Chain<T> {
    pub(crate) fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Link a new node holding `value` after the current tail.
    pub(crate) fn push_back(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node::new(value))));
        match self.tail {
            None => self.head = Some(node),
            // SAFETY: `tail` points at a live node owned by this chain, and
            // `&mut self` rules out any outstanding reference into it.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Unlink and free the first node, returning its value.
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` came from `Box::leak` and is owned solely by this
        // chain; it is unlinked below, so it is reclaimed exactly once.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        let Node { value, next } = *node;
        self.head = next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(value)
    }

    pub(crate) fn head(&self) -> Option<&Node<T>> {
        // SAFETY: owned live node; the shared borrow of `self` prevents
        // mutation through the chain while the reference lives.
        self.head.map(|node| unsafe { &*node.as_ptr() })
    }

    pub(crate) fn tail(&self) -> Option<&Node<T>> {
        // SAFETY: as for `head`.
        self.tail.map(|node| unsafe { &*node.as_ptr() })
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T> Node<T> {
    /// The following node, or `None` at the end of the chain.
    pub fn next(&self) -> Option<&Node<T>> {
        // SAFETY: `next` is either `None` or a live node owned by the same
        // chain as `self`; it outlives the borrow of `self`.
        self.next.map(|node| unsafe { &*node.as_ptr() })
    }
}

// SAFETY: the chain owns its nodes exactly as `Box<Node<T>>` would.
unsafe impl<T: Send> Send for Chain<T> {}
// SAFETY: shared access only yields `&Node<T>`.
unsafe impl<T: Sync> Sync for Chain<T> {}
// SAFETY: a node's `next` pointer is only followed to produce `&Node<T>`.
unsafe impl<T: Send> Send for Node<T> {}
// SAFETY: see above.
unsafe impl<T: Sync> Sync for Node<T> {}
