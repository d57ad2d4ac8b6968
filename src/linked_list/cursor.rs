use core::ptr::NonNull;

use super::{Data, iter::Iter, list::LinkedList, node::Node};
use crate::allocator::{Global, NodeAllocator};

/// A forward-only position on an element of a [`LinkedList`].
///
/// The cursor borrows the list, so the list cannot be modified while the
/// cursor exists. Dropping the cursor never touches the list.
pub struct Cursor<'a, A: NodeAllocator = Global> {
    list: &'a LinkedList<A>,
    current: NonNull<Node>,
    index: usize,
}

impl<'a, A: NodeAllocator> Cursor<'a, A> {
    /// Walks `index` steps from the head of `list`.
    ///
    /// Returns `None` when the chain ends first, which includes `index == len`.
    pub fn new(list: &'a LinkedList<A>, index: usize) -> Option<Self> {
        let mut current = list.head()?;
        for _ in 0..index {
            current = unsafe { current.as_ref().next }?;
        }
        Some(Self {
            list,
            current,
            index,
        })
    }

    /// Whether there is an element after the current one. Does not move the cursor.
    pub fn has_next(&self) -> bool {
        self.node().next.is_some()
    }

    /// Moves to the next element. Returns `false`, staying put, at the tail.
    pub fn advance(&mut self) -> bool {
        match self.node().next {
            Some(next) => {
                self.current = next;
                self.index += 1;
                true
            }
            None => false,
        }
    }

    /// The payload of the current element.
    pub fn current(&self) -> Data {
        self.node().data
    }

    /// The position of the current element.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn list(&self) -> &'a LinkedList<A> {
        self.list
    }

    /// Iterates from the current element to the tail.
    pub fn remaining(&self) -> Iter<'a> {
        Iter::new(Some(self.current))
    }

    fn node(&self) -> &Node {
        // The borrow of `list` keeps every node alive and unmodified.
        unsafe { self.current.as_ref() }
    }
}

impl<A: NodeAllocator> Clone for Cursor<'_, A> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            current: self.current,
            index: self.index,
        }
    }
}
