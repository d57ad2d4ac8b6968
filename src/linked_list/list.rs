use core::fmt::{Debug, Formatter};

use super::{
    Data,
    cursor::Cursor,
    iter::Iter,
    node::{Link, Node, link_at, tail_link},
};
use crate::allocator::{Global, NodeAllocator};
use crate::error::ListError;

/// A singly linked list whose nodes come from the allocator `A`.
///
/// Index bounds are discovered by walking the chain, so every indexed
/// operation costs time proportional to the index, not to the length.
pub struct LinkedList<A: NodeAllocator = Global> {
    head: Link,
    alloc: A,
}

impl LinkedList<Global> {
    /// Creates a new, empty list on the platform heap.
    pub const fn new() -> Self {
        Self::new_in(Global)
    }
}

impl Default for LinkedList<Global> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: NodeAllocator> LinkedList<A> {
    /// Creates a new, empty list whose nodes are allocated from `alloc`.
    pub const fn new_in(alloc: A) -> Self {
        LinkedList { head: None, alloc }
    }

    /// The allocator backing this list.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Prepends `data`. O(1).
    pub fn push_front(&mut self, data: Data) -> Result<(), ListError> {
        let node = Node::alloc_in(&self.alloc, data, self.head).ok_or(ListError::AllocFailed)?;
        self.head = Some(node);
        Ok(())
    }

    /// Appends `data` after walking to the tail. O(n).
    pub fn push_back(&mut self, data: Data) -> Result<(), ListError> {
        let tail = tail_link(&mut self.head);
        let node = Node::alloc_in(&self.alloc, data, None).ok_or(ListError::AllocFailed)?;
        unsafe { *tail.as_ptr() = Some(node) };
        Ok(())
    }

    /// Inserts `data` so that it becomes the element at `index`, shifting the
    /// rest back. `index == len` appends; anything past that fails.
    ///
    /// The list is left untouched when the index is out of bounds or the
    /// allocation fails.
    pub fn insert(&mut self, index: usize, data: Data) -> Result<(), ListError> {
        let link = link_at(&mut self.head, index).ok_or(ListError::OutOfBounds { index })?;
        let next = unsafe { *link.as_ptr() };
        let node = Node::alloc_in(&self.alloc, data, next).ok_or(ListError::AllocFailed)?;
        unsafe { *link.as_ptr() = Some(node) };
        Ok(())
    }

    /// Unlinks the element at `index`, releases its node and returns its payload.
    pub fn remove(&mut self, index: usize) -> Result<Data, ListError> {
        let link = link_at(&mut self.head, index).ok_or(ListError::OutOfBounds { index })?;
        let node = unsafe { *link.as_ptr() }.ok_or(ListError::OutOfBounds { index })?;
        unsafe {
            *link.as_ptr() = node.as_ref().next;
            Ok(Node::release_in(&self.alloc, node).data)
        }
    }

    /// Removes the first element.
    pub fn pop_front(&mut self) -> Option<Data> {
        self.remove(0).ok()
    }

    /// Releases every node. The list stays usable and empty.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            // The chain was detached from `head` above, so nothing else reaches `node`.
            current = unsafe { Node::release_in(&self.alloc, node) }.next;
        }
    }

    /// Index of the first element equal to `data`.
    pub fn find(&self, data: Data) -> Option<usize> {
        self.iter().position(|value| value == data)
    }

    /// The element at `index`.
    pub fn get(&self, index: usize) -> Option<Data> {
        self.iter().nth(index)
    }

    pub fn front(&self) -> Option<Data> {
        self.head.map(|head| unsafe { head.as_ref().data })
    }

    /// Number of nodes reachable from the head. O(n).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.head)
    }

    /// A cursor on the element at `index`, or `None` if there is no such element.
    pub fn cursor(&self, index: usize) -> Option<Cursor<'_, A>> {
        Cursor::new(self, index)
    }

    pub(crate) fn head(&self) -> Link {
        self.head
    }
}

impl<A: NodeAllocator> Drop for LinkedList<A> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a, A: NodeAllocator> IntoIterator for &'a LinkedList<A> {
    type Item = Data;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: NodeAllocator> Debug for LinkedList<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Safety: the list exclusively owns its nodes, so it can move between
// threads whenever its allocator can.
unsafe impl<A: NodeAllocator + Send> Send for LinkedList<A> {}
unsafe impl<A: NodeAllocator + Sync> Sync for LinkedList<A> {}
