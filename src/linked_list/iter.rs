use core::iter::FusedIterator;
use core::marker::PhantomData;

use super::{
    Data,
    node::{Link, Node},
};

/// An iterator over the payloads of a linked list, front to back.
pub struct Iter<'a> {
    next: Link,
    _list: PhantomData<&'a Node>,
}

impl<'a> Iter<'a> {
    /// Starts at `first`, which must stay valid for `'a`.
    pub(crate) fn new(first: Link) -> Self {
        Self {
            next: first,
            _list: PhantomData,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Data;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            let node = unsafe { node.as_ref() };
            self.next = node.next;
            node.data
        })
    }
}

impl FusedIterator for Iter<'_> {}

impl Clone for Iter<'_> {
    fn clone(&self) -> Self {
        Self::new(self.next)
    }
}

// Safety: the iterator only reads `Data` out of nodes that the borrowed list
// keeps alive and unmodified for `'a`.
unsafe impl Send for Iter<'_> {}
unsafe impl Sync for Iter<'_> {}
