use core::alloc::Layout;
use core::ptr::NonNull;

use super::Data;
use crate::allocator::NodeAllocator;

/// The owning link from a list or a node to the next node.
pub(crate) type Link = Option<NonNull<Node>>;

/// A node in the chain. Nodes are plain data: they are created by
/// [`Node::alloc_in`] and destroyed by [`Node::release_in`], never dropped.
pub(crate) struct Node {
    pub(crate) data: Data,
    pub(crate) next: Link,
}

impl Node {
    const LAYOUT: Layout = Layout::new::<Node>();

    /// Allocates a node from `alloc` holding `data` and linked in front of `next`.
    ///
    /// A misaligned block is handed back to `alloc` and reported as a failure.
    pub(crate) fn alloc_in<A: NodeAllocator>(
        alloc: &A,
        data: Data,
        next: Link,
    ) -> Option<NonNull<Node>> {
        let Some(block) = alloc.allocate(Self::LAYOUT) else {
            log::warn!("[LIST] node allocation failed");
            return None;
        };
        let node = block.cast::<Node>();
        if !node.as_ptr().is_aligned() {
            log::error!("[LIST] allocator returned misaligned block {:p}", block);
            unsafe { alloc.release(block, Self::LAYOUT) };
            return None;
        }
        unsafe { node.write(Node { data, next }) };
        Some(node)
    }

    /// Hands the node's memory back to `alloc` and returns its contents.
    ///
    /// # Safety
    ///
    /// `node` must have been produced by [`Node::alloc_in`] with the same
    /// allocator and must no longer be reachable from any link.
    pub(crate) unsafe fn release_in<A: NodeAllocator>(alloc: &A, node: NonNull<Node>) -> Node {
        unsafe {
            let contents = node.read();
            alloc.release(node.cast(), Self::LAYOUT);
            contents
        }
    }
}

/// Walks `index` links starting at `head` and returns the link found there.
///
/// Returns `None` when the chain ends before `index` links were followed, so
/// the cost is proportional to the distance walked. The link returned for
/// `index == len` is the empty link after the tail.
pub(crate) fn link_at(head: &mut Link, index: usize) -> Option<NonNull<Link>> {
    let mut link = NonNull::from(head);
    for _ in 0..index {
        let node = unsafe { *link.as_ptr() }?;
        link = unsafe { NonNull::from(&mut (*node.as_ptr()).next) };
    }
    Some(link)
}

/// Returns the empty link after the last node.
pub(crate) fn tail_link(head: &mut Link) -> NonNull<Link> {
    let mut link = NonNull::from(head);
    while let Some(node) = unsafe { *link.as_ptr() } {
        link = unsafe { NonNull::from(&mut (*node.as_ptr()).next) };
    }
    link
}
