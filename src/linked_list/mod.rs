//! # Singly Linked List
//!
//! A singly linked list of [`Data`] payloads whose nodes are allocated from a
//! [`NodeAllocator`](crate::allocator::NodeAllocator).
//!
//! ## Core Components
//!
//! - [`list::LinkedList`]: owns the node chain and every mutation on it.
//! - [`cursor::Cursor`]: a borrowed position inside a list.
//! - [`iter::Iter`]: a borrowing iterator over the payloads.
//!
//! ## Ownership
//!
//! Each node is owned by its predecessor, or by the list if it is the head.
//! Cursors and iterators borrow the list, so the list cannot be modified
//! while one of them is alive.
//!
//! # Examples
//!
//! ```
//! use mola_list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! for value in [1, 2, 3] {
//!     list.push_front(value).unwrap();
//! }
//!
//! let mut cursor = list.cursor(0).unwrap();
//! let mut values = vec![cursor.current()];
//! while cursor.advance() {
//!     values.push(cursor.current());
//! }
//! assert_eq!(values, vec![3, 2, 1]);
//! ```

/// The payload stored in every node.
pub type Data = u32;

pub mod cursor;
pub mod iter;
pub mod list;
pub(crate) mod node;

#[cfg(test)]
mod tests;
