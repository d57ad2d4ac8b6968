//! A singly linked list of `u32` payloads whose nodes live in memory handed
//! out by a pluggable [`NodeAllocator`](allocator::NodeAllocator).
//!
//! ```
//! use mola_list::{LinkedList, ListError};
//!
//! let mut list = LinkedList::new();
//! list.push_back(5)?;
//! list.push_front(3)?;
//! list.insert(1, 4)?;
//! assert_eq!(list.find(4), Some(1));
//!
//! assert_eq!(list.remove(0)?, 3);
//! assert_eq!(list.len(), 2);
//! # Ok::<(), ListError>(())
//! ```
#![no_std]

extern crate alloc;

pub mod allocator;
pub mod error;
pub mod linked_list;

pub use error::ListError;
pub use linked_list::{Data, cursor::Cursor, iter::Iter, list::LinkedList};
