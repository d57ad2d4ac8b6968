//! # Node allocators
//!
//! Every node of a [`LinkedList`](crate::LinkedList) is carved out of a
//! [`NodeAllocator`] and handed back to the same allocator when it is removed.
//!
//! ## Core Components
//!
//! - [`Global`]: the platform heap.
//! - [`hooks::Hooks`]: an allocator object built from caller supplied
//!   allocate/release functions, falling back to [`Global`] for whichever is unset.
//! - [`registry`]: a process-wide set of hooks, reachable through the
//!   zero-sized [`registry::Registered`] allocator.
//! - [`tracking::TrackingAllocator`]: bookkeeping wrapper that records live
//!   blocks and can refuse allocations past a limit.

use core::alloc::Layout;
use core::ptr::NonNull;

pub mod hooks;
pub mod registry;
pub mod tracking;

pub use hooks::{AllocFn, Hooks, ReleaseFn};
pub use registry::Registered;
pub use tracking::TrackingAllocator;

/// A source of node memory.
///
/// # Safety
///
/// A block returned by [`NodeAllocator::allocate`] must be valid for reads
/// and writes of `layout.size()` bytes, aligned to `layout.align()`, and not
/// handed out again until it has been released. [`NodeAllocator::release`]
/// must accept every block `allocate` produced on the same allocator.
pub unsafe trait NodeAllocator {
    /// Allocate a block for `layout`, returning `None` when memory is not available.
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// Give a block back to the allocator.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by [`NodeAllocator::allocate`] on this
    /// allocator with the same `layout`, and must not be released twice.
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout);
}

unsafe impl<A: NodeAllocator + ?Sized> NodeAllocator for &A {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        (**self).allocate(layout)
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { (**self).release(ptr, layout) }
    }
}

/// The platform heap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Global;

unsafe impl NodeAllocator for Global {
    /// Zero-sized layouts are refused with `None`.
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        if layout.size() == 0 {
            return None;
        }
        NonNull::new(unsafe { alloc::alloc::alloc(layout) })
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { alloc::alloc::dealloc(ptr.as_ptr(), layout) }
    }
}
