//! Process-wide hook registration.
//!
//! Lists opt into the registry by using the [`Registered`] allocator. Hooks
//! are looked up on every call, so a registration applies to all later
//! allocations and releases. Blocks are released by whichever hook is
//! registered at release time, so a hook may only be replaced while no
//! [`Registered`] list holds nodes.

use core::alloc::Layout;
use core::ptr::NonNull;

use spin::RwLock;

use super::{AllocFn, Hooks, NodeAllocator, ReleaseFn};
use crate::error::ListError;

static HOOKS: RwLock<Hooks> = RwLock::new(Hooks::new());

/// Registers the process-wide allocate hook. `None` is rejected and the
/// previous hook (or the default heap) remains in effect.
///
/// # Safety
///
/// The hook must meet the [`Hooks` contract](Hooks#safety), and no block
/// allocated through [`Registered`] may be live when the hook is replaced.
pub unsafe fn register_allocate(allocate: Option<AllocFn>) -> Result<(), ListError> {
    unsafe { HOOKS.write().register_allocate(allocate) }
}

/// Registers the process-wide release hook. `None` is rejected and the
/// previous hook (or the default heap) remains in effect.
///
/// # Safety
///
/// The hook must meet the [`Hooks` contract](Hooks#safety), and no block
/// allocated through [`Registered`] may be live when the hook is replaced.
pub unsafe fn register_release(release: Option<ReleaseFn>) -> Result<(), ListError> {
    unsafe { HOOKS.write().register_release(release) }
}

/// A snapshot of the current registration.
pub fn hooks() -> Hooks {
    *HOOKS.read()
}

/// Allocator backed by the process-wide hooks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Registered;

// Safety: hooks only change under the contract of the `register_*` functions.
unsafe impl NodeAllocator for Registered {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        hooks().allocate(layout)
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { hooks().release(ptr, layout) }
    }
}

#[cfg(test)]
mod tests {
    use core::alloc::Layout;
    use core::ptr::NonNull;
    use core::sync::atomic::{AtomicUsize, Ordering};

    use super::{Registered, hooks, register_allocate, register_release};
    use crate::allocator::{Global, NodeAllocator};
    use crate::error::ListError;
    use crate::linked_list::list::LinkedList;

    static ALLOCATED: AtomicUsize = AtomicUsize::new(0);
    static RELEASED: AtomicUsize = AtomicUsize::new(0);
    static SWAPPED_RELEASED: AtomicUsize = AtomicUsize::new(0);

    fn counting_allocate(layout: Layout) -> Option<NonNull<u8>> {
        ALLOCATED.fetch_add(1, Ordering::SeqCst);
        Global.allocate(layout)
    }

    unsafe fn counting_release(ptr: NonNull<u8>, layout: Layout) {
        RELEASED.fetch_add(1, Ordering::SeqCst);
        unsafe { Global.release(ptr, layout) }
    }

    unsafe fn swapped_release(ptr: NonNull<u8>, layout: Layout) {
        SWAPPED_RELEASED.fetch_add(1, Ordering::SeqCst);
        unsafe { Global.release(ptr, layout) }
    }

    // The registry is process state, so all of its checks share one test.
    #[test]
    fn test_registry_routes_list_nodes() {
        unsafe {
            assert_eq!(register_allocate(None), Err(ListError::MissingHook));
            assert_eq!(register_release(None), Err(ListError::MissingHook));
        }

        // Nothing registered yet: the default heap serves the list.
        let mut list = LinkedList::new_in(Registered);
        list.push_back(1).unwrap();
        assert_eq!(list.remove(0), Ok(1));

        // The list is empty, so the hooks may be replaced.
        unsafe {
            register_allocate(Some(counting_allocate)).unwrap();
            register_release(Some(counting_release)).unwrap();
        }
        assert!(hooks().allocate_hook().is_some());

        list.push_back(2).unwrap();
        list.push_back(3).unwrap();
        list.push_front(1).unwrap();
        assert_eq!(ALLOCATED.load(Ordering::SeqCst), 3);

        list.remove(1).unwrap();
        assert_eq!(RELEASED.load(Ordering::SeqCst), 1);

        assert_eq!(unsafe { register_release(None) }, Err(ListError::MissingHook));
        list.clear();
        assert_eq!(RELEASED.load(Ordering::SeqCst), 3);

        // Swap the release hook only once no node is live.
        unsafe { register_release(Some(swapped_release)).unwrap() };
        list.push_back(4).unwrap();
        list.push_back(5).unwrap();
        drop(list);
        assert_eq!(SWAPPED_RELEASED.load(Ordering::SeqCst), 2);
        assert_eq!(RELEASED.load(Ordering::SeqCst), 3);
        assert_eq!(ALLOCATED.load(Ordering::SeqCst), 5);
    }
}
