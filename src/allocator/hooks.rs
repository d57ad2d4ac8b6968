use core::alloc::Layout;
use core::ptr::NonNull;

use super::{Global, NodeAllocator};
use crate::error::ListError;

/// A custom allocate function. Returning `None` reports allocation failure.
pub type AllocFn = fn(Layout) -> Option<NonNull<u8>>;

/// A custom release function.
///
/// It is called with blocks produced by the paired [`AllocFn`] (or by
/// [`Global`] when no allocate hook is set) and the layout they were requested with.
pub type ReleaseFn = unsafe fn(NonNull<u8>, Layout);

/// An allocator assembled from optional allocate/release hooks.
///
/// Unset hooks fall back to [`Global`], so a `Hooks` value is always usable.
/// Registration is last-write-wins and there is no way to unregister.
///
/// # Safety
///
/// Installing a hook is `unsafe`. An allocate hook must return blocks that
/// are valid, writable and aligned for the requested layout. The release
/// side (the release hook, or [`Global`] when it is unset) must accept every
/// block the allocate side (the allocate hook, or [`Global`]) hands out. A
/// hook must not be replaced while blocks from the previous pairing are live.
#[derive(Debug, Default, Clone, Copy)]
pub struct Hooks {
    allocate: Option<AllocFn>,
    release: Option<ReleaseFn>,
}

impl Hooks {
    /// Creates hooks that route everything to [`Global`].
    pub const fn new() -> Self {
        Self {
            allocate: None,
            release: None,
        }
    }

    /// Returns these hooks with `allocate` installed.
    ///
    /// # Safety
    ///
    /// See the [type-level contract](Hooks#safety).
    pub const unsafe fn with_allocate(mut self, allocate: AllocFn) -> Self {
        self.allocate = Some(allocate);
        self
    }

    /// Returns these hooks with `release` installed.
    ///
    /// # Safety
    ///
    /// See the [type-level contract](Hooks#safety).
    pub const unsafe fn with_release(mut self, release: ReleaseFn) -> Self {
        self.release = Some(release);
        self
    }

    /// Installs an allocate hook.
    ///
    /// `None` is rejected with [`ListError::MissingHook`] and the current hook stays in place.
    ///
    /// # Safety
    ///
    /// See the [type-level contract](Hooks#safety).
    pub unsafe fn register_allocate(
        &mut self,
        allocate: Option<AllocFn>,
    ) -> Result<(), ListError> {
        let Some(allocate) = allocate else {
            log::warn!("[HOOKS] register_allocate: no function supplied");
            return Err(ListError::MissingHook);
        };
        self.allocate = Some(allocate);
        Ok(())
    }

    /// Installs a release hook.
    ///
    /// `None` is rejected with [`ListError::MissingHook`] and the current hook stays in place.
    ///
    /// # Safety
    ///
    /// See the [type-level contract](Hooks#safety).
    pub unsafe fn register_release(
        &mut self,
        release: Option<ReleaseFn>,
    ) -> Result<(), ListError> {
        let Some(release) = release else {
            log::warn!("[HOOKS] register_release: no function supplied");
            return Err(ListError::MissingHook);
        };
        self.release = Some(release);
        Ok(())
    }

    pub fn allocate_hook(&self) -> Option<AllocFn> {
        self.allocate
    }

    pub fn release_hook(&self) -> Option<ReleaseFn> {
        self.release
    }
}

// Safety: every installed hook was registered under the contract above.
unsafe impl NodeAllocator for Hooks {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        let block = match self.allocate {
            Some(allocate) => allocate(layout),
            None => {
                log::trace!("[HOOKS] allocate({:?}): default heap", layout);
                Global.allocate(layout)
            }
        };
        if block.is_none() {
            log::warn!("[HOOKS] allocate({:?}) failed", layout);
        }
        block
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        match self.release {
            Some(release) => unsafe { release(ptr, layout) },
            None => {
                log::trace!("[HOOKS] release({:p}): default heap", ptr);
                unsafe { Global.release(ptr, layout) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use core::alloc::Layout;
    use core::ptr::NonNull;
    use core::sync::atomic::{AtomicUsize, Ordering};

    use super::{Global, Hooks, NodeAllocator};
    use crate::error::ListError;
    use crate::linked_list::list::LinkedList;

    fn refuse(_layout: Layout) -> Option<NonNull<u8>> {
        None
    }

    static ALLOCATED: AtomicUsize = AtomicUsize::new(0);
    static RELEASED: AtomicUsize = AtomicUsize::new(0);

    fn counting_allocate(layout: Layout) -> Option<NonNull<u8>> {
        ALLOCATED.fetch_add(1, Ordering::SeqCst);
        Global.allocate(layout)
    }

    unsafe fn counting_release(ptr: NonNull<u8>, layout: Layout) {
        RELEASED.fetch_add(1, Ordering::SeqCst);
        unsafe { Global.release(ptr, layout) }
    }

    #[test]
    fn test_unset_hooks_use_global() {
        let hooks = Hooks::new();
        let layout = Layout::new::<u32>();
        let block = hooks.allocate(layout).unwrap();
        unsafe { hooks.release(block, layout) };
    }

    #[test]
    fn test_register_none_keeps_previous() {
        let mut hooks = Hooks::new();
        unsafe {
            hooks.register_allocate(Some(refuse)).unwrap();
            assert_eq!(hooks.register_allocate(None), Err(ListError::MissingHook));
        }
        assert!(hooks.allocate_hook().is_some());
        assert!(hooks.allocate(Layout::new::<u32>()).is_none());

        assert_eq!(unsafe { hooks.register_release(None) }, Err(ListError::MissingHook));
        assert!(hooks.release_hook().is_none());
    }

    #[test]
    fn test_release_hook_is_called() {
        let hooks = unsafe { Hooks::new().with_release(counting_release) };
        let layout = Layout::new::<u64>();
        let before = RELEASED.load(Ordering::SeqCst);
        let block = hooks.allocate(layout).unwrap();
        unsafe { hooks.release(block, layout) };
        assert_eq!(RELEASED.load(Ordering::SeqCst), before + 1);
    }

    // Only the allocate side is custom: nodes still go back to the default heap.
    #[test]
    fn test_allocate_hook_pairs_with_global_release() {
        let hooks = unsafe { Hooks::new().with_allocate(counting_allocate) };
        assert!(hooks.release_hook().is_none());

        let mut list = LinkedList::new_in(hooks);
        for value in 0..4 {
            list.push_back(value).unwrap();
        }
        assert_eq!(ALLOCATED.load(Ordering::SeqCst), 4);

        assert_eq!(list.remove(1), Ok(1));
        list.clear();
        list.push_front(9).unwrap();
        assert_eq!(list.iter().next(), Some(9));
        assert_eq!(ALLOCATED.load(Ordering::SeqCst), 5);
    }
}
