use core::alloc::Layout;
use core::ptr::NonNull;

use hashbrown::HashMap;
use spin::Mutex;

use super::{Global, NodeAllocator};

struct Ledger {
    live: HashMap<usize, Layout>,
    allocations: usize,
    releases: usize,
}

/// An allocator wrapper that keeps a ledger of every live block.
///
/// Releasing a block the ledger does not know about (a double release, or a
/// pointer from another allocator) is logged and dropped instead of being
/// forwarded to the inner allocator. A release with a layout that differs
/// from the allocation is logged and forwarded with the recorded layout.
pub struct TrackingAllocator<A: NodeAllocator = Global> {
    inner: A,
    limit: Option<usize>,
    ledger: Mutex<Ledger>,
}

impl TrackingAllocator<Global> {
    /// Tracks blocks from the platform heap.
    pub fn new() -> Self {
        Self::wrap(Global)
    }
}

impl Default for TrackingAllocator<Global> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: NodeAllocator> TrackingAllocator<A> {
    /// Tracks blocks from `inner` without a limit.
    pub fn wrap(inner: A) -> Self {
        Self {
            inner,
            limit: None,
            ledger: Mutex::new(Ledger {
                live: HashMap::new(),
                allocations: 0,
                releases: 0,
            }),
        }
    }

    /// Tracks blocks from `inner`, refusing to allocate while `max_live`
    /// blocks are outstanding.
    pub fn with_limit(inner: A, max_live: usize) -> Self {
        let mut tracker = Self::wrap(inner);
        tracker.limit = Some(max_live);
        tracker
    }

    /// Number of blocks handed out and not yet released.
    pub fn live(&self) -> usize {
        self.ledger.lock().live.len()
    }

    /// Total successful allocations.
    pub fn allocations(&self) -> usize {
        self.ledger.lock().allocations
    }

    /// Total accepted releases.
    pub fn releases(&self) -> usize {
        self.ledger.lock().releases
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

// Safety: blocks come from `inner` unchanged and go back to it with the
// layout they were allocated with.
unsafe impl<A: NodeAllocator> NodeAllocator for TrackingAllocator<A> {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        let mut ledger = self.ledger.lock();
        if self.limit.is_some_and(|limit| ledger.live.len() >= limit) {
            log::warn!(
                "[TRACKING] allocate({:?}): limit of {} live blocks reached",
                layout,
                ledger.live.len()
            );
            return None;
        }

        let block = self.inner.allocate(layout)?;
        ledger.live.insert(block.as_ptr() as usize, layout);
        ledger.allocations += 1;
        Some(block)
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        let mut ledger = self.ledger.lock();
        match ledger.live.remove(&(ptr.as_ptr() as usize)) {
            Some(recorded) => {
                if recorded != layout {
                    log::error!(
                        "[TRACKING] release({:p}): layout {:?} does not match allocated {:?}",
                        ptr,
                        layout,
                        recorded
                    );
                }
                ledger.releases += 1;
                unsafe { self.inner.release(ptr, recorded) }
            }
            None => {
                log::error!("[TRACKING] release({:p}): block is not live", ptr);
            }
        }
    }
}
