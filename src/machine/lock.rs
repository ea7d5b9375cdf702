//! Optional mutual exclusion around dispatch.
//!
//! A root machine acquires its lock once per `initialize`, `dispatch`,
//! `reset` and drop, and releases it when the whole reaction and transition
//! loop is done. The default [`NoLock`] does nothing; [`MutexLock`] parks
//! contending threads on a `parking_lot` mutex.

use parking_lot::lock_api::RawMutex as _;
use parking_lot::RawMutex;
use std::fmt;
use std::sync::Arc;

/// Acquire/release pair bracketing one dispatch.
pub trait DispatchLock {
    fn acquire(&self);

    /// # Safety
    ///
    /// Must only be called by the thread that holds the lock through a
    /// matching [`acquire`](Self::acquire).
    unsafe fn release(&self);
}

/// Lock that never blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoLock;

impl DispatchLock for NoLock {
    fn acquire(&self) {}
    unsafe fn release(&self) {}
}

impl DispatchLock for RawMutex {
    fn acquire(&self) {
        self.lock();
    }

    unsafe fn release(&self) {
        // SAFETY: forwarded from the caller, who holds the lock.
        unsafe { self.unlock() }
    }
}

/// Parking mutex for machines shared across threads behind a handle.
pub struct MutexLock {
    raw: RawMutex,
}

impl MutexLock {
    pub const fn new() -> Self {
        Self {
            raw: RawMutex::INIT,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.raw.is_locked()
    }
}

impl Default for MutexLock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MutexLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutexLock")
            .field("locked", &self.is_locked())
            .finish()
    }
}

impl DispatchLock for MutexLock {
    fn acquire(&self) {
        self.raw.acquire();
    }

    unsafe fn release(&self) {
        // SAFETY: forwarded from the caller, who holds the lock.
        unsafe { self.raw.release() }
    }
}

impl<L: DispatchLock + ?Sized> DispatchLock for Arc<L> {
    fn acquire(&self) {
        (**self).acquire();
    }

    unsafe fn release(&self) {
        // SAFETY: forwarded from the caller, who holds the lock.
        unsafe { (**self).release() }
    }
}

/// Holds a lock for the rest of the enclosing scope, unwinding included.
pub(crate) struct LockScope<'a, L: DispatchLock> {
    lock: &'a L,
}

impl<'a, L: DispatchLock> LockScope<'a, L> {
    pub(crate) fn new(lock: &'a L) -> Self {
        lock.acquire();
        Self { lock }
    }
}

impl<L: DispatchLock> Drop for LockScope<'_, L> {
    fn drop(&mut self) {
        // SAFETY: acquired in `new` on this thread; a scope is never sent.
        unsafe { self.lock.release() }
    }
}
