//! Debug-only guard against nested entry into a table.
//!
//! A table only runs foreign code while hashing (through `SlotHasher`). If
//! that code reaches back into the same table mid-operation, debug builds
//! panic instead of observing a half-updated chain. Release builds keep the
//! type but none of the bookkeeping.

#[cfg(debug_assertions)]
use core::cell::Cell;
use core::marker::PhantomData;

/// Per-table busy flag. Hold the guard from `enter` for the duration of an
/// operation: `let _busy = self.reentrancy.enter();`.
#[derive(Debug)]
pub struct DebugReentrancy {
    #[cfg(debug_assertions)]
    busy: Cell<bool>,
    // Single-threaded: keeps the owning table !Send + !Sync.
    _local: PhantomData<*mut ()>,
}

impl DebugReentrancy {
    pub const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            busy: Cell::new(false),
            _local: PhantomData,
        }
    }

    /// Marks the owner busy. Panics in debug builds if it already is.
    #[inline]
    pub fn enter(&self) -> ReentrancyGuard<'_> {
        #[cfg(debug_assertions)]
        {
            assert!(
                !self.busy.replace(true),
                "reentrancy detected: course table entered while already in use"
            );
            ReentrancyGuard { owner: self }
        }

        #[cfg(not(debug_assertions))]
        {
            ReentrancyGuard { _owner: PhantomData }
        }
    }

    /// True while a guard is outstanding. Always false in release builds.
    #[inline]
    pub fn is_busy(&self) -> bool {
        #[cfg(debug_assertions)]
        {
            self.busy.get()
        }

        #[cfg(not(debug_assertions))]
        {
            false
        }
    }
}

impl Default for DebugReentrancy {
    fn default() -> Self {
        Self::new()
    }
}

/// Clears the busy flag on drop.
pub struct ReentrancyGuard<'a> {
    #[cfg(debug_assertions)]
    owner: &'a DebugReentrancy,
    #[cfg(not(debug_assertions))]
    _owner: PhantomData<&'a ()>,
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        self.owner.busy.set(false);
    }
}
