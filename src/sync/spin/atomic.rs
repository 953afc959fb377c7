//! The two hardware-backed primitives the locks are built on.
//!
//! Both operations order memory on the locking transition: a successful
//! `false -> true` step is an acquire, so the winner observes every write the
//! previous holder published with its release-store of `false`. Relaxed
//! ordering would preserve the boolean outcome but not that visibility.

use core::sync::atomic::{AtomicBool, Ordering};

/// Atomically writes `true` into `cell` and returns the value it held before.
///
/// A return of `false` means the caller performed the `Unlocked -> Locked`
/// transition; `true` means the cell was already taken (and the redundant
/// write of `true` changed nothing).
#[inline(always)]
pub fn test_and_set(cell: &AtomicBool) -> bool {
    cell.swap(true, Ordering::Acquire)
}

/// Atomically replaces the value of `cell` with `new` if it currently equals
/// `expected`, reporting whether the swap happened.
///
/// On failure the cell is left untouched.
#[inline(always)]
pub fn compare_and_swap(cell: &AtomicBool, expected: bool, new: bool) -> bool {
    cell.compare_exchange(expected, new, Ordering::Acquire, Ordering::Relaxed)
        .is_ok()
}
