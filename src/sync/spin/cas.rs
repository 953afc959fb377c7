//! Spinlock built on atomic compare-and-swap.

use core::marker::PhantomData;
use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(debug_assertions)]
use core::sync::atomic::AtomicU64;

use lock_api::{GuardSend, RawMutex};

use super::atomic::compare_and_swap;
use super::relax::{Relax, Yield};

#[cfg(debug_assertions)]
use super::thread_id;

/// A spin lock with the same contract as [`TasMutex`](super::tas::TasMutex)
/// but acquired through compare-and-swap.
///
/// A failed attempt is non-destructive: the cell is compared and left alone
/// rather than blindly overwritten. That distinction is invisible for a
/// single boolean but is the shape that generalizes to versioned or
/// multi-word lock words.
pub type CasMutex<T, R = Yield> = lock_api::Mutex<RawCasMutex<R>, T>;

/// Guard that unlocks its [`CasMutex`] on drop.
pub type CasMutexGuard<'a, T, R = Yield> = lock_api::MutexGuard<'a, RawCasMutex<R>, T>;

/// Raw implementation of the compare-and-swap lock.
pub struct RawCasMutex<R = Yield> {
    locked: AtomicBool,
    #[cfg(debug_assertions)]
    holder: AtomicU64,
    relax: PhantomData<R>,
}

impl<R> RawCasMutex<R> {
    #[cfg(debug_assertions)]
    const NO_HOLDER: u64 = 0;

    #[cfg(debug_assertions)]
    fn check_recursion(&self) {
        let holder = self.holder.load(Ordering::Relaxed);
        if holder != Self::NO_HOLDER && holder == thread_id::current() {
            panic!("recursive lock of a spin lock already held by this thread");
        }
    }
}

unsafe impl<R: Relax> RawMutex for RawCasMutex<R> {
    const INIT: Self = RawCasMutex {
        locked: AtomicBool::new(false),
        #[cfg(debug_assertions)]
        holder: AtomicU64::new(0),
        relax: PhantomData,
    };

    type GuardMarker = GuardSend;

    /// Attempts the `false -> true` swap until it lands, relaxing between
    /// attempts.
    fn lock(&self) {
        #[cfg(debug_assertions)]
        self.check_recursion();

        while !compare_and_swap(&self.locked, false, true) {
            R::relax();
        }

        #[cfg(debug_assertions)]
        self.holder.store(thread_id::current(), Ordering::Relaxed);
    }

    /// Single compare-and-swap attempt; on failure the cell is untouched.
    fn try_lock(&self) -> bool {
        let won = compare_and_swap(&self.locked, false, true);

        #[cfg(debug_assertions)]
        if won {
            self.holder.store(thread_id::current(), Ordering::Relaxed);
        }

        won
    }

    /// Release-stores `false`; idempotent on an unlocked lock.
    unsafe fn unlock(&self) {
        #[cfg(debug_assertions)]
        self.holder.store(Self::NO_HOLDER, Ordering::Relaxed);

        self.locked.store(false, Ordering::Release);
    }
}
