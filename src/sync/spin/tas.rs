//! Spinlock built on atomic test-and-set.

use core::marker::PhantomData;
use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(debug_assertions)]
use core::sync::atomic::AtomicU64;

use lock_api::{GuardSend, RawMutex};

use super::atomic::test_and_set;
use super::relax::{Relax, Yield};

#[cfg(debug_assertions)]
use super::thread_id;

/// A spin-based mutual exclusion lock whose acquire path is a test-and-set
/// loop.
///
/// Every acquisition attempt unconditionally swaps `true` into the state cell
/// and inspects the previous value; the thread that read `false` owns the
/// critical section until its guard drops. Losers invoke the wait strategy
/// `R` and retry.
///
/// # Features
/// - Guard-based unlock: release runs on every exit path, panics included
/// - Pluggable wait strategy (scheduler yield by default)
/// - Debug-mode recursion checking, compiled out of release builds
/// - Acquire/Release memory ordering on the lock transitions
///
/// # Example
/// ```
/// use spinwait::TasMutex;
///
/// let lock = TasMutex::new(0);
/// {
///     let mut guard = lock.lock();
///     *guard = 10;
/// }
/// assert_eq!(*lock.lock(), 10);
/// ```
///
/// # Safety Note
/// - This is a busy-wait lock. Waiters never park; do not hold it for long.
/// - There is no fairness. The order in which spinning threads win is
///   unspecified and a thread may starve under adversarial scheduling.
/// - The lock records no owner outside debug builds: a release-build
///   recursive `lock()` deadlocks the calling thread against itself.
pub type TasMutex<T, R = Yield> = lock_api::Mutex<RawTasMutex<R>, T>;

/// Guard that unlocks its [`TasMutex`] on drop.
pub type TasMutexGuard<'a, T, R = Yield> = lock_api::MutexGuard<'a, RawTasMutex<R>, T>;

/// Raw implementation of the test-and-set lock.
///
/// The `AtomicBool` state cell is the single source of exclusion truth
/// (`false` = unlocked). Containing an atomic, the type is not copyable;
/// contenders share one instance by reference.
pub struct RawTasMutex<R = Yield> {
    locked: AtomicBool,
    #[cfg(debug_assertions)]
    holder: AtomicU64,
    relax: PhantomData<R>,
}

impl<R> RawTasMutex<R> {
    #[cfg(debug_assertions)]
    const NO_HOLDER: u64 = 0;

    /// Panics if the calling thread already holds this lock (debug builds
    /// only). A recursive acquire can never succeed, so catching it beats
    /// spinning forever.
    #[cfg(debug_assertions)]
    fn check_recursion(&self) {
        let holder = self.holder.load(Ordering::Relaxed);
        if holder != Self::NO_HOLDER && holder == thread_id::current() {
            panic!("recursive lock of a spin lock already held by this thread");
        }
    }
}

unsafe impl<R: Relax> RawMutex for RawTasMutex<R> {
    const INIT: Self = RawTasMutex {
        locked: AtomicBool::new(false),
        #[cfg(debug_assertions)]
        holder: AtomicU64::new(0),
        relax: PhantomData,
    };

    type GuardMarker = GuardSend;

    /// Spins until the test-and-set reads back `false`, relaxing between
    /// attempts. Does not return until exclusion is obtained.
    fn lock(&self) {
        #[cfg(debug_assertions)]
        self.check_recursion();

        while test_and_set(&self.locked) {
            R::relax();
        }

        #[cfg(debug_assertions)]
        self.holder.store(thread_id::current(), Ordering::Relaxed);
    }

    /// Single test-and-set attempt; never blocks.
    fn try_lock(&self) -> bool {
        let won = !test_and_set(&self.locked);

        #[cfg(debug_assertions)]
        if won {
            self.holder.store(thread_id::current(), Ordering::Relaxed);
        }

        won
    }

    /// Release-stores `false` so the critical-section writes are visible to
    /// the next acquirer. Unlocking an already-unlocked lock leaves it
    /// unlocked.
    unsafe fn unlock(&self) {
        #[cfg(debug_assertions)]
        self.holder.store(Self::NO_HOLDER, Ordering::Relaxed);

        self.locked.store(false, Ordering::Release);
    }
}
