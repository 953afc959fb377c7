//! # Spin Locks Module
//!
//! Mutual-exclusion primitives that busy-wait instead of parking the calling
//! thread. Waiters poll the lock state through a single atomic operation and
//! hand their scheduling quantum back between attempts.
//!
//! ## Implementations
//! - [x] [`TasMutex`](tas::TasMutex) - spinlock built on atomic test-and-set
//!     - [x] Core locking (`lock()`, `try_lock()`, guard-based unlock)
//!     - [x] Debug-build recursion checking
//! - [x] [`CasMutex`](cas::CasMutex) - spinlock built on atomic
//!   compare-and-swap; a failed attempt never writes the state cell
//! - [x] Pluggable wait strategy ([`relax`]) - scheduler yield by default
//!     - [ ] Exponential backoff strategy for high-contention scenarios
//!
//! ## Usage Guidelines
//! ```rust
//! use spinwait::TasMutex;
//!
//! let lock = TasMutex::new(0);
//! *lock.lock() = 42;
//! assert_eq!(*lock.lock(), 42);
//! ```
//!
//! ## Safety
//! - All locks are `Send + Sync` for cross-thread use and are shared by
//!   reference; the raw state cell cannot be duplicated
//! - There is no queue and no fairness: a spinning thread may starve under
//!   adversarial scheduling
//! - Do not hold a lock across long-running operations; every waiter burns
//!   its time slice until the holder lets go

pub mod atomic;
pub mod cas;
pub mod relax;
pub mod tas;


/// Monotonic per-thread ids backing the debug-build holder checks.
///
/// Ids start at 1 so that 0 can serve as the "no holder" sentinel.
#[cfg(debug_assertions)]
pub(crate) mod thread_id {
    use core::sync::atomic::{AtomicU64, Ordering};

    static NEXT: AtomicU64 = AtomicU64::new(1);

    std::thread_local! {
        static CURRENT: u64 = NEXT.fetch_add(1, Ordering::Relaxed);
    }

    /// Non-zero id of the calling thread, stable for the thread's lifetime.
    pub(crate) fn current() -> u64 {
        CURRENT.with(|id| *id)
    }
}
