//! Busy-wait mutual exclusion with a small benchmarking toolbox around it.
//!
//! The heart of the crate is a pair of interchangeable spin locks: one
//! acquired through atomic test-and-set, one through atomic
//! compare-and-swap. Both implement the `lock_api` raw-mutex interface, so
//! consumers are written once against "a lock" and get scoped, panic-safe
//! release through RAII guards. Around the locks sit the utilities used to
//! exercise and measure them:
//! - A stopwatch with mean/variance statistics for timing critical sections
//! - Colored console printing and a `log` backend built on it
//! - Generic array sorting routines
//! - Demo binaries: lock contention, sequential-vs-parallel array sums, and
//!   a message-passing ring
//!
//! # Architectural Overview
//! ```text
//! +----------------------------------+
//! |    demo binaries, test suites    |
//! +----------------------------------+
//! |    TasMutex     |    CasMutex    |
//! +----------------------------------+
//! |  test_and_set | compare_and_swap |
//! +----------------------------------+
//! ```
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use spinwait::CasMutex;
//!
//! let counter = Arc::new(CasMutex::new(0u64));
//! let mut workers = Vec::new();
//! for _ in 0..4 {
//!     let counter = Arc::clone(&counter);
//!     workers.push(thread::spawn(move || {
//!         for _ in 0..100 {
//!             *counter.lock() += 1;
//!         }
//!     }));
//! }
//! for worker in workers {
//!     worker.join().unwrap();
//! }
//! assert_eq!(*counter.lock(), 400);
//! ```
//!
//! # Guarantees and Limits
//! - Mutual exclusion holds between any number of threads sharing one lock
//!   instance by reference; the raw locks contain atomics and cannot be
//!   copied into a second, independent state cell
//! - Acquisition busy-waits, yielding the scheduler between attempts; there
//!   is no wait queue and no fairness guarantee
//! - Misuse is not detected at runtime in release builds: a recursive
//!   acquire deadlocks the calling thread, and the locks record no owner

pub mod io;
pub mod sort;
pub mod sync;
pub mod timer;

pub use sync::spin::cas::{CasMutex, CasMutexGuard, RawCasMutex};
pub use sync::spin::relax::{Relax, Spin, Yield};
pub use sync::spin::tas::{RawTasMutex, TasMutex, TasMutexGuard};
pub use timer::{Timer, TimerError};
