//! Wait strategies for contended acquisition.
//!
//! A lock invokes its strategy once per failed attempt. The strategy is a
//! scheduling hint only; it must not touch the lock state, so swapping one in
//! never changes the locking contract.

/// What a spinning thread does between two acquisition attempts.
pub trait Relax {
    /// Hint that the caller is busy-waiting.
    fn relax();
}

/// Hands the remaining time slice back to the scheduler on every failed
/// attempt. The default: on contended hardware this keeps the waiters from
/// burning whole quanta polling a cell that cannot change until the holder
/// runs again.
pub struct Yield;

impl Relax for Yield {
    #[inline]
    fn relax() {
        std::thread::yield_now();
    }
}

/// Stays on-CPU and issues the architecture's spin-wait hint. Lowest wake-up
/// latency, appropriate when critical sections are far shorter than a time
/// slice and contenders sit on separate cores.
pub struct Spin;

impl Relax for Spin {
    #[inline]
    fn relax() {
        core::hint::spin_loop();
    }
}
