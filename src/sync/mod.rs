//! Synchronization primitives built on busy-waiting.

pub mod spin;

pub use spin::cas::{CasMutex, CasMutexGuard, RawCasMutex};
pub use spin::relax::{Relax, Spin, Yield};
pub use spin::tas::{RawTasMutex, TasMutex, TasMutexGuard};
