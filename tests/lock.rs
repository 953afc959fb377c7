//! Multi-thread properties of the two lock variants.
//!
//! Everything here runs against both raw locks through the generic
//! `lock_api` surface, the way consumers are expected to use them.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use lock_api::{Mutex, RawMutex};
use spinwait::{RawCasMutex, RawTasMutex};

/// Spawns `threads` workers that each add one to a shared counter `rounds`
/// times, and returns the final count.
fn count_up<R>(threads: usize, rounds: usize) -> u64
where
    R: RawMutex + Send + Sync + 'static,
{
    let counter = Arc::new(Mutex::<R, u64>::new(0));
    let mut workers = Vec::new();
    for _ in 0..threads {
        let counter = Arc::clone(&counter);
        workers.push(thread::spawn(move || {
            for _ in 0..rounds {
                *counter.lock() += 1;
            }
        }));
    }
    for worker in workers {
        worker.join().unwrap();
    }
    let count = *counter.lock();
    count
}

/// Every worker asserts it is alone between acquire and release.
fn assert_critical_sections_never_overlap<R>()
where
    R: RawMutex + Send + Sync + 'static,
{
    let lock = Arc::new(Mutex::<R, ()>::new(()));
    let inside = Arc::new(AtomicUsize::new(0));

    let mut workers = Vec::new();
    for _ in 0..8 {
        let lock = Arc::clone(&lock);
        let inside = Arc::clone(&inside);
        workers.push(thread::spawn(move || {
            for _ in 0..200 {
                let _guard = lock.lock();
                assert_eq!(inside.fetch_add(1, Ordering::SeqCst), 0, "two holders at once");
                thread::yield_now();
                inside.fetch_sub(1, Ordering::SeqCst);
            }
        }));
    }
    for worker in workers {
        worker.join().unwrap();
    }
}

#[test]
fn tas_critical_sections_never_overlap() {
    assert_critical_sections_never_overlap::<RawTasMutex>();
}

#[test]
fn cas_critical_sections_never_overlap() {
    assert_critical_sections_never_overlap::<RawCasMutex>();
}

#[test]
fn tas_loses_no_updates() {
    assert_eq!(count_up::<RawTasMutex>(8, 1_000), 8_000);
}

#[test]
fn cas_loses_no_updates() {
    assert_eq!(count_up::<RawCasMutex>(8, 1_000), 8_000);
}

#[test]
fn tas_stress_counts_exactly() {
    assert_eq!(count_up::<RawTasMutex>(50, 10_000), 500_000);
}

#[test]
fn cas_stress_counts_exactly() {
    assert_eq!(count_up::<RawCasMutex>(50, 10_000), 500_000);
}

/// A value stored right before the guard drops is what the next acquirer
/// reads right after its `lock()` returns.
fn write_before_release_is_read_after_next_acquire<R>()
where
    R: RawMutex + Send + Sync + 'static,
{
    let slot = Arc::new(Mutex::<R, u64>::new(0));

    let mut guard = slot.lock();
    let observer = {
        let slot = Arc::clone(&slot);
        thread::spawn(move || *slot.lock())
    };
    // Give the observer time to start spinning on the held lock.
    thread::sleep(Duration::from_millis(50));
    *guard = 42;
    drop(guard);

    assert_eq!(observer.join().unwrap(), 42);
}

#[test]
fn tas_release_publishes_to_next_acquirer() {
    write_before_release_is_read_after_next_acquire::<RawTasMutex>();
}

#[test]
fn cas_release_publishes_to_next_acquirer() {
    write_before_release_is_read_after_next_acquire::<RawCasMutex>();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Enter(usize),
    Leave(usize),
}

/// Four threads each append enter/work/leave to a shared log while holding
/// the lock. Read pairwise, the log never shows two enters without the
/// first thread's leave in between.
fn session_log_stays_pairwise<R>()
where
    R: RawMutex + Send + Sync + 'static,
{
    const WORKERS: usize = 4;

    let log = Arc::new(Mutex::<R, Vec<Event>>::new(Vec::new()));
    let mut workers = Vec::new();
    for id in 0..WORKERS {
        let log = Arc::clone(&log);
        workers.push(thread::spawn(move || {
            let mut log = log.lock();
            log.push(Event::Enter(id));
            thread::sleep(Duration::from_millis(100));
            log.push(Event::Leave(id));
        }));
    }
    for worker in workers {
        worker.join().unwrap();
    }

    let log = log.lock();
    assert_eq!(log.len(), 2 * WORKERS);

    let mut seen = [false; WORKERS];
    for pair in log.chunks_exact(2) {
        match *pair {
            [Event::Enter(entered), Event::Leave(left)] => {
                assert_eq!(entered, left, "interleaved sessions in {log:?}");
                assert!(!seen[entered], "thread {entered} entered twice");
                seen[entered] = true;
            }
            _ => panic!("enter without matching leave in {log:?}"),
        }
    }
    assert!(seen.iter().all(|&entered| entered));
}

#[test]
fn tas_session_log_stays_pairwise() {
    session_log_stays_pairwise::<RawTasMutex>();
}

#[test]
fn cas_session_log_stays_pairwise() {
    session_log_stays_pairwise::<RawCasMutex>();
}
