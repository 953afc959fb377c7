//! Four threads fight over a single lock, once per lock variant.
//!
//! Each worker enters the critical section, announces itself, holds the lock
//! through 100 ms of simulated work and announces its exit. The enter/leave
//! lines of two workers can never interleave.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use lock_api::{Mutex, RawMutex};
use spinwait::io::console::{Color, Style};
use spinwait::io::logging;
use spinwait::timer::{Timer, TimerError};
use spinwait::{color_println, styled_println, CasMutex, TasMutex};

const WORKERS: usize = 4;
const SIMULATED_WORK: Duration = Duration::from_millis(100);

fn contest<R>(label: &str, lock: Arc<Mutex<R, ()>>) -> Result<(), TimerError>
where
    R: RawMutex + Send + Sync + 'static,
{
    styled_println!(
        Color::Yellow,
        Style::Bold,
        "Testing the spin lock based on {label} with {WORKERS} threads!"
    );

    let mut stopwatch = Timer::new();
    stopwatch.start()?;

    let mut workers = Vec::new();
    for id in 0..WORKERS {
        let lock = Arc::clone(&lock);
        workers.push(thread::spawn(move || {
            let _guard = lock.lock();
            color_println!(Color::Blue, "thread {id} in critical section");
            thread::sleep(SIMULATED_WORK);
            color_println!(Color::Green, "thread {id} leaving critical section");
        }));
    }
    for worker in workers {
        worker.join().expect("worker thread panicked");
    }

    let total = stopwatch.stop()?;
    log::info!("{label} contest over {WORKERS} serialized sections took {total:?}");
    Ok(())
}

fn main() -> Result<(), TimerError> {
    logging::init();

    contest("CAS (compare-and-swap)", Arc::new(CasMutex::new(())))?;
    println!();
    contest("TAS (test-and-set)", Arc::new(TasMutex::new(())))?;
    Ok(())
}
