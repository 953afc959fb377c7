//! Array arithmetic summed sequentially and then across worker threads,
//! both runs timed with the stopwatch.
//!
//! The parallel run splits the array into chunks; each worker folds its chunk
//! locally and merges the partial sum into a lock-guarded total.

use std::thread;

use spinwait::io::console::{Color, Style};
use spinwait::io::logging;
use spinwait::timer::{Timer, TimerError};
use spinwait::{color_println, styled_println, CasMutex};

const WORKERS: usize = 10;
const ARR_SIZE: usize = 20_000;

fn build_values() -> Vec<u64> {
    let mut values: Vec<u64> = (0..ARR_SIZE as u64).collect();
    let mut stride = 0;
    for value in values.iter_mut() {
        *value += stride;
        stride += 5;
    }
    values
}

fn main() -> Result<(), TimerError> {
    logging::init();
    let mut stopwatch = Timer::new();

    styled_println!(Color::Yellow, Style::Bold, "Start of sequential execution!");
    stopwatch.start()?;
    let values = build_values();
    let sequential_sum: u64 = values.iter().sum();
    let elapsed = stopwatch.stop()?;
    color_println!(Color::Blue, "elapsed time: {elapsed:?}");
    color_println!(Color::Blue, "the accumulated sum: {sequential_sum}");

    styled_println!(Color::Yellow, Style::Bold, "Start of parallel execution!");
    stopwatch.start()?;
    let total = CasMutex::new(0u64);
    let total_ref = &total;
    let chunk_len = (ARR_SIZE + WORKERS - 1) / WORKERS;
    thread::scope(|scope| {
        for chunk in values.chunks(chunk_len) {
            scope.spawn(move || {
                let partial: u64 = chunk.iter().sum();
                *total_ref.lock() += partial;
            });
        }
    });
    let parallel_sum = *total.lock();
    let elapsed = stopwatch.stop()?;
    color_println!(Color::Blue, "elapsed time: {elapsed:?}");
    color_println!(Color::Blue, "the accumulated sum: {parallel_sum}");

    if sequential_sum == parallel_sum {
        color_println!(Color::Green, "sequential and parallel sums agree");
    } else {
        log::error!("sums diverge: {sequential_sum} sequential vs {parallel_sum} parallel");
    }
    color_println!(Color::Magenta, "mean run time: {:?}", stopwatch.mean()?);
    Ok(())
}
