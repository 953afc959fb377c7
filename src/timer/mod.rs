//! Wall-clock stopwatch with basic statistics.
//!
//! Built for benchmarking short critical sections: start/stop pairs record
//! samples against the monotonic clock, and the mean and variance over all
//! recorded samples are computed on demand.

use std::time::{Duration, Instant};

use thiserror::Error;

/// Misuse of the stopwatch state machine.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// `start()` while a measurement is in flight.
    #[error("timer is already measuring")]
    AlreadyRunning,
    /// `stop()` with no measurement in flight.
    #[error("timer was not measuring")]
    NotRunning,
    /// Statistics requested before any start/stop pair completed.
    #[error("timer has no recorded measurements")]
    NoSamples,
}

/// Stopwatch accumulating interval samples.
///
/// A fresh timer holds no samples. Every `start()`/`stop()` pair appends one
/// sample; `reset()` discards them all. Unlike the locks in this crate, the
/// timer is single-threaded state and freely clonable.
#[derive(Debug, Clone, Default)]
pub struct Timer {
    started_at: Option<Instant>,
    samples: Vec<Duration>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a measurement.
    pub fn start(&mut self) -> Result<(), TimerError> {
        if self.started_at.is_some() {
            return Err(TimerError::AlreadyRunning);
        }
        self.started_at = Some(Instant::now());
        Ok(())
    }

    /// Ends the in-flight measurement and returns the recorded interval.
    pub fn stop(&mut self) -> Result<Duration, TimerError> {
        // Read the clock first so the error check does not inflate the sample.
        let end = Instant::now();
        let start = self.started_at.take().ok_or(TimerError::NotRunning)?;
        let elapsed = end.duration_since(start);
        self.samples.push(elapsed);
        Ok(elapsed)
    }

    /// Discards all samples and any in-flight measurement.
    pub fn reset(&mut self) {
        self.started_at = None;
        self.samples.clear();
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// The most recently recorded interval.
    pub fn last(&self) -> Result<Duration, TimerError> {
        self.samples.last().copied().ok_or(TimerError::NoSamples)
    }

    /// Mean over all recorded intervals.
    pub fn mean(&self) -> Result<Duration, TimerError> {
        if self.samples.is_empty() {
            return Err(TimerError::NoSamples);
        }
        let total: Duration = self.samples.iter().sum();
        Ok(total / self.samples.len() as u32)
    }

    /// Sample variance over all recorded intervals, in seconds squared.
    ///
    /// A single sample has the trivial variance of zero.
    pub fn variance(&self) -> Result<f64, TimerError> {
        let mean = self.mean()?.as_secs_f64();
        if self.samples.len() < 2 {
            return Ok(0.0);
        }
        let sum_of_squares: f64 = self
            .samples
            .iter()
            .map(|sample| {
                let diff = sample.as_secs_f64() - mean;
                diff * diff
            })
            .sum();
        Ok(sum_of_squares / (self.samples.len() - 1) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn stop_after_initialization_fails() {
        let mut timer = Timer::new();
        assert_eq!(timer.stop(), Err(TimerError::NotRunning));
    }

    #[test]
    fn start_after_start_fails() {
        let mut timer = Timer::new();
        timer.start().unwrap();
        assert_eq!(timer.start(), Err(TimerError::AlreadyRunning));
    }

    #[test]
    fn stop_after_stop_fails() {
        let mut timer = Timer::new();
        timer.start().unwrap();
        timer.stop().unwrap();
        assert_eq!(timer.stop(), Err(TimerError::NotRunning));
    }

    #[test]
    fn measurement_covers_the_slept_interval() {
        let mut timer = Timer::new();
        timer.start().unwrap();
        thread::sleep(Duration::from_millis(10));
        let elapsed = timer.stop().unwrap();
        assert!(elapsed >= Duration::from_millis(10));
        assert_eq!(timer.last().unwrap(), elapsed);
    }

    #[test]
    fn statistics_require_samples() {
        let timer = Timer::new();
        assert_eq!(timer.last(), Err(TimerError::NoSamples));
        assert_eq!(timer.mean(), Err(TimerError::NoSamples));
        assert_eq!(timer.variance(), Err(TimerError::NoSamples));
    }

    #[test]
    fn mean_and_variance_over_samples() {
        let mut timer = Timer::new();
        timer.samples = vec![Duration::from_secs(1), Duration::from_secs(3)];
        assert_eq!(timer.mean().unwrap(), Duration::from_secs(2));
        assert!((timer.variance().unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn single_sample_has_trivial_variance() {
        let mut timer = Timer::new();
        timer.samples = vec![Duration::from_secs(5)];
        assert_eq!(timer.variance().unwrap(), 0.0);
    }

    #[test]
    fn reset_clears_samples_and_running_state() {
        let mut timer = Timer::new();
        timer.start().unwrap();
        timer.stop().unwrap();
        timer.start().unwrap();
        timer.reset();
        assert!(!timer.is_running());
        assert_eq!(timer.sample_count(), 0);
    }
}
