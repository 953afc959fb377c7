//! A logging backend that writes level-colored lines to the console.
//!
//! Routes the `log` crate's records through [`color_println!`], coloring each
//! line by severity the same way the rest of the crate's diagnostics are
//! colored.

use log::{Level, LevelFilter, Log, Metadata, Record};

use super::console::Color;
use crate::color_println;

/// Installs the console logger for the whole process.
///
/// The maximum level comes from the `LOG` environment variable:
/// - `ERROR` -> `LevelFilter::Error`
/// - `WARN` -> `LevelFilter::Warn`
/// - `INFO` -> `LevelFilter::Info`
/// - `DEBUG` -> `LevelFilter::Debug`
/// - `TRACE` -> `LevelFilter::Trace`
/// - anything else -> `LevelFilter::Off`
///
/// Call once, at program start; a second installation attempt panics.
pub fn init() {
    static LOGGER: ConsoleLogger = ConsoleLogger;
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(match std::env::var("LOG").as_deref() {
        Ok("ERROR") => LevelFilter::Error,
        Ok("WARN") => LevelFilter::Warn,
        Ok("INFO") => LevelFilter::Info,
        Ok("DEBUG") => LevelFilter::Debug,
        Ok("TRACE") => LevelFilter::Trace,
        _ => LevelFilter::Off,
    });
}

/// Prints each record as a colored `[LEVEL] message` line.
struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let color = level_to_color(record.level());
        color_println!(color, "[{:>5}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

/// Maps a severity to the color its lines are printed in.
fn level_to_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::BrightYellow,
        Level::Info => Color::Blue,
        Level::Debug => Color::Green,
        Level::Trace => Color::BrightBlack,
    }
}
