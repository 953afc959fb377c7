//! Console diagnostics: colored printing and the `log` backend built on it.

pub mod console;
pub mod logging;
