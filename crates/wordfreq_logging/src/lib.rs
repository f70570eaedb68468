#![deny(missing_docs)]
//! Shared logging utilities for the wordfreq workspace.
//!
//! This crate provides the `wf_*` logging macros used across the codebase,
//! the terminal initializer used by the binary, and a minimal test
//! initializer for the global logger.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! wf_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! wf_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! wf_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! wf_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! wf_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Maps `-v`/`-q` counts onto a level filter, starting from `Warn`.
///
/// Each `-v` raises verbosity by one step, each `-q` lowers it.
pub fn level_from_verbosity(verbose: u8, quiet: u8) -> LevelFilter {
    const LEVELS: [LevelFilter; 6] = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];
    let base = 2i32;
    let index = (base + i32::from(verbose) - i32::from(quiet)).clamp(0, 5);
    LEVELS[index as usize]
}

/// Initializes the terminal logger for the `wordfreq` binary.
///
/// All log output goes to stderr so stdout stays free for report output.
/// A second call is ignored.
pub fn initialize(level: LevelFilter) {
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_time_level(LevelFilter::Off)
        .build();

    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{CombinedLogger, Config};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
