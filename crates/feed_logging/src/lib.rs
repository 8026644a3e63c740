#![deny(missing_docs)]
//! Logging front door for the feed crates.
//!
//! Every crate logs through the `feed_*` macros below rather than calling
//! `log` directly, so the target of a record is always the crate that
//! produced it. Binaries pick the backend; tests use
//! [`initialize_for_tests`].

/// Trace-level record, for per-request chatter.
#[macro_export]
macro_rules! feed_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Debug-level record: fetch tickets, stale discards, draft rejections.
#[macro_export]
macro_rules! feed_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Info-level record: store selection, submissions, applied effects.
#[macro_export]
macro_rules! feed_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Warn-level record: gateway failures surfaced to the user.
#[macro_export]
macro_rules! feed_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Error-level record: the app can no longer reach its store.
#[macro_export]
macro_rules! feed_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Installs a terminal logger for test binaries.
///
/// Debug builds show debug records so that race tests print the tickets
/// they discard. Repeated calls, or a logger installed elsewhere, are fine.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
}
