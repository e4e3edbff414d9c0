// src/log.rs
//
// File logging for both front ends. Events go through `tracing`; the
// subscriber writes plain lines with uptime stamps to `.store/debug.log`.
// Use the crate macros (`logf!`, `logd!`, `loge!`) instead of calling
// `tracing` directly so call sites stay short.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

use crate::config::consts::{DEFAULT_LOG_FILTER, LOG_FILE, STORE_DIR};

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
/// `verbose` lowers the default filter to debug (RUST_LOG still wins when set).
pub fn init(verbose: bool) {
    let default = if verbose { "wordchart=debug" } else { DEFAULT_LOG_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = fs::create_dir_all(STORE_DIR);
    let path = Path::new(STORE_DIR).join(LOG_FILE);
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: cannot open log file {}: {}", path.display(), e);
            return;
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(Uptime::default())
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warning-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
