// src/log.rs
//
// Logging goes through `tracing`. Call sites use the short macros below so the
// rest of the crate doesn't care where lines end up: `.store/debug.log` when it
// can be opened, stderr otherwise.

use std::fs::{self, OpenOptions};
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_FILE, STORE_DIR};

static INIT: OnceLock<()> = OnceLock::new();

/// Install the global subscriber. Safe to call more than once; only the first
/// call does anything.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{}=debug", env!("CARGO_CRATE_NAME"))));

        let file = fs::create_dir_all(STORE_DIR)
            .ok()
            .and_then(|_| OpenOptions::new().create(true).append(true).open(LOG_FILE).ok());

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_timer(tracing_subscriber::fmt::time::uptime());

        // try_init: a test harness or embedding app may already own the global slot
        let _ = match file {
            Some(f) => builder.with_writer(Mutex::new(f)).try_init(),
            None => builder.with_writer(std::io::stderr).try_init(),
        };
    });
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

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
