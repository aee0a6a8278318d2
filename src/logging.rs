//! Tracing subscriber setup.
//!
//! The terminal belongs to the UI, so log records only ever go to a file.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber writing to `log_file_path`.
///
/// `RUST_LOG` wins over `default_level`. Returns `false` when the log file
/// cannot be created; the program then runs without logging.
pub fn init_global(log_file_path: &Path, default_level: &str) -> bool {
    if let Some(parent) = log_file_path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return false;
        }
    }
    let Ok(log_file) = File::create(log_file_path) else {
        return false;
    };

    build_subscriber(log_file, default_level).try_init().is_ok()
}

/// Build a subscriber with file logging and env-based filtering.
pub fn build_subscriber(log_file: File, default_level: &str) -> impl tracing::Subscriber + Send + Sync {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}
