//! Subscriber wiring for the `[logging]` config table.
//!
//! Terminal output goes to stderr so that stdout stays clean for `--json`.

use marksplice_core::config::{LoggingConfig, ResolvedConfig};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

static LOG_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

/// Install the stderr subscriber and, when configured, the file subscriber.
pub fn init(cfg: &ResolvedConfig) {
    let logging = &cfg.logging;

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(env_filter(&logging.level, LevelFilter::INFO));

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let Some(path) = logging.file.as_deref() else {
        registry.init();
        return;
    };

    let file = open_log_file(path).unwrap_or_else(|e| {
        eprintln!("Failed to open log file {}: {e}", path.display());
        std::process::exit(1);
    });
    let (writer, guard) = tracing_appender::non_blocking(file);
    if let Ok(mut slot) = LOG_GUARD.lock() {
        *slot = Some(guard);
    }

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter(file_level(logging), LevelFilter::DEBUG));

    registry.with(file_layer).init();
}

/// Flush the file logger before exiting.
pub fn flush() {
    if let Ok(mut slot) = LOG_GUARD.lock() {
        slot.take();
    }
}

/// Level string for the file layer; falls back to the terminal level.
fn file_level(logging: &LoggingConfig) -> &str {
    logging.file_level.as_deref().unwrap_or(&logging.level)
}

fn env_filter(level: &str, fallback: LevelFilter) -> EnvFilter {
    let directive = parse_level(level).unwrap_or(fallback);
    EnvFilter::builder().with_default_directive(directive.into()).from_env_lossy()
}

/// Open the log file for appending, creating it if needed.
fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
