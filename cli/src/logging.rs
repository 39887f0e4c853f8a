//! Logging initialization
//!
//! Logs go to stderr so stdout stays reserved for the
//! descriptor. An optional plain-text file layer is added when a log
//! directory is configured.

use queue_setup_infrastructure::FileLoggingConfig;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Keeps the file writer thread alive; hold it for the whole run.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Filter directive for a `-v` count.
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    }
}

pub fn init(verbose: u8, config: &FileLoggingConfig) -> std::io::Result<LogGuard> {
    let level = level_for(verbose);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)));

    let mut file_guard = None;
    let file_layer = match &config.directory {
        Some(directory) => {
            let directory = Path::new(directory);
            std::fs::create_dir_all(directory)?;

            let appender = tracing_appender::rolling::never(directory, &config.file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            file_guard = Some(guard);

            // The file always records at least info.
            let file_level = if verbose == 0 { "info" } else { level };
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(writer)
                    .with_filter(EnvFilter::new(file_level)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(std::io::Error::other)?;

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}
