use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::JsonFields;
use tracing_subscriber::prelude::*;

use crate::config;

/// Installs the global subscriber.
///
/// Human-readable output goes to stderr; a JSON copy is appended to
/// [`config::log_path`] when its directory can be created. The returned
/// guard flushes the file writer and must be held until exit.
pub fn init(debug: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let default_level = if debug { "debug" } else { "info" };
    // Use RUST_LOG if set, otherwise the level selected by --debug
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(debug)
        .without_time();

    let log_path = config::log_path();
    let file_writer = open_log_file(&log_path);

    let (json_layer, guard) = match file_writer {
        Some((writer, guard)) => {
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .fmt_fields(JsonFields::default());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(json_layer)
        .try_init()?;

    Ok(guard)
}

fn open_log_file(
    log_path: &Path,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = log_path.parent()?;
    let file_name = log_path.file_name()?;

    std::fs::create_dir_all(dir)
        .inspect_err(|e| {
            eprintln!("Failed to create log directory {:?}: {}", dir, e);
        })
        .ok()?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Some(tracing_appender::non_blocking(appender))
}
