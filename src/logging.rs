//! Tracing subscriber setup for the binary

use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, log_path};

/// Initialize file logging.
///
/// RUST_LOG takes precedence over the configured level. The returned guard
/// flushes buffered events when dropped and must be held until exit.
pub fn init(config: &LogConfig) -> anyhow::Result<WorkerGuard> {
    let path = config.file.clone().unwrap_or_else(log_path);
    let (dir, file_name) = split_log_path(&path)?;

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {:?}", dir))?;

    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("Invalid log level {:?}", config.level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

    Ok(guard)
}

/// Initialize file logging, or warn on stderr and run without it.
pub fn init_or_warn(config: &LogConfig) -> Option<WorkerGuard> {
    init(config)
        .inspect_err(|e| eprintln!("Warning: logging disabled: {e:#}"))
        .ok()
}

fn split_log_path(path: &Path) -> anyhow::Result<(PathBuf, &std::ffi::OsStr)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Log path {:?} has no file name", path))?;
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok((dir, file_name))
}
