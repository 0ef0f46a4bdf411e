use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::formatter::BracketedFormatter;
use crate::config::Settings;

/// Directory log files are written to
pub fn log_dir() -> Option<PathBuf> {
    Settings::project_dirs()
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .or_else(|| std::env::current_dir().ok().map(|dir| dir.join("logs")))
}

fn open_log_file() -> Option<(fs::File, PathBuf)> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir).ok()?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("stylesnap_colors_{}.log", timestamp));

    let file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)
        .ok()?;

    Some((file, path))
}

/// Install the global subscriber. Logs go to stderr, since stdout carries the
/// JSON report, and to a timestamped file when one can be created.
///
/// Returns the log file path, if any.
pub fn setup_logging(default_filter: &str) -> Option<PathBuf> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let log_file = open_log_file();
    let log_path = log_file.as_ref().map(|(_, path)| path.clone());

    let file_layer = log_file.map(|(file, _)| {
        fmt::layer()
            .event_format(BracketedFormatter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
    });

    let stderr_layer = fmt::layer()
        .event_format(BracketedFormatter)
        .with_writer(std::io::stderr);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    if installed.is_err() {
        return None;
    }

    match &log_path {
        Some(path) => info!("Log file created at: {:?}", path),
        None => warn!("Could not create a log file, logging to stderr only"),
    }

    log_path
}
