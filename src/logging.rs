//! File logging.
//!
//! The terminal belongs to the dashboard, so tracing output goes to
//! `{data_dir}/logs/abd-admin.log`. The filter comes from `ABD_LOG` (via
//! [`AdminConfig::log_filter`]) and accepts the usual `EnvFilter` syntax,
//! e.g. `abd_admin=debug,reqwest=warn`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{AdminConfig, DEFAULT_LOG_FILTER};
use crate::error::{classify_io_error, AdminResult};

pub const LOG_FILE_NAME: &str = "abd-admin.log";

/// Build the filter, falling back to the default on a bad directive.
pub fn build_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|e| {
        eprintln!(
            "Ignoring invalid log filter '{}' ({}), using '{}'",
            directives, e, DEFAULT_LOG_FILTER
        );
        EnvFilter::new(DEFAULT_LOG_FILTER)
    })
}

/// Create the log directory and open the log file for appending.
pub fn open_log_file(dir: &Path) -> AdminResult<(File, PathBuf)> {
    fs::create_dir_all(dir)
        .map_err(|e| classify_io_error(e, Some(dir.to_path_buf()), "create log directory"))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| classify_io_error(e, Some(path.clone()), "open log file"))?;
    Ok((file, path))
}

/// Install the global subscriber. Returns the log file path.
///
/// Fails if the file cannot be opened or a subscriber is already set.
pub fn init(config: &AdminConfig) -> AdminResult<PathBuf> {
    let (file, path) = open_log_file(&config.log_dir())?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.log_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| crate::error::SystemError::Config {
            message: format!("Logging already initialised: {}", e),
        })?;

    tracing::info!("abd-admin {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_directory() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("nested").join("logs");
        let (_file, path) = open_log_file(&dir).unwrap();
        assert!(path.exists());
        assert_eq!(path.file_name().unwrap(), LOG_FILE_NAME);
    }

    #[test]
    fn test_invalid_filter_falls_back() {
        let filter = build_filter("abd_admin=loud");
        assert_eq!(filter.to_string(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_valid_filter_kept() {
        let filter = build_filter("abd_admin=debug");
        assert_eq!(filter.to_string(), "abd_admin=debug");
    }
}
