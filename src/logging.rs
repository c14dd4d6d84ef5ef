//! File-backed `tracing` setup. The terminal belongs to the TUI, so log
//! output goes to a file instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "menugen=info";

/// Errors that can occur while setting up logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file or its directory could not be created.
    #[error("could not open log file: {0}")]
    Io(#[from] io::Error),

    /// A global subscriber was already installed.
    #[error("could not install log subscriber: {0}")]
    Init(String),
}

/// Opens `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

/// Installs the global subscriber, writing to `path`.
#[mutants::skip]
pub fn init(path: &Path) -> Result<(), LoggingError> {
    let file = open_log_file(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("menugen.log");
        open_log_file(&path).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn appends_instead_of_truncating() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("menugen.log");
        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn directory_path_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            open_log_file(dir.path()),
            Err(LoggingError::Io(_))
        ));
    }
}
