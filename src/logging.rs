//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! The TUI owns stdout and stderr while it runs, so log lines go to a
//! file. `RUST_LOG` takes precedence over the level chosen with `-v`.
//!
//! # Log Levels
//!
//! - `warn`: a command action the host could not service
//! - `info`: session start/stop, links handed to the host
//! - `debug`: section changes, palette open/close, timer lifecycle
//! - `trace`: individual key events

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::error::{Error, Result};

/// Application directory name under the platform data dir.
pub const APP_DIR: &str = "termfolio";

/// Log file name inside [`APP_DIR`].
pub const LOG_FILE_NAME: &str = "termfolio.log";

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    /// Destination file. None means [`default_log_path`].
    pub log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            log_file: None,
        }
    }
}

impl LogConfig {
    /// - 0 (no `-v`): info
    /// - 1 (`-v`): debug
    /// - 2+ (`-vv`): trace
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

/// `<data-local-dir>/termfolio/termfolio.log`, falling back to the
/// system temp dir when the platform has no data dir.
pub fn default_log_path() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(std::env::temp_dir);
    log_path_in(&base)
}

/// Log path under an arbitrary base directory.
pub fn log_path_in(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(LOG_FILE_NAME)
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

/// Install the global subscriber. Returns the file being written to.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<PathBuf> {
    let path = config.log_file.clone().unwrap_or_else(default_log_path);
    let file = open_log_file(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(config.level).into())
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    Ok(path)
}

// ============================================================================
// TESTS
// ============================================================================
