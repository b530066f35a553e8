use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Utc;
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

/// File the global `fern` dispatch writes to, once installed
static ACTIVE_LOG_FILE: OnceLock<PathBuf> = OnceLock::new();

/// Shared logger that can be used across the application.
///
/// Entries are always kept in memory for the Logs dialog. When file logging
/// is enabled they are also forwarded to the `log` facade, which `fern`
/// writes to disk.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            log_file: None,
        }
    }

    /// Build the logger described by the `[logging]` config section
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        if !config.enabled {
            return Ok(Self::new());
        }

        let path = Self::get_log_file_path()?;
        Self::with_log_file(config.level_filter()?, path)
    }

    /// Build a logger that also writes to a log file.
    ///
    /// The file dispatch is process-wide: once one is installed, later calls
    /// share it and [`Logger::log_file`] reports the file actually written.
    pub fn with_log_file<P: AsRef<Path>>(level: LevelFilter, path: P) -> Result<Self> {
        let log_file = init_file_logging(level, path.as_ref())?;

        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            log_file,
        })
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if self.log_file.is_some() {
            log::info!("{}", message);
        }

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some()
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Default location of the log file
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))
            .map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the global file dispatch and return the file entries go to
fn init_file_logging(level: LevelFilter, path: &Path) -> Result<Option<PathBuf>> {
    if let Some(active) = ACTIVE_LOG_FILE.get() {
        log::debug!("file logging already writes to {}", active.display());
        return Ok(Some(active.clone()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file);

    // Fails when some other global logger is already installed
    if dispatch.apply().is_err() {
        return Ok(None);
    }

    Ok(Some(ACTIVE_LOG_FILE.get_or_init(|| path.to_path_buf()).clone()))
}
