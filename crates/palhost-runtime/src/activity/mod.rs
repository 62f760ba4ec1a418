//! Append-only activity log (`logs.txt`).
//!
//! Each call opens the file for append, writes one line and closes it again.
//! No handle is held between calls and there is no in-process lock: append
//! ordering across threads is whatever the OS append primitive gives.
//!
//! Line format: `[DD-MM-YYYY HH:MM:SS] <message>` in local time.

mod error;

pub use error::ActivityLogError;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use palhost_core::{ConsoleEntry, ConsoleSink, PathConfiguration};

/// `chrono` format for the bracketed timestamp.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Format one log line, newline included.
pub fn format_line<Tz>(time: &DateTime<Tz>, message: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("[{}] {message}\n", time.format(TIMESTAMP_FORMAT))
}

/// Writes operator-facing activity lines to the log file.
#[derive(Debug, Clone)]
pub struct ActivityLogger {
    log_path: PathBuf,
}

impl ActivityLogger {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
        }
    }

    /// Logger writing to the layout's `logs.txt`.
    pub fn from_paths(paths: &PathConfiguration) -> Self {
        Self::new(paths.logs_path.clone())
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Append `message` to the log file.
    pub fn record(&self, message: &str) -> Result<(), ActivityLogError> {
        self.append(&format_line(&Local::now(), message))
    }

    /// Forward `message` to a console, then append it to the log file.
    ///
    /// The sink is fire-and-forget; a file failure is still reported even
    /// though the console already saw the line.
    pub fn record_with_sink(
        &self,
        message: &str,
        sink: &dyn ConsoleSink,
        console_id: &str,
    ) -> Result<(), ActivityLogError> {
        sink.emit(console_id, &ConsoleEntry::stdout(message));
        self.record(message)
    }

    fn append(&self, line: &str) -> Result<(), ActivityLogError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|source| ActivityLogError::Open {
                path: self.log_path.clone(),
                source,
            })?;

        // Single write so concurrent appenders never interleave within a line
        file.write_all(line.as_bytes())
            .map_err(|source| ActivityLogError::Write {
                path: self.log_path.clone(),
                source,
            })?;

        tracing::trace!(path = %self.log_path.display(), "Appended activity line");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};

    #[test]
    fn format_line_uses_day_first_timestamp() {
        let time = NaiveDate::from_ymd_opt(2024, 1, 21)
            .unwrap()
            .and_hms_opt(9, 5, 3)
            .unwrap()
            .and_local_timezone(FixedOffset::east_opt(0).unwrap())
            .unwrap();

        assert_eq!(
            format_line(&time, "Server started"),
            "[21-01-2024 09:05:03] Server started\n"
        );
    }

    #[test]
    fn logger_uses_layout_log_path() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = PathConfiguration::from_base_dir(tmp.path()).unwrap();
        let logger = ActivityLogger::from_paths(&paths);

        assert_eq!(logger.log_path(), tmp.path().join("logs.txt"));
    }
}
