//! Append-only record log for validated readings
//!
//! One log file exists per sensor type. The file is opened in append mode
//! once at startup and the handle lives for the worker's lifetime; entries
//! are never rewritten or deleted, and a restart resumes appending.
//!
//! Record format, one line per reading:
//!
//! ```text
//! {YYYY-MM-DD HH:MM:SS} <value with six fractional digits>
//! ```
//!
//! The timestamp is local time at the moment the worker records the reading.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::errors::MonitorError;

/// Append-only log of timestamped valid readings
#[derive(Debug)]
pub struct RecordLog {
    path: PathBuf,
    file: File,
}

impl RecordLog {
    /// Open (or create) the log file in append mode
    ///
    /// Failure here is fatal at startup; the pipeline does not run without
    /// its output logs.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, MonitorError> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| MonitorError::LogOpen {
                path: path.display().to_string(),
                source,
            })?;

        Ok(Self { path, file })
    }

    /// Append one reading stamped with the current local time
    pub fn append(&mut self, value: f32) -> io::Result<()> {
        self.append_at(Local::now(), value)
    }

    /// Append one reading with an explicit timestamp
    ///
    /// Split out from [`append`](Self::append) so tests can pin the clock.
    pub fn append_at(&mut self, at: DateTime<Local>, value: f32) -> io::Result<()> {
        // The handle is an unbuffered File, so the record reaches the OS in
        // this one write; flush keeps the durability contract explicit.
        writeln!(self.file, "{{{}}} {:.6}", at.format("%Y-%m-%d %H:%M:%S"), value)?;
        self.file.flush()
    }

    /// Path this log appends to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn record_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("temperature.log");

        let mut log = RecordLog::open(&path).unwrap();
        let at = Local.with_ymd_and_hms(2024, 4, 27, 9, 30, 5).unwrap();
        log.append_at(at, 25.0).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "{2024-04-27 09:30:05} 25.000000\n");
    }

    #[test]
    fn reopen_resumes_appending() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ph.log");
        let at = Local.with_ymd_and_hms(2024, 4, 27, 9, 30, 5).unwrap();

        RecordLog::open(&path).unwrap().append_at(at, 7.0).unwrap();
        RecordLog::open(&path).unwrap().append_at(at, 7.5).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.ends_with("7.500000\n"));
    }

    #[test]
    fn open_failure_is_log_open_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory is not a writable log file.
        let err = RecordLog::open(dir.path()).unwrap_err();
        assert!(matches!(err, MonitorError::LogOpen { .. }));
    }
}
