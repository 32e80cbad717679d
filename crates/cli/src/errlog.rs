//! Dated plain-text error log.
//!
//! One line per malformed input event, appended to
//! `ErrorLog_YYYY-MM-DD.txt` in the configured directory.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

/// Append-only writer for the dated error log.
#[derive(Debug, Clone)]
pub struct ErrorLog {
    dir: PathBuf,
}

impl ErrorLog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("ErrorLog_{}.txt", date.format("%Y-%m-%d")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Append one timestamped line for a malformed input event.
    ///
    /// Failures are returned to the caller; the shell reports them on the
    /// console and carries on.
    pub fn record(&self, message: &str) -> io::Result<()> {
        let now = Local::now();
        let path = self.path_for(now.date_naive());
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "[{}] {}", now.format("%Y-%m-%d %H:%M:%S"), message)
    }
}
