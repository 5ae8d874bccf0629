//! Coverage journal: the plain-text log the coverage tool leaves next to its
//! profiles. Separate from the diagnostic `log` output of the binary itself.

use crate::configuration::settings::Settings;
use crate::time::format_elapsed;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub trait LogSink {
    /// Writes `"<message> <H:MM:SS>"` with the time elapsed since `start`.
    /// A summary line is followed by an empty separator.
    fn timing(&self, message: &str, start: Instant, summary_time: bool) -> io::Result<()>;
    fn info(&self, args: &[&str]) -> io::Result<()>;
    fn error(&self, args: &[&str]) -> io::Result<()>;
}

/// Appends every entry to one file, reopening it for each write.
#[derive(Debug, Clone)]
pub struct FileLogSink {
    path: PathBuf,
}

impl FileLogSink {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, lines: &[&str]) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        for line in lines {
            debug!("journal {}: {}", self.path.display(), line);
            writeln!(file, "{}", line)?;
        }
        file.flush()
    }
}

impl From<&Settings> for FileLogSink {
    fn from(settings: &Settings) -> Self {
        Self::new(settings.log_file())
    }
}

impl LogSink for FileLogSink {
    fn timing(&self, message: &str, start: Instant, summary_time: bool) -> io::Result<()> {
        let line = format!("{} {}", message, format_elapsed(start.elapsed()));
        if summary_time {
            self.append(&[line.as_str(), "\n"])
        } else {
            self.append(&[line.as_str()])
        }
    }

    fn info(&self, args: &[&str]) -> io::Result<()> {
        self.append(&[format!("[LOG] {}", args.join(" ")).as_str()])
    }

    fn error(&self, args: &[&str]) -> io::Result<()> {
        self.append(&[format!("[ERROR] {}", args.join(" ")).as_str()])
    }
}
