use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::warn;
use vecdist_core::{Error, LogSink, Result};

/// Plain-text change log, one UTF-8 line per entry
pub struct TxtLogger {
    file: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl TxtLogger {
    /// Create the log file, truncating anything already there
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = Self::checked_path(path.as_ref())?;
        let file = File::create(&path)?;
        Ok(Self::from_file(file, path))
    }

    /// Open the log file for appending, keeping existing lines
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = Self::checked_path(path.as_ref())?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        Ok(Self::from_file(file, path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn checked_path(path: &Path) -> Result<PathBuf> {
        if path.as_os_str().is_empty() {
            return Err(Error::EmptyLogPath);
        }
        Ok(path.to_path_buf())
    }

    fn from_file(file: File, path: PathBuf) -> Self {
        Self {
            file: Mutex::new(BufWriter::new(file)),
            path,
        }
    }

    fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut writer = self.file.lock();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

impl LogSink for TxtLogger {
    fn append(&self, line: &str) {
        if let Err(e) = self.write_line(line) {
            warn!("Failed to append to log {:?}: {}", self.path, e);
        }
    }

    fn read_all(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                warn!("Failed to open log {:?}: {}", self.path, e);
                return lines;
            }
        };

        for line in BufReader::new(file).lines() {
            match line {
                Ok(line) => lines.push(line),
                Err(e) => {
                    warn!("Failed to read log {:?}: {}", self.path, e);
                    break;
                }
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_path_rejected() {
        assert!(matches!(TxtLogger::new(""), Err(Error::EmptyLogPath)));
        assert!(matches!(TxtLogger::open(""), Err(Error::EmptyLogPath)));
    }

    #[test]
    fn test_new_logger_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.log");
        let logger = TxtLogger::new(&path).unwrap();
        assert_eq!(logger.path(), path.as_path());
        assert!(logger.read_all().is_empty());
    }

    #[test]
    fn test_append_and_read_back() {
        let dir = TempDir::new().unwrap();
        let logger = TxtLogger::new(dir.path().join("session.log")).unwrap();

        logger.append("Metric was changed to Minkowski");
        logger.append("Updated input. Input arguments are: Vec1 = [1,]; Vec2 = [,]; Dim = ");

        assert_eq!(
            logger.read_all(),
            vec![
                "Metric was changed to Minkowski".to_string(),
                "Updated input. Input arguments are: Vec1 = [1,]; Vec2 = [,]; Dim = ".to_string(),
            ]
        );
    }

    #[test]
    fn test_new_truncates_and_open_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.log");

        TxtLogger::new(&path).unwrap().append("old");
        let reopened = TxtLogger::open(&path).unwrap();
        reopened.append("new");
        assert_eq!(reopened.read_all(), vec!["old", "new"]);

        let fresh = TxtLogger::new(&path).unwrap();
        assert!(fresh.read_all().is_empty());
    }

    #[test]
    fn test_read_missing_file_is_swallowed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.log");
        let logger = TxtLogger::new(&path).unwrap();
        logger.append("line");
        std::fs::remove_file(&path).unwrap();

        assert!(logger.read_all().is_empty());
    }

    #[test]
    fn test_missing_directory_fails_construction() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("session.log");
        assert!(matches!(TxtLogger::new(&path), Err(Error::Io(_))));
    }
}
