//! Safe create-or-append opening of the configured log file path.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use crate::error::{LoggingError, LoggingResult};

/// Open the log file at `path`, creating it if it does not exist and
/// appending to it if it does.
///
/// Fails on an empty path or a path that names a directory.
pub fn open_log_file(path: &str) -> LoggingResult<File> {
    if path.is_empty() {
        return Err(LoggingError::EmptyLogFilePath);
    }
    let path = Path::new(path);

    match fs::metadata(path) {
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            File::create(path).map_err(|source| LoggingError::LogFile {
                path: path.to_path_buf(),
                source,
            })
        }
        Err(source) => Err(LoggingError::LogFile {
            path: path.to_path_buf(),
            source,
        }),
        Ok(meta) if meta.is_dir() => Err(LoggingError::LogFileIsDirectory(path.to_path_buf())),
        Ok(_) => OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|source| LoggingError::LogFile {
                path: path.to_path_buf(),
                source,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};

    #[test]
    fn test_empty_path_is_error() {
        assert!(matches!(
            open_log_file(""),
            Err(LoggingError::EmptyLogFilePath)
        ));
    }

    #[test]
    fn test_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_log_file(dir.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, LoggingError::LogFileIsDirectory(_)));
    }

    #[test]
    fn test_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let path_str = path.to_str().unwrap();

        let _file = open_log_file(path_str).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let path_str = path.to_str().unwrap();

        fs::write(&path, "first\n").unwrap();
        let mut file = open_log_file(path_str).unwrap();
        file.write_all(b"second\n").unwrap();
        drop(file);

        let mut content = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "first\nsecond\n");
    }
}
