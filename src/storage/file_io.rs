//! File I/O utilities with atomic writes
//!
//! Full-file rewrites go through a temp file and a rename so that a failure
//! leaves the previous contents in place.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::LedgerError;

/// Read a whole text file, returning `None` if it doesn't exist
pub fn read_optional<P: AsRef<Path>>(path: P) -> Result<Option<String>, LedgerError> {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(LedgerError::Storage(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Read a whole file as raw bytes, returning `None` if it doesn't exist
pub fn read_bytes_optional<P: AsRef<Path>>(path: P) -> Result<Option<Vec<u8>>, LedgerError> {
    let path = path.as_ref();

    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(LedgerError::Storage(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<(), LedgerError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target, so the rename stays on one filesystem
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let mut file = File::create(&temp_path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    file.write_all(contents)
        .map_err(|e| LedgerError::Storage(format!("Failed to write data: {}", e)))?;

    file.sync_all()
        .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Open a file for appending, creating it if needed
///
/// Guarantees the existing contents end with a newline so appended rows start
/// on their own line.
pub fn open_for_append<P: AsRef<Path>>(path: P) -> Result<File, LedgerError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let len = file
        .metadata()
        .map_err(|e| LedgerError::Storage(format!("Failed to stat {}: {}", path.display(), e)))?
        .len();

    if len > 0 {
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))
            .and_then(|_| file.read_exact(&mut last))
            .map_err(|e| {
                LedgerError::Storage(format!("Failed to read {}: {}", path.display(), e))
            })?;

        if last[0] != b'\n' {
            file.write_all(b"\n").map_err(|e| {
                LedgerError::Storage(format!("Failed to write {}: {}", path.display(), e))
            })?;
        }
    }

    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.txt");
        assert_eq!(read_optional(&path).unwrap(), None);
    }

    #[test]
    fn test_read_bytes_keeps_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");
        fs::write(&path, b"ok\n\xFF\xFE\n").unwrap();

        assert!(read_optional(&path).is_err());
        assert_eq!(
            read_bytes_optional(&path).unwrap().as_deref(),
            Some(&b"ok\n\xFF\xFE\n"[..])
        );
        assert_eq!(read_bytes_optional(temp_dir.path().join("none")).unwrap(), None);
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("currency.txt");

        write_atomic(&path, b"EUR").unwrap();
        assert_eq!(read_optional(&path).unwrap().as_deref(), Some("EUR"));

        write_atomic(&path, b"USD").unwrap();
        assert_eq!(read_optional(&path).unwrap().as_deref(), Some("USD"));
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.txt");

        write_atomic(&path, b"Food").unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("categories.txt.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("x.txt");

        write_atomic(&path, b"x").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_for_append_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");

        let file = open_for_append(&path).unwrap();
        drop(file);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_open_for_append_leaves_terminated_file_alone() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");
        fs::write(&path, "header\r\n").unwrap();

        let mut file = open_for_append(&path).unwrap();
        file.write_all(b"row\n").unwrap();
        drop(file);

        assert_eq!(fs::read_to_string(&path).unwrap(), "header\r\nrow\n");
    }

    #[test]
    fn test_open_for_append_terminates_last_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");
        fs::write(&path, "header\nrow1").unwrap();

        let mut file = open_for_append(&path).unwrap();
        file.write_all(b"row2\n").unwrap();
        drop(file);

        assert_eq!(fs::read_to_string(&path).unwrap(), "header\nrow1\nrow2\n");
    }
}
