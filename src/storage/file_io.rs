//! File I/O utilities with atomic writes and durable appends
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::BudgetError;

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<(), BudgetError> {
    let path = path.as_ref();

    ensure_parent(path)?;

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| BudgetError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents)
        .map_err(|e| BudgetError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| BudgetError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| BudgetError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BudgetError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Append bytes to a file with a single write followed by fsync
///
/// Creates the file (and its parent directories) when missing.
pub fn append_durable<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<(), BudgetError> {
    let path = path.as_ref();

    ensure_parent(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| BudgetError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    file.write_all(contents)
        .map_err(|e| BudgetError::Storage(format!("Failed to append to {}: {}", path.display(), e)))?;

    file.sync_all()
        .map_err(|e| BudgetError::Storage(format!("Failed to sync {}: {}", path.display(), e)))?;

    Ok(())
}

/// True when the file is missing or has no content
pub fn is_missing_or_empty<P: AsRef<Path>>(path: P) -> bool {
    fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true)
}

/// True when the last byte of a non-empty file is a newline
pub fn ends_with_newline<P: AsRef<Path>>(path: P) -> Result<bool, BudgetError> {
    let path = path.as_ref();
    let mut file = File::open(path)
        .map_err(|e| BudgetError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    if file.metadata()?.len() == 0 {
        return Ok(true);
    }

    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

fn ensure_parent(path: &Path) -> Result<(), BudgetError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                BudgetError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> std::path::PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
