//! 本地文件系统 Provider
//!
//! 实现 FileProvider trait，操作本地文件系统

use crate::services::ports::file::{DirEntry, FileError, FileMetadata, FileProvider, Result};
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub struct LocalFileProvider;

impl LocalFileProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileProvider for LocalFileProvider {
    fn scheme(&self) -> &'static str {
        "file"
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(path)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(dir = %path.display(), error = %e, "skip unreadable dir entry");
                    continue;
                }
            };
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                path: entry.path(),
            });
        }

        Ok(entries)
    }

    fn metadata(&self, path: &Path) -> Result<FileMetadata> {
        let meta = fs::metadata(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FileError::NotFound(path.to_path_buf()),
            _ => FileError::Io(e),
        })?;
        Ok(FileMetadata::from_std(meta))
    }

    fn read_head_lines(&self, path: &Path, max_lines: usize) -> Result<Vec<String>> {
        if !path.is_file() {
            return Err(FileError::NotAFile(path.to_path_buf()));
        }
        let mut reader = BufReader::new(fs::File::open(path)?);
        let mut lines = Vec::with_capacity(max_lines.min(64));
        let mut buf = Vec::new();
        while lines.len() < max_lines {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let text = String::from_utf8_lossy(&buf);
            lines.push(text.trim_end_matches(['\n', '\r']).to_string());
        }
        Ok(lines)
    }

    fn read_file_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        if !path.exists() {
            return Err(FileError::NotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(FileError::NotAFile(path.to_path_buf()));
        }
        Ok(fs::read(path)?)
    }

    fn create_file(&self, path: &Path) -> Result<()> {
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => FileError::AlreadyExists(path.to_path_buf()),
                _ => FileError::Io(e),
            })?;
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        if self.exists(path) {
            return Err(FileError::AlreadyExists(path.to_path_buf()));
        }
        Ok(fs::create_dir(path)?)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        if !self.exists(path) {
            return Err(FileError::NotFound(path.to_path_buf()));
        }
        Ok(fs::remove_file(path)?)
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(FileError::NotFound(path.to_path_buf()));
        }
        if !path.is_dir() {
            return Err(FileError::NotADirectory(path.to_path_buf()));
        }
        Ok(fs::remove_dir_all(path)?)
    }

    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/services/adapters/file/local.rs"]
mod tests;
