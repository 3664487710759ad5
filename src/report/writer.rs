use crate::report::record::FixRecord;
use std::fs::{OpenOptions, create_dir_all, metadata, rename};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("report I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("report serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Appends [`FixRecord`]s to a JSONL file, rotating it past a size limit
pub struct ReportWriter {
    path: PathBuf,
    max_bytes: u64,
}

impl ReportWriter {
    pub fn new(path: impl Into<PathBuf>, max_bytes: u64) -> Self {
        Self {
            path: path.into(),
            max_bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Move an oversized report aside; returns the rotated path if one was made.
    ///
    /// Rotated names carry a fresh UUID, so several rotations within the same
    /// second never land on the same path.
    fn check_and_rotate(&self) -> io::Result<Option<PathBuf>> {
        if let Ok(meta) = metadata(&self.path) {
            if meta.len() > self.max_bytes {
                let rotated = self.path.with_extension(format!(
                    "rotated_{}_{}",
                    chrono::Utc::now().timestamp(),
                    Uuid::new_v4().simple()
                ));
                if rotated.exists() {
                    return Err(io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!("rotated report {} already exists", rotated.display()),
                    ));
                }
                rename(&self.path, &rotated)?;
                log::info!("rotated report to {}", rotated.display());
                return Ok(Some(rotated));
            }
        }
        Ok(None)
    }

    pub fn append(&self, record: &FixRecord) -> Result<(), ReportError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        self.check_and_rotate()?;

        let mut line = serde_json::to_string(record)?;
        line.push('\n');
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}
