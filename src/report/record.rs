use crate::newline::{FixOutcome, NewlineError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// One line of the JSONL report, written for every processed target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixRecord {
    pub event_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub path: PathBuf,
    pub outcome: Option<FixOutcome>,
    pub error: Option<String>,
    pub bytes_before: Option<u64>,
    pub bytes_after: Option<u64>,
    /// BLAKE3 of the file content after the fix, hex encoded
    pub digest: Option<String>,
}

impl FixRecord {
    pub fn success(path: &Path, outcome: FixOutcome, before: u64, final_content: &[u8]) -> Self {
        let after = final_content.len() as u64;
        Self {
            event_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            path: path.to_path_buf(),
            outcome: Some(outcome),
            error: None,
            bytes_before: Some(before),
            bytes_after: Some(after),
            digest: Some(blake3::hash(final_content).to_hex().to_string()),
        }
    }

    pub fn failure(path: &Path, err: &NewlineError) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            path: path.to_path_buf(),
            outcome: None,
            error: Some(err.to_string()),
            bytes_before: None,
            bytes_after: None,
            digest: None,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}
