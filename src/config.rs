use crate::newline::{EmptyFilePolicy, TextEncoding};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_MAX_REPORT_BYTES: u64 = 10 * 1024 * 1024;

/// Settings shared by the library entry points and the binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixerConfig {
    pub encoding: TextEncoding,
    pub empty_file: EmptyFilePolicy,
    /// JSONL report of processed files, disabled when `None`
    pub report_path: Option<PathBuf>,
    /// Rotate the report once it grows past this size
    pub max_report_bytes: u64,
}

impl Default for FixerConfig {
    fn default() -> Self {
        Self {
            encoding: TextEncoding::Utf8,
            empty_file: EmptyFilePolicy::Skip,
            report_path: None,
            max_report_bytes: DEFAULT_MAX_REPORT_BYTES,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl FixerConfig {
    /// Load a JSON config file; omitted fields take their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg: FixerConfig = serde_json::from_str(r#"{"empty_file":"append"}"#).unwrap();
        assert_eq!(cfg.empty_file, EmptyFilePolicy::Append);
        assert_eq!(cfg.encoding, TextEncoding::Utf8);
        assert_eq!(cfg.report_path, None);
        assert_eq!(cfg.max_report_bytes, DEFAULT_MAX_REPORT_BYTES);
    }

    #[test]
    fn unknown_fields_rejected() {
        let err = serde_json::from_str::<FixerConfig>(r#"{"encodng":"ascii"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"encoding":"ascii","report_path":"out/report.jsonl","max_report_bytes":64}}"#
        )
        .unwrap();

        let cfg = FixerConfig::load(file.path()).unwrap();
        assert_eq!(cfg.encoding, TextEncoding::Ascii);
        assert_eq!(cfg.report_path, Some(PathBuf::from("out/report.jsonl")));
        assert_eq!(cfg.max_report_bytes, 64);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FixerConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let err = FixerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }
}
