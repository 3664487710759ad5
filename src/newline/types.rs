use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Text encodings a target file may be decoded with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum TextEncoding {
    #[default]
    #[serde(rename = "utf-8")]
    #[value(name = "utf-8", alias = "utf8")]
    Utf8,
    #[serde(rename = "ascii")]
    #[value(name = "ascii")]
    Ascii,
}

impl TextEncoding {
    /// Decode raw file bytes, failing with the offset of the first bad byte
    pub fn decode(self, bytes: Vec<u8>) -> Result<String, NewlineError> {
        match self {
            TextEncoding::Utf8 => String::from_utf8(bytes).map_err(|e| NewlineError::Decode {
                encoding: self,
                valid_up_to: e.utf8_error().valid_up_to(),
            }),
            TextEncoding::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(valid_up_to) => Err(NewlineError::Decode {
                    encoding: self,
                    valid_up_to,
                }),
                // ASCII is a subset of UTF-8, so this cannot fail
                None => String::from_utf8(bytes).map_err(|e| NewlineError::Decode {
                    encoding: self,
                    valid_up_to: e.utf8_error().valid_up_to(),
                }),
            },
        }
    }

    /// Encode text back to bytes. Both encodings share the UTF-8 byte layout.
    pub fn encode(self, text: String) -> Vec<u8> {
        text.into_bytes()
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextEncoding::Utf8 => f.write_str("utf-8"),
            TextEncoding::Ascii => f.write_str("ascii"),
        }
    }
}

/// What to do with a file whose content is empty
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EmptyFilePolicy {
    /// Leave empty files untouched
    #[default]
    Skip,
    /// Write a lone newline into empty files
    Append,
}

/// Which branch a fix took
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixOutcome {
    AlreadyTerminated,
    EmptySkipped,
    Appended,
}

/// Errors returned while fixing a target file
#[derive(Error, Debug)]
pub enum NewlineError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("content is not valid {encoding} (first invalid byte at offset {valid_up_to})")]
    Decode {
        encoding: TextEncoding,
        valid_up_to: usize,
    },
}

impl NewlineError {
    /// Kind of the underlying I/O failure, if this is one
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            NewlineError::Io(e) => Some(e.kind()),
            NewlineError::Decode { .. } => None,
        }
    }
}
