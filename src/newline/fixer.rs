use crate::config::FixerConfig;
use crate::newline::store::{FsStore, TextStore};
use crate::newline::types::{EmptyFilePolicy, FixOutcome, NewlineError, TextEncoding};
use log::{debug, info};
use std::path::Path;

/// Decide whether `contents` needs a trailing newline.
///
/// Returns the replacement text when a write is required, `None` otherwise.
/// Only a single `'\n'` is ever appended. Only `'\n'` counts as a newline: a
/// lone trailing `'\r'` gets `'\n'` appended, unlike a universal-newline read
/// that would treat old Mac line endings as already terminated.
pub fn with_final_newline(contents: &str, empty: EmptyFilePolicy) -> Option<String> {
    if contents.ends_with('\n') {
        return None;
    }
    if contents.is_empty() && empty == EmptyFilePolicy::Skip {
        return None;
    }
    let mut fixed = String::with_capacity(contents.len() + 1);
    fixed.push_str(contents);
    fixed.push('\n');
    Some(fixed)
}

/// Result of a successful fix: the branch taken and the bytes now on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedFile {
    pub outcome: FixOutcome,
    pub bytes_before: u64,
    pub content: Vec<u8>,
}

/// Runs the read-decide-write sequence against an injected store
pub struct NewlineFixer<S: TextStore> {
    store: S,
    encoding: TextEncoding,
    empty: EmptyFilePolicy,
}

impl<S: TextStore> NewlineFixer<S> {
    pub fn new(store: S, config: &FixerConfig) -> Self {
        Self {
            store,
            encoding: config.encoding,
            empty: config.empty_file,
        }
    }

    /// Ensure the file at `path` ends with a newline, writing at most once
    pub fn fix(&self, path: &Path) -> Result<FixOutcome, NewlineError> {
        self.fix_detailed(path).map(|fixed| fixed.outcome)
    }

    /// Like [`fix`](Self::fix), also returning the size before and the final content
    pub fn fix_detailed(&self, path: &Path) -> Result<FixedFile, NewlineError> {
        let bytes = self.store.read_all(path)?;
        let bytes_before = bytes.len() as u64;
        let contents = self.encoding.decode(bytes)?;

        let Some(fixed) = with_final_newline(&contents, self.empty) else {
            let outcome = if contents.is_empty() {
                FixOutcome::EmptySkipped
            } else {
                FixOutcome::AlreadyTerminated
            };
            debug!("{}: {:?}, nothing to write", path.display(), outcome);
            return Ok(FixedFile {
                outcome,
                bytes_before,
                content: self.encoding.encode(contents),
            });
        };

        let content = self.encoding.encode(fixed);
        self.store.overwrite(path, &content)?;
        info!("{}: appended final newline", path.display());
        Ok(FixedFile {
            outcome: FixOutcome::Appended,
            bytes_before,
            content,
        })
    }
}

/// Append a newline to the UTF-8 file at `path` if it does not already end with one.
///
/// Empty files are left untouched. I/O and decoding failures are returned as is.
pub fn ensure_final_newline(path: impl AsRef<Path>) -> Result<(), NewlineError> {
    ensure_final_newline_with(path, &FixerConfig::default()).map(|_| ())
}

/// Same as [`ensure_final_newline`] with an explicit encoding and empty-file policy
pub fn ensure_final_newline_with(
    path: impl AsRef<Path>,
    config: &FixerConfig,
) -> Result<FixOutcome, NewlineError> {
    NewlineFixer::new(FsStore, config).fix(path.as_ref())
}
