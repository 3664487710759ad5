pub mod config;
pub mod newline;
pub mod report;

pub use config::{ConfigError, FixerConfig};
pub use newline::{
    EmptyFilePolicy, FixOutcome, FixedFile, FsStore, NewlineError, NewlineFixer, TextEncoding, TextStore,
    ensure_final_newline, ensure_final_newline_with, with_final_newline,
};
pub use report::{FixRecord, ReportError, ReportWriter};
