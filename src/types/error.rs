//! Error types for the PIN mailer
//!
//! This module defines all error types that can occur while building the
//! dispatch index and merging record files.
//!
//! # Error Categories
//!
//! - **Precondition failures**: The address source is missing (fatal)
//! - **File I/O Errors**: File not found, permission denied, etc. (fatal)
//! - **Sheet Errors**: A row of the address export could not be decoded (row skipped)
//! - **Record Errors**: A record line is malformed (line skipped, run continues)

use thiserror::Error;

/// Main error type for the PIN mailer
///
/// Each variant carries enough context to produce a useful CLI diagnostic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MailerError {
    /// No dispatch export could be found
    ///
    /// The address source is a hard precondition, so this aborts the run
    /// before any record is read.
    #[error("No dispatch files found matching 'Dispatch*.csv' in {dir}")]
    DispatchSourceMissing {
        /// Directory that was searched
        dir: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A row of the address export could not be decoded
    ///
    /// Recoverable: the row is skipped and the index omits it.
    #[error("Sheet parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    SheetError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A record line could not be turned into a record
    ///
    /// Recoverable: the line is skipped and processing continues with the
    /// next line.
    #[error("Malformed record at line {line} in {file}: {message}")]
    MalformedRecord {
        /// Name of the record file
        file: String,
        /// 1-based line number within the file
        line: usize,
        /// What was wrong with the line
        message: String,
    },
}

impl From<std::io::Error> for MailerError {
    fn from(error: std::io::Error) -> Self {
        MailerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for MailerError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return MailerError::IoError {
                message: error.to_string(),
            };
        }
        let line = error.position().map(|pos| pos.line());

        MailerError::SheetError {
            line,
            message: error.to_string(),
        }
    }
}

impl MailerError {
    /// Create a DispatchSourceMissing error
    pub fn dispatch_source_missing(dir: &std::path::Path) -> Self {
        MailerError::DispatchSourceMissing {
            dir: dir.display().to_string(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &std::path::Path) -> Self {
        MailerError::FileNotFound {
            path: path.display().to_string(),
        }
    }

    /// Create a MalformedRecord error
    pub fn malformed_record(file: &str, line: usize, message: &str) -> Self {
        MailerError::MalformedRecord {
            file: file.to_string(),
            line,
            message: message.to_string(),
        }
    }

    /// Whether the error only affects a single row or line
    ///
    /// Recoverable errors are logged and skipped; everything else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MailerError::SheetError { .. } | MailerError::MalformedRecord { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::Path;

    #[rstest]
    #[case::dispatch_missing(
        MailerError::DispatchSourceMissing { dir: "TODAY_DATA_01-10-2025".to_string() },
        "No dispatch files found matching 'Dispatch*.csv' in TODAY_DATA_01-10-2025"
    )]
    #[case::file_not_found(
        MailerError::FileNotFound { path: "cards.pin".to_string() },
        "File not found: cards.pin"
    )]
    #[case::io_error(
        MailerError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::sheet_error_with_line(
        MailerError::SheetError { line: Some(7), message: "bad row".to_string() },
        "Sheet parse error at line 7: bad row"
    )]
    #[case::sheet_error_without_line(
        MailerError::SheetError { line: None, message: "bad row".to_string() },
        "Sheet parse error: bad row"
    )]
    #[case::malformed_record(
        MailerError::MalformedRecord {
            file: "a.pin".to_string(),
            line: 4,
            message: "blank line".to_string(),
        },
        "Malformed record at line 4 in a.pin: blank line"
    )]
    fn test_error_display(#[case] error: MailerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::dispatch_missing(
        MailerError::dispatch_source_missing(Path::new("in")),
        MailerError::DispatchSourceMissing { dir: "in".to_string() }
    )]
    #[case::file_not_found(
        MailerError::file_not_found(Path::new("x.pin")),
        MailerError::FileNotFound { path: "x.pin".to_string() }
    )]
    #[case::malformed_record(
        MailerError::malformed_record("x.pin", 2, "blank line"),
        MailerError::MalformedRecord {
            file: "x.pin".to_string(),
            line: 2,
            message: "blank line".to_string(),
        }
    )]
    fn test_helper_functions(#[case] result: MailerError, #[case] expected: MailerError) {
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case::sheet(MailerError::SheetError { line: None, message: String::new() }, true)]
    #[case::record(MailerError::malformed_record("a.pin", 2, "x"), true)]
    #[case::io(MailerError::IoError { message: String::new() }, false)]
    #[case::missing(MailerError::dispatch_source_missing(Path::new(".")), false)]
    fn test_is_recoverable(#[case] error: MailerError, #[case] expected: bool) {
        assert_eq!(error.is_recoverable(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: MailerError = io_error.into();
        assert!(matches!(error, MailerError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
