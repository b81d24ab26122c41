//! Run configuration
//!
//! Plain values the pipeline needs for one run. The run date is part of the
//! configuration so that nothing downstream reads the clock.

use crate::core::DEFAULT_FIELD_WIDTH;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Configuration of one mailer run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailerConfig {
    /// Directory where inputs are discovered and dated folders are created
    pub work_dir: PathBuf,

    /// Explicit dispatch export; discovered when `None`
    pub dispatch: Option<PathBuf>,

    /// Explicit `.pin` files; discovered when empty
    pub pin_files: Vec<PathBuf>,

    /// Explicit output file; the dated layout is used when `None`
    pub output: Option<PathBuf>,

    /// Date naming the run folders and output file
    pub run_date: NaiveDate,

    /// Move discovered inputs into the dated input folder before reading them
    pub stage_inputs: bool,

    /// Maximum width of each address field, in characters
    pub max_width: usize,
}

impl MailerConfig {
    /// Configuration that discovers and stages everything under `work_dir`
    pub fn new(work_dir: impl Into<PathBuf>, run_date: NaiveDate) -> Self {
        MailerConfig {
            work_dir: work_dir.into(),
            dispatch: None,
            pin_files: Vec::new(),
            output: None,
            run_date,
            stage_inputs: true,
            max_width: DEFAULT_FIELD_WIDTH,
        }
    }
}
