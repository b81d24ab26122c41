//! Run folder layout, input discovery and staging
//!
//! A run is tied to one date. Inputs found in the working directory are moved
//! into a dated input folder, and the mailer file is written into a dated
//! output folder:
//!
//! ```text
//! <work_dir>/
//! ├── TODAY_DATA_18-10-2026/       staged Dispatch*.csv and *.pin files
//! └── PROCESSED_DATA_18-10-2026/
//!     └── SLCBNK-EXTPINPRINTING-18102026-01.csv
//! ```

use crate::types::MailerError;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name prefix of dispatch sheet exports
pub const DISPATCH_PREFIX: &str = "Dispatch";

/// File extension of dispatch sheet exports
pub const DISPATCH_EXTENSION: &str = "csv";

/// File extension of card/PIN record files
pub const PIN_EXTENSION: &str = "pin";

/// Dated folders and output file for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLayout {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub output_file: PathBuf,
}

impl RunLayout {
    /// Compute the layout for a run on `date` under `work_dir`
    pub fn new(work_dir: &Path, date: NaiveDate) -> Self {
        let dashed = date.format("%d-%m-%Y");
        let compact = date.format("%d%m%Y");

        let input_dir = work_dir.join(format!("TODAY_DATA_{}", dashed));
        let output_dir = work_dir.join(format!("PROCESSED_DATA_{}", dashed));
        let output_file = output_dir.join(format!("SLCBNK-EXTPINPRINTING-{}-01.csv", compact));

        RunLayout {
            input_dir,
            output_dir,
            output_file,
        }
    }
}

/// Input files found in one directory, each list in sorted order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredInputs {
    pub dispatch: Vec<PathBuf>,
    pub pins: Vec<PathBuf>,
}

impl DiscoveredInputs {
    /// Every discovered file, dispatch exports first
    pub fn all(&self) -> impl Iterator<Item = &PathBuf> {
        self.dispatch.iter().chain(self.pins.iter())
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

fn is_dispatch_export(path: &Path) -> bool {
    let starts_with_prefix = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(DISPATCH_PREFIX));
    starts_with_prefix && has_extension(path, DISPATCH_EXTENSION)
}

/// Find dispatch exports and `.pin` files directly inside `dir`
///
/// A directory that does not exist yet has no inputs.
pub fn discover_inputs(dir: &Path) -> Result<DiscoveredInputs, MailerError> {
    let mut found = DiscoveredInputs::default();
    if !dir.is_dir() {
        return Ok(found);
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if is_dispatch_export(&path) {
            found.dispatch.push(path);
        } else if has_extension(&path, PIN_EXTENSION) {
            found.pins.push(path);
        }
    }

    found.dispatch.sort();
    found.pins.sort();
    Ok(found)
}

/// Move discovered inputs into the dated input folder
///
/// The folder is created if needed. Returns the number of files moved.
pub fn stage_inputs(inputs: &DiscoveredInputs, input_dir: &Path) -> Result<usize, MailerError> {
    fs::create_dir_all(input_dir)?;

    let mut moved = 0;
    for source in inputs.all() {
        let Some(name) = source.file_name() else {
            continue;
        };
        let target = input_dir.join(name);
        fs::rename(source, &target).map_err(|e| MailerError::IoError {
            message: format!(
                "Failed to move '{}' to '{}': {}",
                source.display(),
                target.display(),
                e
            ),
        })?;
        info!(file = %target.display(), "Staged input file");
        moved += 1;
    }

    Ok(moved)
}
