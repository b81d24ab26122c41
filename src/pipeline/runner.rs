//! Sequential run pipeline
//!
//! Orchestrates one run, delegating:
//! - input discovery and staging to `io::layout`
//! - sheet reading to `io::dispatch_reader` and indexing to `DispatchIndex`
//! - `.pin` parsing to `PinReader` (iterator interface)
//! - joining and serial numbering to `MergeEngine`
//! - serialization to `OutputWriter`
//!
//! # Error Handling
//!
//! - A missing or unreadable dispatch export aborts the run before any output
//! - No `.pin` files is reported and ends the run cleanly without output
//! - Malformed `.pin` lines are logged with file and line and skipped
//! - I/O failures on record files or the output abort the run; whatever was
//!   already written stays in place

use crate::core::{DispatchIndex, MergeEngine};
use crate::io::dispatch_reader::read_dispatch_sheet;
use crate::io::layout::{discover_inputs, stage_inputs, DiscoveredInputs, RunLayout};
use crate::io::output_format::OutputWriter;
use crate::io::pin_reader::PinReader;
use crate::pipeline::config::MailerConfig;
use crate::types::MailerError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Counters from merging a set of record files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub files_processed: usize,
    pub records_written: u64,
    pub lines_skipped: u64,
    pub unmatched_kits: u64,
}

/// Outcome of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Output file, or `None` when there were no record files
    pub output: Option<PathBuf>,
    /// Number of kits in the dispatch index
    pub index_size: usize,
    /// Sheet rows that replaced an earlier row with the same kit
    pub duplicate_kits: usize,
    pub merge: MergeStats,
}

/// Merge record files into a mailer stream
///
/// Writes the header, then one line per parsed record in file order and line
/// order. Serial numbers run across all files.
pub fn merge_pin_files(
    index: &DispatchIndex,
    pin_files: &[PathBuf],
    output: &mut dyn Write,
) -> Result<MergeStats, MailerError> {
    let mut writer = OutputWriter::new(output)?;
    let mut engine = MergeEngine::new(index);
    let mut stats = MergeStats::default();

    for path in pin_files {
        let reader = PinReader::new(path)?;
        debug!(file = %path.display(), "Merging record file");

        for result in reader {
            match result {
                Ok(record) => writer.write_record(&engine.merge(record))?,
                Err(e) if e.is_recoverable() => {
                    warn!("Skipping line: {}", e);
                    stats.lines_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }
        stats.files_processed += 1;
    }

    writer.flush()?;
    stats.records_written = engine.merged_count();
    stats.unmatched_kits = engine.unmatched_count();
    Ok(stats)
}

/// Find the inputs the configuration does not name explicitly
fn discover(config: &MailerConfig, layout: &RunLayout) -> Result<DiscoveredInputs, MailerError> {
    if config.dispatch.is_some() && !config.pin_files.is_empty() {
        return Ok(DiscoveredInputs::default());
    }

    let mut found = discover_inputs(&config.work_dir)?;
    if config.dispatch.is_some() {
        found.dispatch.clear();
    }
    if !config.pin_files.is_empty() {
        found.pins.clear();
    }

    if !config.stage_inputs {
        return Ok(found);
    }

    // Nothing is moved unless a dispatch export is available, either in the
    // work dir or already staged by an earlier run on the same date.
    if config.dispatch.is_none()
        && found.dispatch.is_empty()
        && discover_inputs(&layout.input_dir)?.dispatch.is_empty()
    {
        return Err(MailerError::dispatch_source_missing(&layout.input_dir));
    }

    stage_inputs(&found, &layout.input_dir)?;
    discover_inputs(&layout.input_dir)
}

/// Pick the dispatch export for the run
fn select_dispatch(
    config: &MailerConfig,
    discovered: &DiscoveredInputs,
    layout: &RunLayout,
) -> Result<PathBuf, MailerError> {
    if let Some(path) = &config.dispatch {
        return Ok(path.clone());
    }

    let search_dir: &Path = if config.stage_inputs {
        &layout.input_dir
    } else {
        &config.work_dir
    };
    let (first, rest) = discovered
        .dispatch
        .split_first()
        .ok_or_else(|| MailerError::dispatch_source_missing(search_dir))?;

    for ignored in rest {
        warn!(file = %ignored.display(), "Ignoring additional dispatch export");
    }
    Ok(first.clone())
}

/// Execute one complete run
pub fn run(config: &MailerConfig) -> Result<RunSummary, MailerError> {
    let layout = RunLayout::new(&config.work_dir, config.run_date);
    let discovered = discover(config, &layout)?;

    let dispatch = select_dispatch(config, &discovered, &layout)?;
    info!(file = %dispatch.display(), "Reading dispatch export");
    let rows = read_dispatch_sheet(&dispatch)?;
    let index = DispatchIndex::from_sheet_rows(rows, config.max_width);
    info!(
        kits = index.len(),
        duplicates = index.duplicate_count(),
        "Dispatch index built"
    );

    let mut summary = RunSummary {
        output: None,
        index_size: index.len(),
        duplicate_kits: index.duplicate_count(),
        merge: MergeStats::default(),
    };

    let pin_files = if config.pin_files.is_empty() {
        discovered.pins
    } else {
        config.pin_files.clone()
    };
    if pin_files.is_empty() {
        info!("No .pin files found in input folder.");
        return Ok(summary);
    }

    let output_path = config
        .output
        .clone()
        .unwrap_or_else(|| layout.output_file.clone());
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(&output_path).map_err(|e| MailerError::IoError {
        message: format!("Failed to create '{}': {}", output_path.display(), e),
    })?;
    let mut output = BufWriter::new(file);
    summary.merge = merge_pin_files(&index, &pin_files, &mut output)?;
    output.flush()?;

    info!(
        output = %output_path.display(),
        records = summary.merge.records_written,
        skipped = summary.merge.lines_skipped,
        unmatched = summary.merge.unmatched_kits,
        "Processing completed"
    );
    summary.output = Some(output_path);
    Ok(summary)
}
