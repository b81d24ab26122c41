//! Run orchestration
//!
//! Ties the pieces together for one run: resolve inputs, build the dispatch
//! index, merge every record file into the mailer output, and report a summary.

pub mod config;
pub mod runner;

pub use config::MailerConfig;
pub use runner::{merge_pin_files, run, MergeStats, RunSummary};
