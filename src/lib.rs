//! PIN Mailer Library
//! # Overview
//!
//! This library prepares a printable PIN mailer file by merging a dispatch
//! sheet of delivery addresses with pipe-delimited card/PIN record files.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (AddressBundle, PinRecord, OutputRecord, etc.)
//! - [`cli`] - CLI arguments parsing and logging setup
//! - [`core`] - Business logic components:
//!   - [`core::normalize`] - Cleaning of free-text sheet cells
//!   - [`core::cascade`] - Word-preserving re-flow of address text into bounded fields
//!   - [`core::dispatch_index`] - Kit identifier to address lookup
//!   - [`core::mask`] - Card number masking
//!   - [`core::engine`] - Record merge and run-wide serial numbering
//! - [`io`] - Input discovery, sheet and record readers, output writer
//! - [`pipeline`] - Run configuration and orchestration
//!
//! # Output Row
//!
//! Each merged record becomes one pipe-delimited line:
//!
//! - **SerialNumber**: zero-padded, starting at 000001, shared by all record files
//! - **CardNumber**: masked card number
//! - **AccountNumber**, **EncryptedPinBlock**, **Bin**, **CustomerName**: from the record
//! - **Address1** to **MobileNumber**: from the dispatch index, empty when the kit is unknown
//! - **KitNumber**: the join key

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use crate::core::{cascade_fields, mask_card, normalize, DispatchIndex, MergeEngine};
pub use pipeline::{run, MailerConfig, RunSummary};
pub use types::{AddressBundle, MailerError, OutputRecord, PinRecord, Serial};
