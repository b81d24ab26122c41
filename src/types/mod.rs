//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `address`: Address bundles keyed by kit identifier
//! - `record`: Parsed input records and output rows
//! - `error`: Error types for the PIN mailer

pub mod address;
pub mod error;
pub mod record;

pub use address::{AddressBundle, KitId};
pub use error::MailerError;
pub use record::{OutputRecord, PinRecord, Serial};
