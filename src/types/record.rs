//! Record-related types for the PIN mailer
//!
//! This module defines the parsed input record, the serial number assigned to
//! each merged record, and the output row that is written to the mailer file.

use serde::Serialize;
use std::fmt;

/// Parsed card/PIN record from one line of a `.pin` file
///
/// Ephemeral: built per line, merged, and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinRecord {
    /// First 16 characters of field 0 (the card block)
    pub raw_card: String,

    /// Characters 4 to 15 (12 characters) of field 0
    pub account_number: String,

    /// Encrypted PIN block (field 1)
    pub encrypted_block: String,

    /// Bank identification number (field 2)
    pub bin: String,

    /// Customer name (field 4), at most 25 characters
    pub customer_name: String,

    /// Kit identifier (field 13)
    pub kit_number: String,
}

/// Sequential serial number of an output row
///
/// Displayed zero-padded to six digits. Values past 999999 widen instead of
/// wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Serial(pub u64);

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}", self.0)
    }
}

/// One row of the mailer output file
///
/// Field order matches the output header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub serial: String,
    pub masked_card: String,
    pub account_number: String,
    pub encrypted_block: String,
    pub bin: String,
    pub customer_name: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub district: String,
    pub state: String,
    pub pincode: String,
    pub mobile: String,
    pub kit_number: String,
}
