//! Mailer output serialization
//!
//! The output file is pipe-delimited UTF-8 with a fixed 14-column header and
//! one `\n`-terminated line per merged record. Fields are written verbatim:
//! no quoting, no escaping, and no trailing delimiter.

use crate::types::{MailerError, OutputRecord};
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use std::io::Write;

/// Column names of the mailer output, in order
pub const OUTPUT_COLUMNS: [&str; 14] = [
    "SerialNumber",
    "CardNumber",
    "AccountNumber",
    "EncryptedPinBlock",
    "Bin",
    "CustomerName",
    "Address1",
    "Address2",
    "City",
    "District",
    "State",
    "Pincode",
    "MobileNumber",
    "KitNumber",
];

/// Writer for the pipe-delimited mailer file
pub struct OutputWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> OutputWriter<W> {
    /// Wrap an output stream and write the header line
    pub fn new(output: W) -> Result<Self, MailerError> {
        let mut writer = WriterBuilder::new()
            .delimiter(b'|')
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .has_headers(false)
            .from_writer(output);

        writer.write_record(OUTPUT_COLUMNS)?;

        Ok(Self { writer })
    }

    /// Append one merged record
    pub fn write_record(&mut self, record: &OutputRecord) -> Result<(), MailerError> {
        self.writer.serialize(record)?;
        Ok(())
    }

    /// Flush buffered lines to the underlying stream
    pub fn flush(&mut self) -> Result<(), MailerError> {
        self.writer.flush()?;
        Ok(())
    }
}
