//! `.pin` file reader with iterator interface
//!
//! Streams the data lines of one `.pin` file as parsed records. Lines are
//! decoded as Windows-1252; the first line of every file is a header and is
//! skipped.
//!
//! # Iterator Interface
//!
//! PinReader implements the Iterator trait, yielding
//! `Result<PinRecord, MailerError>` for each data line:
//!
//! ```no_run
//! use pin_mailer::io::pin_reader::PinReader;
//! use std::path::Path;
//!
//! let reader = PinReader::new(Path::new("cards.pin")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Kit: {}", record.kit_number),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Malformed lines are yielded as `MailerError::MalformedRecord`, carrying the
//!   file name and 1-based line number, and iteration continues
//! - A read error mid-file is yielded once and ends the iteration

use crate::io::pin_format::parse_pin_line;
use crate::types::{MailerError, PinRecord};
use encoding_rs::WINDOWS_1252;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Number of header lines at the top of every `.pin` file
pub const PIN_HEADER_LINES: usize = 1;

/// Streaming reader over one `.pin` file
#[derive(Debug)]
pub struct PinReader {
    reader: BufReader<File>,
    file_name: String,
    line_num: usize,
    buf: Vec<u8>,
    finished: bool,
}

impl PinReader {
    /// Open a `.pin` file for streaming
    ///
    /// # Returns
    ///
    /// * `Ok(PinReader)` if the file opened successfully
    /// * `Err(MailerError)` if the file is missing or unreadable
    pub fn new(path: &Path) -> Result<Self, MailerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => MailerError::file_not_found(path),
            _ => MailerError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            reader: BufReader::with_capacity(8 * 1024, file),
            file_name,
            line_num: 0,
            buf: Vec::new(),
            finished: false,
        })
    }

    /// Name of the file being read, as used in diagnostics
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Read the next raw line, decoded from Windows-1252
    fn next_line(&mut self) -> Option<Result<String, MailerError>> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_num += 1;
                let (text, _) = WINDOWS_1252.decode_without_bom_handling(&self.buf);
                Some(Ok(text.into_owned()))
            }
            Err(e) => Some(Err(MailerError::IoError {
                message: format!(
                    "Failed to read '{}' after line {}: {}",
                    self.file_name, self.line_num, e
                ),
            })),
        }
    }
}

impl Iterator for PinReader {
    type Item = Result<PinRecord, MailerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let line = match self.next_line() {
                None => {
                    self.finished = true;
                    return None;
                }
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                Some(Ok(line)) => line,
            };

            if self.line_num <= PIN_HEADER_LINES {
                continue;
            }

            return Some(parse_pin_line(&line).map_err(|message| {
                MailerError::malformed_record(&self.file_name, self.line_num, &message)
            }));
        }
    }
}
