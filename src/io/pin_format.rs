//! `.pin` record format handling
//!
//! Each data line of a `.pin` file is a pipe-delimited sequence of positional
//! fields. Only a handful of positions matter to the mailer:
//!
//! | field | content                                      |
//! |-------|----------------------------------------------|
//! | 0     | card block (card number, then account chars) |
//! | 1     | encrypted PIN block                          |
//! | 2     | BIN                                          |
//! | 4     | customer name                                |
//! | 13    | kit identifier                               |
//!
//! Lines with fewer than [`PIN_MIN_FIELDS`] fields are padded with empty
//! fields, never rejected. All functions are pure (no I/O) for easy testing.

use crate::types::PinRecord;

/// Field delimiter of `.pin` lines
pub const PIN_DELIMITER: char = '|';

/// Number of fields every line is padded to
pub const PIN_MIN_FIELDS: usize = 19;

/// Maximum length of the customer name in the output
pub const CUSTOMER_NAME_WIDTH: usize = 25;

const CARD_LEN: usize = 16;
const ACCOUNT_START: usize = 3;
const ACCOUNT_END: usize = 15;

/// Characters `start..end` of `s`, clamped to its length
fn char_slice(s: &str, start: usize, end: usize) -> String {
    s.chars().skip(start).take(end.saturating_sub(start)).collect()
}

/// Split a line into at least [`PIN_MIN_FIELDS`] fields
///
/// The line is trimmed first, so a trailing `\r\n` never leaks into the last
/// field. Extra fields are kept.
pub fn split_pin_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.trim().split(PIN_DELIMITER).collect();
    if fields.len() < PIN_MIN_FIELDS {
        fields.resize(PIN_MIN_FIELDS, "");
    }
    fields
}

/// Parse one data line of a `.pin` file
///
/// # Returns
///
/// * `Ok(PinRecord)` - Successfully parsed record
/// * `Err(String)` - Description of why the line is not a record
pub fn parse_pin_line(line: &str) -> Result<PinRecord, String> {
    if line.trim().is_empty() {
        return Err("blank line".to_string());
    }

    let fields = split_pin_fields(line);
    let card_block = fields[0].trim();

    Ok(PinRecord {
        raw_card: char_slice(card_block, 0, CARD_LEN),
        account_number: char_slice(card_block, ACCOUNT_START, ACCOUNT_END),
        encrypted_block: fields[1].trim().to_string(),
        bin: fields[2].trim().to_string(),
        customer_name: char_slice(fields[4].trim(), 0, CUSTOMER_NAME_WIDTH),
        kit_number: fields[13].trim().to_string(),
    })
}
