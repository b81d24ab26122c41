//! Dispatch sheet reader
//!
//! Reads the CSV export of the dispatch spreadsheet into raw rows of cells.
//! The export has no header semantics: every row is data, and rows without a
//! usable kit column are dropped later by the dispatch index.
//!
//! Cells are decoded as UTF-8 and fall back to Windows-1252 when they are not
//! valid UTF-8, since sheet exports from desktop tools often use the legacy
//! code page. Rows may have different lengths; missing cells are empty.

use crate::types::MailerError;
use csv::{ByteRecord, ReaderBuilder};
use encoding_rs::WINDOWS_1252;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// Decode one cell of the sheet export
fn decode_cell(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => WINDOWS_1252.decode_without_bom_handling(bytes).0.into_owned(),
    }
}

/// Read every row of a dispatch sheet export
///
/// # Errors
///
/// The address source is a hard precondition: failing to open or read the
/// file is fatal. A row the CSV parser cannot make sense of is skipped with a
/// warning.
pub fn read_dispatch_sheet(path: &Path) -> Result<Vec<Vec<String>>, MailerError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => MailerError::file_not_found(path),
        _ => MailerError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        },
    })?;

    read_dispatch_rows(file)
}

/// Read dispatch rows from any reader
pub fn read_dispatch_rows<R: Read>(input: R) -> Result<Vec<Vec<String>>, MailerError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .buffer_capacity(8 * 1024)
        .from_reader(input);

    let mut rows = Vec::new();
    let mut record = ByteRecord::new();

    loop {
        match reader.read_byte_record(&mut record) {
            Ok(false) => break,
            Ok(true) => rows.push(record.iter().map(decode_cell).collect()),
            Err(e) => {
                let error = MailerError::from(e);
                if !error.is_recoverable() {
                    return Err(error);
                }
                warn!("Skipping dispatch row: {}", error);
            }
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_dispatch_rows_keeps_every_row() {
        let csv = "SNO,ADDR1,ADDR2,CITY,STATE,PIN,MOBILE,NAME,KIT\n\
                   1,12 MG Road,,Bengaluru,Karnataka,560038,9876543210,Asha,K1\n";
        let rows = read_dispatch_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][1], "12 MG Road");
        assert_eq!(rows[1][2], "");
        assert_eq!(rows[1][8], "K1");
    }

    #[test]
    fn test_read_dispatch_rows_quoted_commas_and_newlines() {
        let csv = "1,\"12, MG Road\nNear Metro\",,Bengaluru,Karnataka,560038,98765,Asha,K1\n";
        let rows = read_dispatch_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][1], "12, MG Road\nNear Metro");
    }

    #[test]
    fn test_read_dispatch_rows_flexible_lengths() {
        let csv = "a,b\n1,2,3,4,5,6,7,8,9\n";
        let rows = read_dispatch_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].len(), 9);
    }

    #[test]
    fn test_read_dispatch_rows_windows_1252_fallback() {
        let rows = read_dispatch_rows(&b"1,Caf\xE9 Street\n"[..]).unwrap();
        assert_eq!(rows[0][1], "Café Street");
    }

    #[test]
    fn test_read_dispatch_sheet_missing_file() {
        let result = read_dispatch_sheet(Path::new("Dispatch_missing.csv"));
        assert!(matches!(result, Err(MailerError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_dispatch_sheet_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"1,a,b,c,d,e,f,g,K1\n").unwrap();
        file.flush().unwrap();

        let rows = read_dispatch_sheet(file.path()).unwrap();
        assert_eq!(rows, vec![vec!["1", "a", "b", "c", "d", "e", "f", "g", "K1"]]);
    }
}
