//! Dispatch index: kit identifier to delivery address
//!
//! This module provides the DispatchIndex that the merge engine consults for
//! every record. It is built once from the rows of the dispatch sheet export
//! and is read-only afterwards.
//!
//! # Sheet layout
//!
//! Raw sheet rows carry at least 9 positional columns:
//!
//! | column | content        |
//! |--------|----------------|
//! | 1      | address line 1 |
//! | 2      | address line 2 |
//! | 3      | city           |
//! | 4      | state          |
//! | 5      | pincode        |
//! | 6      | mobile         |
//! | 8      | kit identifier |
//!
//! [`normalize_sheet_row`] turns such a row into the 8 logical columns
//! `kit, address1, address2, city, district, state, pincode, mobile`, which
//! [`DispatchIndex::build`] consumes.
//!
//! # Duplicate Handling
//!
//! If a kit identifier appears more than once, the last row wins. Replaced
//! entries are counted and logged at debug level.

use crate::core::cascade::cascade_fields;
use crate::core::normalize::normalize;
use crate::types::{AddressBundle, KitId};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Minimum number of columns in a raw sheet row
pub const SHEET_MIN_COLUMNS: usize = 9;

/// Number of logical columns in a normalized dispatch row
pub const DISPATCH_ROW_COLUMNS: usize = 8;

/// Convert one raw sheet row into a normalized dispatch row
///
/// Address text is normalized and then cascaded into the five bounded
/// address fields. Pincode and mobile are normalized; the kit identifier is
/// trimmed.
///
/// # Returns
///
/// * `Some(row)` - The 8 logical columns
/// * `None` - If the row has fewer than [`SHEET_MIN_COLUMNS`] columns
pub fn normalize_sheet_row<S: AsRef<str>>(cells: &[S], max_width: usize) -> Option<Vec<String>> {
    if cells.len() < SHEET_MIN_COLUMNS {
        return None;
    }
    let cells: Vec<&str> = cells.iter().map(AsRef::as_ref).collect();

    let kit = cells[8].trim().to_string();
    let cascaded = cascade_fields(
        &normalize(cells[1]),
        &normalize(cells[2]),
        &normalize(cells[3]),
        &normalize(cells[4]),
        max_width,
    );

    if !cascaded.dropped.is_empty() {
        warn!(
            kit = %kit,
            dropped = %cascaded.dropped,
            "Address text does not fit in the state field and was truncated"
        );
    }

    Some(vec![
        kit,
        cascaded.address1,
        cascaded.address2,
        cascaded.city,
        cascaded.district,
        cascaded.state,
        normalize(cells[5]),
        normalize(cells[6]),
    ])
}

/// Keyed lookup of delivery addresses
///
/// Maintains a HashMap of kit identifier to address bundle.
#[derive(Debug, Default)]
pub struct DispatchIndex {
    /// Map of kit identifier to address bundle
    entries: HashMap<KitId, AddressBundle>,

    /// Number of rows that replaced an earlier row with the same kit
    duplicates: usize,
}

impl DispatchIndex {
    /// Build the index from normalized dispatch rows
    ///
    /// Rows with fewer than [`DISPATCH_ROW_COLUMNS`] columns or an empty kit
    /// identifier are skipped. Later rows replace earlier ones with the same kit.
    pub fn build<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[String]>,
    {
        let mut index = DispatchIndex::default();

        for row in rows {
            let row = row.as_ref();
            if row.len() < DISPATCH_ROW_COLUMNS {
                debug!(columns = row.len(), "Skipping short dispatch row");
                continue;
            }
            let kit = row[0].trim();
            if kit.is_empty() {
                debug!("Skipping dispatch row without a kit identifier");
                continue;
            }

            let bundle = AddressBundle {
                address1: row[1].clone(),
                address2: row[2].clone(),
                city: row[3].clone(),
                district: row[4].clone(),
                state: row[5].clone(),
                pincode: row[6].clone(),
                mobile: row[7].clone(),
            };

            if index.entries.insert(kit.to_string(), bundle).is_some() {
                debug!(kit = %kit, "Duplicate kit identifier, keeping the later row");
                index.duplicates += 1;
            }
        }

        index
    }

    /// Build the index straight from raw sheet rows
    ///
    /// Rows too short to carry a kit column are skipped.
    pub fn from_sheet_rows<I, R>(rows: I, max_width: usize) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[String]>,
    {
        let normalized = rows.into_iter().filter_map(|row| {
            let row = row.as_ref();
            let normalized = normalize_sheet_row(row, max_width);
            if normalized.is_none() {
                debug!(columns = row.len(), "Skipping short sheet row");
            }
            normalized
        });
        Self::build(normalized)
    }

    /// Look up the address bundle for a kit
    ///
    /// # Returns
    ///
    /// * `Some(&AddressBundle)` - If the kit is known
    /// * `None` - If the kit is not in the index
    pub fn get(&self, kit: &str) -> Option<&AddressBundle> {
        self.entries.get(kit)
    }

    /// Number of kits in the index
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index has no kits
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of rows that replaced an earlier row with the same kit
    pub fn duplicate_count(&self) -> usize {
        self.duplicates
    }
}
