//! Merge engine
//!
//! This module provides the MergeEngine that joins parsed `.pin` records with
//! their delivery address from the DispatchIndex and stamps each result with a
//! run-wide serial number.
//!
//! The engine enforces:
//! - Serials start at 1 and increase by exactly one per merged record, across
//!   every record file of the run
//! - A kit missing from the index yields empty address and contact fields,
//!   never a failed record
//! - Card numbers only leave the engine masked
//!
//! # Concurrency
//!
//! The serial counter is a plain owned value, so the engine is meant to be
//! driven sequentially. Merging several record files in parallel would need an
//! atomically incremented shared counter, and output order would then no longer
//! follow input encounter order.

use crate::core::dispatch_index::DispatchIndex;
use crate::core::mask::mask_card;
use crate::types::{AddressBundle, OutputRecord, PinRecord, Serial};

/// Run-wide serial number source
///
/// Hands out 1, 2, 3, ... with no gaps or repeats.
#[derive(Debug, Clone)]
pub struct SerialCounter {
    next: u64,
}

impl SerialCounter {
    /// Create a counter whose first serial is 1
    pub fn new() -> Self {
        SerialCounter { next: 1 }
    }

    /// Take the next serial number
    pub fn next_serial(&mut self) -> Serial {
        let serial = Serial(self.next);
        self.next += 1;
        serial
    }

    /// Number of serials handed out so far
    pub fn issued(&self) -> u64 {
        self.next - 1
    }
}

impl Default for SerialCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Record merge engine
///
/// Borrows a fully built DispatchIndex and owns the serial counter for the run.
pub struct MergeEngine<'a> {
    index: &'a DispatchIndex,
    serials: SerialCounter,
    unmatched: u64,
}

impl<'a> MergeEngine<'a> {
    /// Create a new engine over a built index
    ///
    /// The first merged record gets serial 000001.
    pub fn new(index: &'a DispatchIndex) -> Self {
        MergeEngine {
            index,
            serials: SerialCounter::new(),
            unmatched: 0,
        }
    }

    /// Merge one parsed record into an output row
    ///
    /// Takes the next serial number. Every call produces exactly one row.
    pub fn merge(&mut self, record: PinRecord) -> OutputRecord {
        let empty = AddressBundle::empty();
        let address = match self.index.get(&record.kit_number) {
            Some(bundle) => bundle,
            None => {
                self.unmatched += 1;
                &empty
            }
        };

        OutputRecord {
            serial: self.serials.next_serial().to_string(),
            masked_card: mask_card(&record.raw_card),
            account_number: record.account_number,
            encrypted_block: record.encrypted_block,
            bin: record.bin,
            customer_name: record.customer_name,
            address1: address.address1.clone(),
            address2: address.address2.clone(),
            city: address.city.clone(),
            district: address.district.clone(),
            state: address.state.clone(),
            pincode: address.pincode.clone(),
            mobile: address.mobile.clone(),
            kit_number: record.kit_number,
        }
    }

    /// Number of records merged so far
    pub fn merged_count(&self) -> u64 {
        self.serials.issued()
    }

    /// Number of merged records whose kit was not in the index
    pub fn unmatched_count(&self) -> u64 {
        self.unmatched
    }
}
