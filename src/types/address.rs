//! Address-related types for the PIN mailer
//!
//! This module defines the address bundle stored in the dispatch index for
//! each kit identifier.

/// Kit identifier
///
/// The join key correlating a printed card/PIN record to a delivery address.
pub type KitId = String;

/// Normalized delivery address for one kit
///
/// Built once per address-sheet row and never mutated after it is inserted
/// into the dispatch index. The five address fields are each bounded by the
/// configured field width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBundle {
    /// First address line
    pub address1: String,

    /// Second address line, including overflow cascaded from `address1`
    pub address2: String,

    /// City, including overflow cascaded from `address2`
    pub city: String,

    /// District, made only of overflow cascaded from `city`
    pub district: String,

    /// State, including overflow cascaded from `district`
    pub state: String,

    /// Postal code
    pub pincode: String,

    /// Contact mobile number
    pub mobile: String,
}

impl AddressBundle {
    /// The bundle used when a record's kit is not in the index
    ///
    /// Every address and contact field is empty.
    pub fn empty() -> Self {
        Self::default()
    }
}
