//! Core business logic module
//!
//! This module contains the merge pipeline components:
//! - `normalize` - Cleaning of free-text sheet cells
//! - `cascade` - Word-preserving re-flow of address text into bounded fields
//! - `mask` - Card number masking
//! - `dispatch_index` - Kit identifier to address lookup
//! - `engine` - Record merge and serial numbering

pub mod cascade;
pub mod dispatch_index;
pub mod engine;
pub mod mask;
pub mod normalize;

pub use cascade::{cascade_fields, safe_concat, safe_split, CascadedAddress, DEFAULT_FIELD_WIDTH};
pub use dispatch_index::DispatchIndex;
pub use engine::{MergeEngine, SerialCounter};
pub use mask::mask_card;
pub use normalize::normalize;
