//! I/O module
//!
//! Handles input discovery, reading and output.
//!
//! # Components
//!
//! - `layout` - Dated run folders, input discovery and staging
//! - `dispatch_reader` - Dispatch sheet export reader
//! - `pin_format` - `.pin` line format handling (pure)
//! - `pin_reader` - Streaming `.pin` reader with iterator interface
//! - `output_format` - Pipe-delimited mailer output

pub mod dispatch_reader;
pub mod layout;
pub mod output_format;
pub mod pin_format;
pub mod pin_reader;

pub use dispatch_reader::read_dispatch_sheet;
pub use layout::{discover_inputs, stage_inputs, DiscoveredInputs, RunLayout};
pub use output_format::{OutputWriter, OUTPUT_COLUMNS};
pub use pin_format::parse_pin_line;
pub use pin_reader::PinReader;
