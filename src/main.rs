//! PIN Mailer CLI
//!
//! Command-line interface for building the PIN mailer file.
//!
//! # Usage
//!
//! ```bash
//! # Discover Dispatch*.csv and *.pin in the current directory, stage them and merge
//! cargo run
//! cargo run -- --work-dir /data/mailers --date 2025-10-08
//! cargo run -- --dispatch addresses.csv --pin a.pin --pin b.pin --output mailer.csv --no-stage
//! ```
//!
//! Diagnostics are logged to stderr; set `RUST_LOG` or `--log-level` to tune them.
//!
//! # Exit Codes
//!
//! - 0: Success, including runs with no record files
//! - 1: Error (no dispatch export, unreadable input, output not writable, etc.)

use pin_mailer::cli;
use pin_mailer::pipeline;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();
    cli::init_logging(&args.log_level);

    let today = chrono::Local::now().date_naive();
    let config = args.to_config(today);

    if let Err(e) = pipeline::run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
