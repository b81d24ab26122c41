//! Text normalization for address-sheet cells
//!
//! Policy:
//! - Commas become spaces (downstream consumers treat them as delimiters).
//! - Pipes become spaces (the mailer output is pipe-delimited).
//! - Any run of whitespace, including tabs and newlines, collapses to one space.
//! - Leading and trailing whitespace is removed.

/// Normalize a cell of free text
///
/// Total and pure: defined for every input, including the empty string.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() || ch == ',' || ch == '|' {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(ch);
    }

    out
}
