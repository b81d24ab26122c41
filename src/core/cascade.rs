//! Field cascade resolver
//!
//! Re-flows four free-text address fields (line 1, line 2, city, state) into
//! five width-bounded fields (line 1, line 2, city, district, state) without
//! splitting a word across two fields. Text that does not fit in a field moves
//! forward into the next one:
//!
//! ```text
//! line1 ──split──> address1
//!          └─overflow─┐
//! line2 ──────────concat──split──> address2
//!                          └─overflow─┐
//! city  ──────────────────────────concat──split──> city
//!                                          └─overflow──split──> district
//!                                                         └─overflow─┐
//! state ─────────────────────────────────────────────────────────concat──split──> state
//! ```
//!
//! Overflow past the final `state` stage has nowhere to go and is dropped.
//! [`cascade_fields`] hands it back in [`CascadedAddress::dropped`] so callers
//! can report it.

/// Default field width of the mailer layout
pub const DEFAULT_FIELD_WIDTH: usize = 25;

/// Split `value` so the head fits in `max_len` characters
///
/// The split point is the last whitespace at or before character index
/// `max_len`. A single token longer than `max_len` is hard-cut at `max_len`.
/// Both halves are trimmed.
pub fn safe_split(value: &str, max_len: usize) -> (String, String) {
    let value = value.trim();
    if value.chars().count() <= max_len {
        return (value.to_string(), String::new());
    }

    // Byte offset of the character at index max_len; it exists because the
    // value is longer than max_len characters.
    let cut = value
        .char_indices()
        .nth(max_len)
        .map_or(value.len(), |(idx, _)| idx);

    let split_at = value
        .char_indices()
        .take(max_len + 1)
        .filter(|(_, ch)| ch.is_whitespace())
        .map(|(idx, _)| idx)
        .last()
        .unwrap_or(cut);

    let (head, tail) = value.split_at(split_at);
    (head.trim().to_string(), tail.trim().to_string())
}

/// Join two fragments with exactly one space
pub fn safe_concat(a: &str, b: &str) -> String {
    let (a, b) = (a.trim(), b.trim());
    match (a.is_empty(), b.is_empty()) {
        (false, false) => format!("{} {}", a, b),
        (false, true) => a.to_string(),
        (true, _) => b.to_string(),
    }
}

/// Result of cascading one address through the five bounded fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadedAddress {
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub district: String,
    pub state: String,
    /// Text that overflowed the final `state` field and was not kept
    pub dropped: String,
}

/// Cascade four free-text fields into five bounded fields
///
/// Every returned field is at most `max_len` characters. Reading the fields in
/// order reproduces the original word sequence, minus whatever ends up in
/// [`CascadedAddress::dropped`].
pub fn cascade_fields(
    line1: &str,
    line2: &str,
    city: &str,
    state: &str,
    max_len: usize,
) -> CascadedAddress {
    // Each stage's own text; the district only ever receives overflow.
    let stages = [line1, line2, city, "", state];

    let mut fields: [String; 5] = Default::default();
    let mut overflow = String::new();

    for (slot, stage) in fields.iter_mut().zip(stages.iter()) {
        let combined = safe_concat(&overflow, stage);
        let (head, tail) = safe_split(&combined, max_len);
        *slot = head;
        overflow = tail;
    }

    let [address1, address2, city, district, state] = fields;
    CascadedAddress {
        address1,
        address2,
        city,
        district,
        state,
        dropped: overflow,
    }
}
