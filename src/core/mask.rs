//! Card number masking
//!
//! Cards of up to 10 characters show only their last 4; longer cards keep the
//! first 6 and last 4 visible. Masking counts characters, not bytes.

/// Character used to hide card digits
pub const MASK_CHAR: char = 'X';

/// Mask a card number for display
///
/// Values shorter than 4 characters have nothing to hide and are returned
/// unchanged.
pub fn mask_card(card: &str) -> String {
    let chars: Vec<char> = card.chars().collect();
    let len = chars.len();

    let (visible_prefix, visible_suffix) = if len <= 10 { (0, 4) } else { (6, 4) };
    let suffix_start = len.saturating_sub(visible_suffix);
    let masked = suffix_start.saturating_sub(visible_prefix);

    let mut out = String::with_capacity(len);
    out.extend(&chars[..visible_prefix.min(len)]);
    out.extend(std::iter::repeat(MASK_CHAR).take(masked));
    out.extend(&chars[suffix_start..]);
    out
}
