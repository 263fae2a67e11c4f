//! Full-width to half-width normalization.
//!
//! CJK-aware character sets carry two visual-width variants of the ASCII
//! range. Normalization maps the full-width block (U+FF01..=U+FF5E) onto
//! its half-width counterpart by a fixed codepoint offset and turns the
//! ideographic space (U+3000) into an ASCII space. Everything else passes
//! through unchanged, so the transform is total and idempotent.

/// Offset between a full-width form and its half-width counterpart.
const FULL_TO_HALF_OFFSET: u32 = 0xFEE0;

/// Convert full-width characters in `text` to their half-width forms.
///
/// ```
/// use han_prep::nlp::normalizer::to_half_width;
///
/// assert_eq!(to_half_width("Ａｐｐｌｅ"), "Apple");
/// assert_eq!(to_half_width("１２３！"), "123!");
/// ```
pub fn to_half_width(text: &str) -> String {
    text.chars()
        .map(|c| match c as u32 {
            0x3000 => ' ',
            cp @ 0xFF01..=0xFF5E => char::from_u32(cp - FULL_TO_HALF_OFFSET).unwrap_or(c),
            _ => c,
        })
        .collect()
}
