//! Digit extraction and capacity clamping.
//!
//! The digit sequence is the canonical raw value underlying every mask.
//! It is never stored - always recomputed from the current display string
//! or from raw input, so there is only ever one source of truth.

use crate::types::MaskKind;

// =============================================================================
// Extraction
// =============================================================================

/// Strip all non-digit characters, keeping `0-9` in original order.
///
/// Total over arbitrary input and idempotent:
/// `extract_digits(extract_digits(s)) == extract_digits(s)`.
pub fn extract_digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

// =============================================================================
// Capacity Clamp
// =============================================================================

/// Bound a digit sequence to the dialect's digit capacity.
///
/// Excess digits are dropped before formatting ever sees them - the
/// display simply stops growing once capacity is reached. Currency has
/// no capacity and passes through untouched.
///
/// `digits` must already be a pure digit sequence (as produced by
/// [`extract_digits`]), so byte slicing is safe.
pub fn clamp_digits(digits: &str, kind: MaskKind) -> &str {
    match kind.digit_capacity() {
        Some(cap) if digits.len() > cap => &digits[..cap],
        _ => digits,
    }
}
