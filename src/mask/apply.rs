//! Template applier - the slot walk.
//!
//! Walks a dialect's slot list left to right, consuming extracted digits
//! into digit slots. Literals are buffered and only flushed when a later
//! digit slot actually consumes a digit, so a literal never appears as a
//! trailing artifact: typing one digit at a time yields a growing,
//! never-corrupted prefix ("1" → "12" → "123" → "123.4" → ...).

use crate::types::MaskKind;

use super::currency::apply_currency;
use super::digits::clamp_digits;
use super::template::{template, Slot};

// =============================================================================
// Slot Walk
// =============================================================================

/// Format a pure digit sequence through a dialect's slot template.
///
/// Deterministic: the output is a pure function of `(digits, kind)`.
/// Digits beyond the template's digit slots are ignored; an empty digit
/// sequence formats to the empty string.
///
/// For `MaskKind::Currency` (empty template) this returns the empty
/// string - use [`format_digits`] to dispatch on kind.
pub fn apply_template(digits: &str, kind: MaskKind) -> String {
    let mut out = String::with_capacity(template(kind).len());
    let mut pending = String::new();
    let mut iter = digits.chars();

    for slot in template(kind) {
        match slot {
            // Buffered until a digit actually follows - never trailing.
            Slot::Literal(c) => pending.push(*c),
            Slot::Digit => match iter.next() {
                Some(d) => {
                    out.push_str(&pending);
                    pending.clear();
                    out.push(d);
                }
                None => break,
            },
        }
    }

    out
}

// =============================================================================
// Dispatch
// =============================================================================

/// Format a digit sequence for a dialect: clamp to capacity, then apply
/// the slot template or the currency rule.
///
/// This is the single entry point the field controller formats through.
pub fn format_digits(digits: &str, kind: MaskKind) -> String {
    let digits = clamp_digits(digits, kind);
    if kind.is_currency() {
        apply_currency(digits)
    } else {
        apply_template(digits, kind)
    }
}
