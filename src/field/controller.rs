//! Masked-field controller.
//!
//! `MaskedField` is the one long-lived entity of the engine: it owns the
//! current formatted string and caret for a single input, and is mutated
//! only through the operations here. The digit sequence is never stored -
//! it is re-derived from the display string on every operation, so the
//! raw value and the display can never drift apart.
//!
//! Every operation is total and synchronous: it runs between the host's
//! keystroke event and its repaint, and out-of-range input is silently
//! truncated rather than rejected.

use crate::mask::{
    caret_after_digit, digits_before, extract_digits, format_digits, visible_len,
};
use crate::types::{EditResult, MaskKind};

use unicode_segmentation::UnicodeSegmentation;

// =============================================================================
// Masked Field
// =============================================================================

/// Per-input masked-field state.
///
/// Created when the host input mounts (the mask kind is fixed for the
/// field's lifetime) and dropped when it unmounts.
///
/// # Example
///
/// ```
/// use spark_mask::{MaskKind, MaskedField};
///
/// let mut field = MaskedField::new(MaskKind::Cpf);
/// let result = field.on_edit("1234", 4);
/// assert_eq!(result.formatted, "123.4");
/// assert_eq!(result.caret, 5);
/// ```
#[derive(Debug, Clone)]
pub struct MaskedField {
    kind: MaskKind,
    formatted: String,
    caret: usize,
}

impl MaskedField {
    /// Create an empty field with the given mask dialect.
    pub fn new(kind: MaskKind) -> Self {
        Self {
            kind,
            formatted: String::new(),
            caret: 0,
        }
    }

    /// The field's mask dialect.
    pub fn kind(&self) -> MaskKind {
        self.kind
    }

    /// The current canonical display string.
    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    /// The current caret index, in visible units of [`Self::formatted`].
    pub fn caret(&self) -> usize {
        self.caret
    }

    fn result(&self) -> EditResult {
        EditResult {
            formatted: self.formatted.clone(),
            caret: self.caret,
        }
    }

    // =========================================================================
    // Edit Operations
    // =========================================================================

    /// Process an edited string as reported by the host on a keystroke.
    ///
    /// `raw_text` is the display string with the host's edit already
    /// applied (insert or delete, digit or literal - it makes no
    /// difference, digits are re-derived from the whole string) and
    /// `caret` the host's post-edit caret. The field re-formats, resolves
    /// the caret against the new string, stores both, and returns them.
    pub fn on_edit(&mut self, raw_text: &str, caret: usize) -> EditResult {
        let digits = extract_digits(raw_text);
        let formatted = format_digits(&digits, self.kind);
        // Currency is end-anchored: zero-padding prepends digits, so the
        // digit-count mapping has no stable digit to glue the caret to.
        self.caret = if self.kind.is_currency() {
            visible_len(&formatted)
        } else {
            crate::mask::resolve_caret(raw_text, caret, &formatted)
        };
        self.formatted = formatted;
        self.result()
    }

    /// Re-mask an externally supplied controlled value.
    ///
    /// The value may be raw unmasked data; it is canonicalized the same
    /// way keystroke input is, with the caret reset to the end. Returns
    /// the canonical display string.
    pub fn on_external_set(&mut self, value: &str) -> String {
        let digits = extract_digits(value);
        self.formatted = format_digits(&digits, self.kind);
        self.caret = visible_len(&self.formatted);
        self.formatted.clone()
    }

    // =========================================================================
    // Keystroke Helpers
    // =========================================================================

    /// Insert typed text at the current caret and re-format.
    ///
    /// Non-digit characters in `text` are dropped by extraction, so
    /// typing a letter into a numeric mask is a no-op.
    pub fn insert(&mut self, text: &str) -> EditResult {
        if text.is_empty() {
            return self.result();
        }
        let mut edited = String::with_capacity(self.formatted.len() + text.len());
        let mut len = 0;
        for (i, g) in self.formatted.graphemes(true).enumerate() {
            if i == self.caret {
                edited.push_str(text);
            }
            edited.push_str(g);
            len += 1;
        }
        if self.caret >= len {
            edited.push_str(text);
        }
        let caret = self.caret.min(len) + visible_len(text);
        self.on_edit(&edited, caret)
    }

    /// Delete the digit immediately left of the caret.
    ///
    /// Literals are not independently editable: a backspace on a `-` or
    /// `.` removes the digit before it, exactly as if the caret had been
    /// on the digit itself. No-op when no digit precedes the caret.
    pub fn backspace(&mut self) -> EditResult {
        let n = digits_before(&self.formatted, self.caret);
        if n == 0 {
            return self.result();
        }
        self.remove_digit(n - 1, n - 1)
    }

    /// Delete the digit at or after the caret (Delete key).
    ///
    /// No-op when the caret is past the last digit.
    pub fn delete_forward(&mut self) -> EditResult {
        let n = digits_before(&self.formatted, self.caret);
        if n >= extract_digits(&self.formatted).len() {
            return self.result();
        }
        self.remove_digit(n, n)
    }

    /// Remove the digit at index `remove` from the derived sequence and
    /// re-format, placing the caret after `keep` remaining digits.
    fn remove_digit(&mut self, remove: usize, keep: usize) -> EditResult {
        let digits = extract_digits(&self.formatted);
        let mut remaining = String::with_capacity(digits.len() - 1);
        remaining.push_str(&digits[..remove]);
        remaining.push_str(&digits[remove + 1..]);
        self.formatted = format_digits(&remaining, self.kind);
        self.caret = if self.kind.is_currency() {
            visible_len(&self.formatted)
        } else {
            caret_after_digit(&self.formatted, keep)
        };
        self.result()
    }

    // =========================================================================
    // Caret Navigation
    // =========================================================================

    /// Move the caret one visible unit left. Returns the new caret.
    pub fn move_left(&mut self) -> usize {
        self.caret = self.caret.saturating_sub(1);
        self.caret
    }

    /// Move the caret one visible unit right. Returns the new caret.
    pub fn move_right(&mut self) -> usize {
        self.caret = (self.caret + 1).min(visible_len(&self.formatted));
        self.caret
    }

    /// Move the caret to the start of the field.
    pub fn move_home(&mut self) -> usize {
        self.caret = 0;
        0
    }

    /// Move the caret to the end of the field. Returns the new caret.
    pub fn move_end(&mut self) -> usize {
        self.caret = visible_len(&self.formatted);
        self.caret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_formats_and_stores() {
        let mut field = MaskedField::new(MaskKind::Cpf);
        let result = field.on_edit("12345678901", 11);
        assert_eq!(result.formatted, "123.456.789-01");
        assert_eq!(result.caret, 14);
        assert_eq!(field.formatted(), "123.456.789-01");
        assert_eq!(field.caret(), 14);
    }

    #[test]
    fn test_edit_truncates_overflow() {
        let mut field = MaskedField::new(MaskKind::Cpf);
        let result = field.on_edit("123456789012345", 15);
        assert_eq!(result.formatted, "123.456.789-01");
        assert_eq!(result.caret, 14);
    }

    #[test]
    fn test_external_set_canonicalizes_raw_value() {
        let mut field = MaskedField::new(MaskKind::Phone);
        assert_eq!(field.on_external_set("11987654321"), "(11) 98765-4321");
        assert_eq!(field.caret(), 15);
        // Already-formatted values survive re-masking unchanged.
        assert_eq!(field.on_external_set("(11) 98765-4321"), "(11) 98765-4321");
    }

    #[test]
    fn test_external_set_currency_zero() {
        let mut field = MaskedField::new(MaskKind::Currency);
        assert_eq!(field.on_external_set(""), "R$ 0,00");
        assert_eq!(field.caret(), 7);
    }

    #[test]
    fn test_insert_progressive_typing() {
        let mut field = MaskedField::new(MaskKind::Cpf);
        let mut last = EditResult {
            formatted: String::new(),
            caret: 0,
        };
        for d in ["1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "1"] {
            last = field.insert(d);
        }
        assert_eq!(last.formatted, "123.456.789-01");
        assert_eq!(last.caret, 14);
    }

    #[test]
    fn test_insert_non_digit_is_noop() {
        let mut field = MaskedField::new(MaskKind::Cep);
        field.insert("123");
        let result = field.insert("x");
        assert_eq!(result.formatted, "123");
        assert_eq!(result.caret, 3);
    }

    #[test]
    fn test_insert_mid_string_keeps_caret_on_digit() {
        let mut field = MaskedField::new(MaskKind::Cpf);
        field.on_edit("123456", 6); // "123.456"
        field.move_home();
        field.move_right(); // after the "1"
        let result = field.insert("9");
        assert_eq!(result.formatted, "192.345.6");
        assert_eq!(result.caret, 2);
    }

    #[test]
    fn test_insert_into_full_field_is_noop() {
        let mut field = MaskedField::new(MaskKind::BirthDate);
        field.on_edit("01012000", 8); // "01/01/2000"
        let result = field.insert("9");
        assert_eq!(result.formatted, "01/01/2000");
    }

    #[test]
    fn test_backspace_removes_last_digit() {
        let mut field = MaskedField::new(MaskKind::Cpf);
        field.on_edit("1234", 4); // "123.4", caret 5
        let result = field.backspace();
        assert_eq!(result.formatted, "123");
        assert_eq!(result.caret, 3);
    }

    #[test]
    fn test_backspace_on_literal_removes_adjacent_digit() {
        let mut field = MaskedField::new(MaskKind::Cep);
        field.on_edit("123456", 6); // "12345-6"
        // Place the caret right after the "-" literal.
        field.move_left(); // before "6", after "-"
        let result = field.backspace();
        // The digit left of the literal is removed, not the literal.
        assert_eq!(result.formatted, "12346");
        assert_eq!(result.caret, 4);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut field = MaskedField::new(MaskKind::Cpf);
        field.on_edit("123", 3);
        field.move_home();
        let result = field.backspace();
        assert_eq!(result.formatted, "123");
        assert_eq!(result.caret, 0);
    }

    #[test]
    fn test_delete_forward() {
        let mut field = MaskedField::new(MaskKind::Cpf);
        field.on_edit("123456", 6); // "123.456"
        field.move_home();
        let result = field.delete_forward();
        assert_eq!(result.formatted, "234.56");
        assert_eq!(result.caret, 0);
    }

    #[test]
    fn test_delete_forward_at_end_is_noop() {
        let mut field = MaskedField::new(MaskKind::Cpf);
        field.on_edit("123", 3);
        let result = field.delete_forward();
        assert_eq!(result.formatted, "123");
        assert_eq!(result.caret, 3);
    }

    #[test]
    fn test_currency_typing_shifts_cents() {
        let mut field = MaskedField::new(MaskKind::Currency);
        field.on_external_set("");
        assert_eq!(field.formatted(), "R$ 0,00");
        assert_eq!(field.insert("5").formatted, "R$ 0,05");
        assert_eq!(field.insert("0").formatted, "R$ 0,50");
        assert_eq!(field.insert("0").formatted, "R$ 5,00");
        let result = field.insert("0");
        assert_eq!(result.formatted, "R$ 50,00");
        assert_eq!(result.caret, 8);
    }

    #[test]
    fn test_currency_backspace() {
        let mut field = MaskedField::new(MaskKind::Currency);
        field.on_external_set("123456"); // "R$ 1.234,56"
        let result = field.backspace();
        assert_eq!(result.formatted, "R$ 123,45");
    }

    #[test]
    fn test_navigation_clamps() {
        let mut field = MaskedField::new(MaskKind::Cep);
        field.on_edit("123", 3);
        assert_eq!(field.move_end(), 3);
        assert_eq!(field.move_right(), 3);
        assert_eq!(field.move_home(), 0);
        assert_eq!(field.move_left(), 0);
        assert_eq!(field.move_right(), 1);
    }
}
