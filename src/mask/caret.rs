//! Caret resolver - digit-count caret mapping.
//!
//! After re-formatting, the caret must land adjacent to the same logical
//! digit the user was editing, not jump to string end (the classic defect
//! of naively re-applied masks). The rule: caret placement is a pure
//! function of the number of digits before the caret, which makes it
//! immune to literals shifting positions during a re-format.
//!
//! Caret indices are offsets in visible units - grapheme clusters, via
//! `unicode-segmentation`. Formatted mask output is plain ASCII, where
//! visible units and chars coincide, but the raw text a host reports can
//! contain arbitrary Unicode.

use unicode_segmentation::UnicodeSegmentation;

// =============================================================================
// Digit Counting
// =============================================================================

/// Count digit characters among the first `caret` visible units of `s`.
///
/// A caret past the end of `s` counts the whole string.
pub fn digits_before(s: &str, caret: usize) -> usize {
    s.graphemes(true)
        .take(caret)
        .filter(|g| g.len() == 1 && g.as_bytes()[0].is_ascii_digit())
        .count()
}

/// The length of `s` in visible units.
pub fn visible_len(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Index (in visible units) immediately after the `n`-th digit of `s`.
///
/// With `n == 0` the caret goes to the start; if `s` has fewer than `n`
/// digits it goes to the end.
pub fn caret_after_digit(s: &str, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let mut seen = 0;
    for (i, g) in s.graphemes(true).enumerate() {
        if g.len() == 1 && g.as_bytes()[0].is_ascii_digit() {
            seen += 1;
            if seen == n {
                return i + 1;
            }
        }
    }
    visible_len(s)
}

// =============================================================================
// Resolution
// =============================================================================

/// Compute the caret position in `new` after a re-format.
///
/// `prev` is the display string as the host last saw it - for a keystroke
/// edit that is the edited text the host reports, caret included - and
/// `new` is the canonical formatted replacement. The caret lands right
/// after the same logical digit it was behind in `prev`, skipping over
/// any literals the re-format inserted or removed.
pub fn resolve_caret(prev: &str, prev_caret: usize, new: &str) -> usize {
    caret_after_digit(new, digits_before(prev, prev_caret))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_before() {
        assert_eq!(digits_before("123.456", 0), 0);
        assert_eq!(digits_before("123.456", 3), 3);
        assert_eq!(digits_before("123.456", 4), 3);
        assert_eq!(digits_before("123.456", 7), 6);
        // Caret past the end counts everything.
        assert_eq!(digits_before("123.456", 99), 6);
    }

    #[test]
    fn test_digits_before_non_ascii_raw_text() {
        // Host text with multi-byte graphemes: units are visible positions.
        assert_eq!(digits_before("é1é2", 2), 1);
        assert_eq!(digits_before("é1é2", 4), 2);
    }

    #[test]
    fn test_caret_after_digit() {
        assert_eq!(caret_after_digit("123.456", 0), 0);
        assert_eq!(caret_after_digit("123.456", 3), 3);
        assert_eq!(caret_after_digit("123.456", 4), 5);
        assert_eq!(caret_after_digit("123.456", 6), 7);
        // Fewer digits than requested: end of string.
        assert_eq!(caret_after_digit("123.456", 10), 7);
        assert_eq!(caret_after_digit("", 3), 0);
    }

    #[test]
    fn test_caret_stays_with_typed_digit_at_end() {
        // "123.456" + typed "7" at the end; host reports "123.4567", caret 8.
        // Re-format yields "123.456.7" - caret must follow the new digit.
        let new = "123.456.7";
        assert_eq!(resolve_caret("123.4567", 8, new), 9);
    }

    #[test]
    fn test_caret_stable_across_literal_insertion() {
        // Typing the 4th CPF digit mid-entry: host reports "1234", caret 4;
        // re-format inserts the dot, caret lands after the same digit.
        assert_eq!(resolve_caret("1234", 4, "123.4"), 5);
    }

    #[test]
    fn test_caret_after_mid_string_insert() {
        // Insert "9" after the first digit of "123.456":
        // host reports "1923.456" with caret 2; new format "192.345.6".
        assert_eq!(resolve_caret("1923.456", 2, "192.345.6"), 2);
    }

    #[test]
    fn test_caret_after_deletion() {
        // Delete the last digit of "123.456" (host reports "123.45", caret 6);
        // re-format is identical, caret stays after the 5th digit.
        assert_eq!(resolve_caret("123.45", 6, "123.45"), 6);
        // Deleting a digit after a literal: host reports "123.56", caret 4
        // (before the "5"); the caret stays after the 3rd digit, which is
        // index 3 - adjacent to the same logical digit, literal skipped.
        assert_eq!(resolve_caret("123.56", 4, "123.56"), 3);
    }

    #[test]
    fn test_caret_clamped_when_new_has_fewer_digits() {
        // Overflow truncation can shrink the digit count under the caret.
        assert_eq!(resolve_caret("123.456.789-0123", 16, "123.456.789-01"), 14);
    }

    #[test]
    fn test_caret_at_start() {
        assert_eq!(resolve_caret("123.456", 0, "123.456"), 0);
    }
}
