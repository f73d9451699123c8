//! Currency formatter - cents to `R$ 1.234,56`.
//!
//! Not slot-based: the digit sequence is read as an integer number of
//! cents (two implied decimal places), so the division is always exact
//! and there is no rounding to specify. Grouping and rendering are done
//! with string arithmetic, which keeps the magnitude unbounded.

// =============================================================================
// Formatting
// =============================================================================

/// Format a pure digit sequence as a currency display string.
///
/// Leading zeros are insignificant; the empty sequence renders as
/// `"R$ 0,00"`. The integer part is grouped every 3 digits from the
/// right with `.` and the two fraction digits follow a `,`.
pub fn apply_currency(digits: &str) -> String {
    let digits = digits.trim_start_matches('0');

    // Split off the two implied fraction digits, padding small values.
    let (int_part, fraction) = match digits.len() {
        0 => ("", ['0', '0']),
        1 => {
            let d = digits.as_bytes()[0] as char;
            ("", ['0', d])
        }
        n => {
            let (int_part, frac) = digits.split_at(n - 2);
            let bytes = frac.as_bytes();
            (int_part, [bytes[0] as char, bytes[1] as char])
        }
    };

    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + 7);
    out.push_str("R$ ");
    if int_part.is_empty() {
        out.push('0');
    } else {
        push_grouped(&mut out, int_part);
    }
    out.push(',');
    out.push(fraction[0]);
    out.push(fraction[1]);
    out
}

/// Append a digit string with a `.` separator every 3 digits from the right.
fn push_grouped(out: &mut String, int_part: &str) {
    let len = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
}
