//! View helpers - display-column math for the host renderer.
//!
//! The engine never draws; the host input renders a window of the
//! formatted string and a terminal cursor. These helpers supply the cell
//! arithmetic: where the caret falls in display columns, how to adjust
//! the horizontal scroll to keep it visible, and which slice of the
//! string is currently in view.
//!
//! Mask output is ASCII (one column per unit), but the helpers measure
//! with `unicode-width` so placeholder text and future dialects with
//! wide glyphs stay correct.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

// =============================================================================
// Caret Column
// =============================================================================

/// Display column of a caret index (visible units) in `formatted`.
pub fn caret_column(formatted: &str, caret: usize) -> usize {
    formatted
        .graphemes(true)
        .take(caret)
        .map(UnicodeWidthStr::width)
        .sum()
}

// =============================================================================
// Scroll Window
// =============================================================================

/// Adjust scroll offset to keep the caret inside the visible width.
///
/// `caret_col` is a display column (see [`caret_column`]), `scroll` the
/// current horizontal offset in columns, `visible_width` the input's
/// content width (0 = use default 40).
///
/// Returns the new scroll offset.
pub fn ensure_caret_visible(caret_col: usize, scroll: u16, visible_width: u16) -> u16 {
    let visible_width = if visible_width == 0 { 40 } else { visible_width };

    let view_start = scroll as usize;
    let view_end = view_start + visible_width as usize;

    if caret_col < view_start {
        // Caret is before the visible area - scroll left.
        caret_col as u16
    } else if caret_col >= view_end {
        // Caret is after the visible area - scroll right.
        (caret_col.saturating_sub(visible_width as usize) + 1) as u16
    } else {
        scroll
    }
}

/// The slice of `formatted` currently in view.
///
/// Skips `scroll` display columns and takes up to `visible_width` more.
pub fn visible_slice(formatted: &str, scroll: u16, visible_width: u16) -> &str {
    let mut start = formatted.len();
    let mut end = formatted.len();
    let mut col = 0;
    let mut found_start = false;

    for (i, g) in formatted.grapheme_indices(true) {
        if !found_start && col >= scroll as usize {
            start = i;
            found_start = true;
        }
        if found_start && col >= scroll as usize + visible_width as usize {
            end = i;
            break;
        }
        col += UnicodeWidthStr::width(g);
    }

    if !found_start {
        return "";
    }
    &formatted[start..end]
}
