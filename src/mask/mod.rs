//! Mask Module - The formatting pipeline
//!
//! Pure functions that turn raw keystroke text into a canonical display
//! string and keep the caret glued to the digit the user is editing:
//!
//! - **Digits** - Extraction of the raw digit sequence, capacity clamping
//! - **Template** - Declarative slot lists per mask dialect
//! - **Apply** - The slot walk that produces partial/full formatted strings
//! - **Currency** - Cents-based numeric formatting (`R$ 1.234,56`)
//! - **Caret** - Digit-count caret mapping across re-formats
//!
//! Everything here is a total function over arbitrary string input:
//! malformed input degrades to its digit-only projection, excess digits
//! are silently dropped, and nothing errors.

mod apply;
mod caret;
mod currency;
mod digits;
mod template;

pub use apply::{apply_template, format_digits};
pub use caret::{caret_after_digit, digits_before, resolve_caret, visible_len};
pub use currency::apply_currency;
pub use digits::{clamp_digits, extract_digits};
pub use template::{template, Slot};
