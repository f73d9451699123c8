//! # spark-mask
//!
//! Progressive text-mask input engine for reactive TUIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! controlled-value binding.
//!
//! ## Architecture
//!
//! Formatting is referentially transparent: the display string is always a
//! pure function of the extracted digit sequence and the mask dialect, and
//! the digit sequence is never stored - it is recomputed from the display
//! on every edit, so raw value and display cannot drift apart.
//!
//! The pipeline, run synchronously on each keystroke:
//! ```text
//! raw text + caret → extract digits → clamp to capacity
//!                  → slot template / currency rule → resolve caret
//!                  → {formatted, caret} back to the host input
//! ```
//!
//! Five dialects are built in: CPF (`123.456.789-01`), phone
//! (`(11) 98765-4321`), CEP (`12345-678`), birthdate (`01/01/2000`) and
//! currency (`R$ 1.234,56`). Every operation is total over arbitrary
//! string input; excess digits are silently truncated, never rejected.
//!
//! ## Modules
//!
//! - [`types`] - Core types (MaskKind, EditResult, Cleanup)
//! - [`mask`] - The pure formatting pipeline (templates, currency, caret)
//! - [`field`] - Per-input state, signal binding, viewport math

pub mod field;
pub mod mask;
pub mod types;

// Re-export commonly used items
pub use types::{Cleanup, EditResult, MaskChangeCallback, MaskKind};

pub use mask::{
    apply_currency, apply_template, caret_after_digit, clamp_digits, digits_before,
    extract_digits, format_digits, resolve_caret, template, visible_len, Slot,
};

pub use field::{
    caret_column, ensure_caret_visible, masked_field, visible_slice, MaskedField,
    MaskedFieldHandle, MaskedFieldProps,
};
