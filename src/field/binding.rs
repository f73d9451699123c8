//! Signal binding - controlled-value reconciliation.
//!
//! A masked field binds to a `Signal<String>` the same way the plain
//! input component binds its value: the signal is the externally-owned
//! controlled value, and the engine guarantees it always holds the
//! mask's canonical form. Any external `set` - a programmatic reset, a
//! value loaded from storage - is re-masked by a reconciliation effect,
//! so internal and external state never diverge, even when the caller
//! pushes raw unmasked data.
//!
//! # Example
//!
//! ```
//! use spark_mask::{masked_field, MaskKind, MaskedFieldProps};
//! use spark_signals::signal;
//!
//! let value = signal("".to_string());
//! let (handle, cleanup) = masked_field(MaskedFieldProps::new(
//!     MaskKind::Cpf,
//!     value.clone(),
//! ));
//!
//! // Keystrokes flow through the handle...
//! handle.edit("1234", 4);
//! assert_eq!(value.get(), "123.4");
//!
//! // ...and external sets are canonicalized.
//! value.set("12345678901".to_string());
//! assert_eq!(value.get(), "123.456.789-01");
//!
//! cleanup();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{effect, Signal};

use crate::types::{Cleanup, EditResult, MaskChangeCallback, MaskKind};

use super::controller::MaskedField;

// =============================================================================
// Props
// =============================================================================

/// Properties for a signal-bound masked field.
pub struct MaskedFieldProps {
    /// The mask dialect (fixed for the field's lifetime).
    pub kind: MaskKind,

    /// Controlled value (two-way bound signal).
    pub value: Signal<String>,

    /// Called with the canonical formatted string whenever an edit made
    /// through the handle changes the value.
    pub on_change: Option<MaskChangeCallback>,
}

impl MaskedFieldProps {
    /// Create props with the required kind and value signal.
    pub fn new(kind: MaskKind, value: Signal<String>) -> Self {
        Self {
            kind,
            value,
            on_change: None,
        }
    }
}

// =============================================================================
// Handle
// =============================================================================

/// Handle to a signal-bound masked field.
///
/// The host input forwards keystroke events here; every operation pushes
/// the canonical result into the bound signal before returning it.
pub struct MaskedFieldHandle {
    field: Rc<RefCell<MaskedField>>,
    value: Signal<String>,
    on_change: Option<MaskChangeCallback>,
}

impl MaskedFieldHandle {
    /// The field's mask dialect.
    pub fn kind(&self) -> MaskKind {
        self.field.borrow().kind()
    }

    /// The current canonical display string.
    pub fn formatted(&self) -> String {
        self.field.borrow().formatted().to_string()
    }

    /// The current caret index, in visible units.
    pub fn caret(&self) -> usize {
        self.field.borrow().caret()
    }

    /// Process an edited string plus caret as reported by the host.
    pub fn edit(&self, raw_text: &str, caret: usize) -> EditResult {
        let result = self.field.borrow_mut().on_edit(raw_text, caret);
        self.commit(result)
    }

    /// Insert typed text at the caret.
    pub fn insert(&self, text: &str) -> EditResult {
        let result = self.field.borrow_mut().insert(text);
        self.commit(result)
    }

    /// Delete the digit left of the caret (Backspace).
    pub fn backspace(&self) -> EditResult {
        let result = self.field.borrow_mut().backspace();
        self.commit(result)
    }

    /// Delete the digit at/after the caret (Delete).
    pub fn delete_forward(&self) -> EditResult {
        let result = self.field.borrow_mut().delete_forward();
        self.commit(result)
    }

    /// Move the caret one unit left. Returns the new caret.
    pub fn move_left(&self) -> usize {
        self.field.borrow_mut().move_left()
    }

    /// Move the caret one unit right. Returns the new caret.
    pub fn move_right(&self) -> usize {
        self.field.borrow_mut().move_right()
    }

    /// Move the caret to the start.
    pub fn move_home(&self) -> usize {
        self.field.borrow_mut().move_home()
    }

    /// Move the caret to the end. Returns the new caret.
    pub fn move_end(&self) -> usize {
        self.field.borrow_mut().move_end()
    }

    /// Push a result into the bound signal, firing `on_change` when the
    /// canonical value actually changed.
    fn commit(&self, result: EditResult) -> EditResult {
        if self.value.get() != result.formatted {
            self.value.set(result.formatted.clone());
            if let Some(ref cb) = self.on_change {
                cb(&result.formatted);
            }
        }
        result
    }
}

// =============================================================================
// Binding
// =============================================================================

/// Bind a masked field to its controlled-value signal.
///
/// Canonicalizes the signal's current value, then installs the
/// reconciliation effect: whenever the signal is set externally, the
/// value is re-masked and written back in canonical form (caret at the
/// end). The write-back is equality-guarded, so reconciliation always
/// terminates after one re-mask.
///
/// Returns the handle the host forwards events to, and the cleanup that
/// stops reconciliation when the input unmounts.
pub fn masked_field(props: MaskedFieldProps) -> (MaskedFieldHandle, Cleanup) {
    let field = Rc::new(RefCell::new(MaskedField::new(props.kind)));

    // Canonicalize whatever the signal holds at mount.
    let initial = props.value.get();
    let canonical = field.borrow_mut().on_external_set(&initial);
    if canonical != initial {
        props.value.set(canonical);
    }

    // Reconciliation effect for external sets.
    let field_for_effect = field.clone();
    let value_for_effect = props.value.clone();
    let stop = effect(move || {
        let current = value_for_effect.get();
        if current == field_for_effect.borrow().formatted() {
            // Our own canonical write - nothing to reconcile.
            return;
        }
        let canonical = field_for_effect.borrow_mut().on_external_set(&current);
        if canonical != current {
            value_for_effect.set(canonical);
        }
    });

    let handle = MaskedFieldHandle {
        field,
        value: props.value,
        on_change: props.on_change,
    };
    (handle, Box::new(stop))
}
