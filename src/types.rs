//! Core types for spark-mask.
//!
//! These types define the foundation that everything builds on.
//! They flow from the host input through the formatting pipeline and back.

use std::rc::Rc;

// =============================================================================
// Mask Kind
// =============================================================================

/// The mask dialect of a field.
///
/// Selected once when the field is created and never changed mid-session.
/// The four slot-based kinds format through a fixed slot template; currency
/// formats through a numeric rule (cents, thousands grouping, `R$ ` prefix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskKind {
    /// `###.###.###-##` - 11 digits.
    Cpf,
    /// `(##) #####-####` - 11 digits.
    Phone,
    /// `#####-###` - 8 digits.
    Cep,
    /// `##/##/####` - 8 digits.
    BirthDate,
    /// `R$ 1.234,56` - unbounded cents value.
    Currency,
}

impl MaskKind {
    /// Maximum number of raw digits this dialect will format.
    ///
    /// `None` for currency, which has no upper bound.
    pub const fn digit_capacity(self) -> Option<usize> {
        match self {
            MaskKind::Cpf => Some(11),
            MaskKind::Phone => Some(11),
            MaskKind::Cep => Some(8),
            MaskKind::BirthDate => Some(8),
            MaskKind::Currency => None,
        }
    }

    /// Maximum formatted display length (digit capacity plus literals).
    ///
    /// `None` for currency, which grows with the value's magnitude.
    pub const fn max_formatted_len(self) -> Option<usize> {
        match self {
            MaskKind::Cpf => Some(14),
            MaskKind::Phone => Some(15),
            MaskKind::Cep => Some(9),
            MaskKind::BirthDate => Some(10),
            MaskKind::Currency => None,
        }
    }

    /// Check if this dialect formats through the currency rule
    /// instead of a slot template.
    #[inline]
    pub const fn is_currency(self) -> bool {
        matches!(self, MaskKind::Currency)
    }
}

// =============================================================================
// Edit Result
// =============================================================================

/// Outcome of one edit: the canonical display string and the caret index.
///
/// Created on every edit event, consumed immediately by the host input,
/// never persisted. The caret is an offset in visible units (grapheme
/// clusters; plain chars for the ASCII strings masks produce).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResult {
    /// The formatted display string.
    pub formatted: String,
    /// Caret index into `formatted`, in visible units.
    pub caret: usize,
}

// =============================================================================
// Cleanup and Callbacks
// =============================================================================

/// Cleanup function returned when binding a field to a signal.
///
/// Call this to stop reconciliation and release resources.
pub type Cleanup = Box<dyn FnOnce()>;

/// Value change callback (Rc for shared ownership in closures).
///
/// Fired with the canonical formatted string after every edit.
pub type MaskChangeCallback = Rc<dyn Fn(&str)>;
