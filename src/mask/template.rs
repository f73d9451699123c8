//! Mask templates - declarative slot lists per dialect.
//!
//! Each slot-based dialect is an ordered sequence of slots: fixed literal
//! characters interleaved with digit placeholders. The slot lists are the
//! single description of each dialect's shape; the applier walks them and
//! the capacity tables on [`MaskKind`] are derived from the same counts.
//!
//! Currency is not slot-based (see [`crate::mask::apply_currency`]) and
//! has an empty template.

use crate::types::MaskKind;

// =============================================================================
// Slot
// =============================================================================

/// One position in a mask template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A fixed character inserted between digit groups.
    Literal(char),
    /// Consumes one extracted digit.
    Digit,
}

use Slot::{Digit, Literal};

// =============================================================================
// Templates
// =============================================================================

/// `###.###.###-##`
const CPF: &[Slot] = &[
    Digit, Digit, Digit,
    Literal('.'),
    Digit, Digit, Digit,
    Literal('.'),
    Digit, Digit, Digit,
    Literal('-'),
    Digit, Digit,
];

/// `(##) #####-####`
const PHONE: &[Slot] = &[
    Literal('('),
    Digit, Digit,
    Literal(')'),
    Literal(' '),
    Digit, Digit, Digit, Digit, Digit,
    Literal('-'),
    Digit, Digit, Digit, Digit,
];

/// `#####-###`
const CEP: &[Slot] = &[
    Digit, Digit, Digit, Digit, Digit,
    Literal('-'),
    Digit, Digit, Digit,
];

/// `##/##/####`
const BIRTH_DATE: &[Slot] = &[
    Digit, Digit,
    Literal('/'),
    Digit, Digit,
    Literal('/'),
    Digit, Digit, Digit, Digit,
];

/// Get the slot template for a dialect.
///
/// Currency returns the empty template - it formats through the numeric
/// rule, not the slot walk.
pub fn template(kind: MaskKind) -> &'static [Slot] {
    match kind {
        MaskKind::Cpf => CPF,
        MaskKind::Phone => PHONE,
        MaskKind::Cep => CEP,
        MaskKind::BirthDate => BIRTH_DATE,
        MaskKind::Currency => &[],
    }
}
