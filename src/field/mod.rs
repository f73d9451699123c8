//! Field Module - Masked-field state and host integration
//!
//! The long-lived side of the engine:
//!
//! - **Controller** - `MaskedField`, the entity owning a field's formatted
//!   string and caret; edit and external-set operations, keystroke helpers
//! - **Binding** - Signal-bound fields: controlled-value reconciliation
//!   through `spark-signals`, cleanup on unmount
//! - **View** - Display-column math for the host renderer (caret column,
//!   scroll window)

mod binding;
mod controller;
mod view;

pub use binding::{masked_field, MaskedFieldHandle, MaskedFieldProps};
pub use controller::MaskedField;
pub use view::{caret_column, ensure_caret_visible, visible_slice};
