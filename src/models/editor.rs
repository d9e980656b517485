//! Numeric editor state.
//!
//! Editors are plain value objects. The widget that shows one holds it by
//! composition, forwards keystrokes and arrow keys to it, and renders what it
//! returns:
//!
//! - [`BoundedNumericValue`]: value, inclusive range, and step, with the
//!   clamping policy applied on every mutation.
//! - [`NumericEditor`]: adds display [`Precision`], text formatting and
//!   parsing, and a synchronous change listener.
//! - [`UnitAwareEditor`]: adds a physical quantity and display unit, with
//!   [`UnitAwareEditor::change_unit`] converting value and bounds together.
//!
//! The [`Conversion`] and [`Clamp`] types adapt the core operations to
//! [`twine_core::Model`] so they compose with other Twine models.

mod bounded;
mod error;
mod model;
mod numeric;
mod precision;
mod unit_aware;

pub use bounded::BoundedNumericValue;
pub use error::EditorError;
pub use model::{Clamp, Conversion};
pub use numeric::{EditorSnapshot, Listener, NumericEditor};
pub use precision::{Precision, round_to_digits};
pub use unit_aware::UnitAwareEditor;
