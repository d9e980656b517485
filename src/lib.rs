//! # Physics Editors
//!
//! Unit-aware numeric editor state for natural environment physics
//! parameters: distance, angle, temperature, pressure, humidity, and
//! acoustic frequency.
//!
//! The crate holds no widgets. It provides the values a text field or
//! spinner edits, with the rules those values follow: clamping to a range,
//! wrapping full-turn angles, converting between display units, and choosing
//! how many digits to show for each unit.
//!
//! ## Crate layout
//!
//! - [`models`]: Editor state objects and constructors.
//! - [`support`]: Units, clamping policies, and numeric constraints used by
//!   the models.
//!
//! ## Logging
//!
//! Unit changes and range replacements are logged at `debug` level and
//! clamping at `trace` level through the [`log`] facade. Installing a logger
//! is left to the application.

pub mod models;
pub mod support;
