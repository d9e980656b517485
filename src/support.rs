//! Supporting utilities used by the editor models.
//!
//! These modules are domain-neutral: they know about physical quantities and
//! numeric ranges, but nothing about editors, listeners, or formatting.

pub mod clamp;
pub mod constraint;
pub mod units;
