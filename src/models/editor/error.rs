use thiserror::Error;

use crate::support::{
    constraint::{ConstraintError, Finite},
    units::{PhysicalQuantity, UnitError},
};

/// Errors reported by editor operations.
///
/// Every failure is local and deterministic; retrying with the same
/// arguments fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    /// The requested minimum exceeds the requested maximum.
    #[error("invalid range: minimum {minimum} exceeds maximum {maximum}")]
    InvalidRange { minimum: f64, maximum: f64 },

    /// An operand was `NaN` or infinite.
    #[error("value must be finite")]
    NonFiniteValue,

    /// The unit is not defined for the editor's quantity.
    #[error("unknown {quantity} unit: {unit:?}")]
    UnknownUnit {
        quantity: PhysicalQuantity,
        unit: String,
    },

    /// The step increment is not strictly positive.
    #[error("invalid step increment")]
    InvalidStep(#[source] ConstraintError),

    /// Text could not be read as a number.
    #[error("cannot parse {text:?} as a number")]
    Parse { text: String },
}

impl From<UnitError> for EditorError {
    fn from(err: UnitError) -> Self {
        match err {
            UnitError::UnknownUnit { quantity, unit } => Self::UnknownUnit { quantity, unit },
            UnitError::NonFiniteValue => Self::NonFiniteValue,
        }
    }
}

/// Rejects `NaN` and infinite operands.
pub(super) fn finite(value: f64) -> Result<f64, EditorError> {
    Finite::new(value)
        .map(|v| v.into_inner())
        .map_err(|_| EditorError::NonFiniteValue)
}
