use thiserror::Error;

use super::PhysicalQuantity;

/// Errors raised while converting between units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// The unit is not defined for the quantity being converted.
    ///
    /// This is a configuration error in the caller; there is no fallback unit.
    #[error("unknown {quantity} unit: {unit:?}")]
    UnknownUnit {
        quantity: PhysicalQuantity,
        unit: String,
    },

    /// The value to convert was `NaN` or infinite.
    #[error("value must be finite")]
    NonFiniteValue,
}
