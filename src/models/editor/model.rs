//! [`twine_core::Model`] adapters for unit conversion and clamping.

use twine_core::Model;

use crate::support::{
    clamp::ClampPolicy,
    units::{PhysicalQuantity, Unit, UnitError, convert},
};

use super::{
    BoundedNumericValue,
    error::{EditorError, finite},
};

/// Converts values from one unit to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    from: Unit,
    to: Unit,
}

impl Conversion {
    /// Creates a conversion between two units of the same quantity.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::UnknownUnit`] if `to` measures a different
    /// quantity than `from`.
    pub fn new(from: Unit, to: Unit) -> Result<Self, UnitError> {
        let quantity = from.quantity();
        if to.quantity() != quantity {
            return Err(UnitError::UnknownUnit {
                quantity,
                unit: to.to_string(),
            });
        }
        Ok(Self { from, to })
    }

    #[must_use]
    pub fn quantity(&self) -> PhysicalQuantity {
        self.from.quantity()
    }
}

impl Model for Conversion {
    type Input = f64;
    type Output = f64;
    type Error = UnitError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        convert(*input, self.from, self.to, self.quantity())
    }
}

/// Clamps values into a fixed range, the way a [`BoundedNumericValue`] would.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamp {
    policy: ClampPolicy,
    minimum: f64,
    maximum: f64,
}

impl Clamp {
    /// Captures the current range and policy of `bounded`.
    #[must_use]
    pub fn from_bounded(bounded: &BoundedNumericValue) -> Self {
        Self {
            policy: bounded.policy(),
            minimum: bounded.minimum(),
            maximum: bounded.maximum(),
        }
    }
}

impl Model for Clamp {
    type Input = f64;
    type Output = f64;
    type Error = EditorError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let value = finite(*input)?;
        Ok(self.policy.apply(value, self.minimum, self.maximum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::units::{AngleUnit, DistanceUnit, PressureUnit};

    #[test]
    fn conversion_model() {
        let model = Conversion::new(
            Unit::Pressure(PressureUnit::Kilopascals),
            Unit::Pressure(PressureUnit::Pascals),
        )
        .unwrap();
        assert_relative_eq!(model.call(&101.325).unwrap(), 101_325.0, max_relative = 1e-12);
        assert_eq!(model.call(&f64::NAN), Err(UnitError::NonFiniteValue));
    }

    #[test]
    fn conversion_rejects_mixed_quantities() {
        assert!(
            Conversion::new(
                Unit::Distance(DistanceUnit::Feet),
                Unit::Angle(AngleUnit::Degrees)
            )
            .is_err()
        );
    }

    #[test]
    fn clamp_model_matches_bounded_value() {
        let mut dial =
            BoundedNumericValue::for_quantity(PhysicalQuantity::Angle, 0.0, -180.0, 180.0, 1.0)
                .unwrap();
        let model = Clamp::from_bounded(&dial);

        for x in [-540.0, -10.0, 200.0, 725.0] {
            assert_relative_eq!(model.call(&x).unwrap(), dial.set_value(x).unwrap());
        }
        assert_eq!(model.call(&f64::INFINITY), Err(EditorError::NonFiniteValue));
    }
}
