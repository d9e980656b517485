use log::trace;

use crate::support::{
    clamp::ClampPolicy, constraint::StrictlyPositive, units::PhysicalQuantity,
};

use super::error::{EditorError, finite};

/// A numeric value held inside an inclusive range.
///
/// Every mutation re-applies the clamping policy, so `minimum ≤ value ≤ maximum`
/// holds after each call. The one exception is an angular value whose range
/// spans a full turn: it is unwrapped into `[minimum, maximum)` instead.
///
/// # Example
///
/// ```
/// use physics_editors::models::editor::BoundedNumericValue;
///
/// let mut gain = BoundedNumericValue::new(0.0, -12.0, 12.0, 0.5).unwrap();
/// assert_eq!(gain.set_value(20.0).unwrap(), 12.0);
/// assert_eq!(gain.decrement().unwrap(), 11.5);
/// assert!(gain.set_range(3.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedNumericValue {
    value: f64,
    minimum: f64,
    maximum: f64,
    step: f64,
    quantity: Option<PhysicalQuantity>,
}

impl BoundedNumericValue {
    /// Creates a dimensionless bounded value.
    ///
    /// The initial value is clamped into range.
    ///
    /// # Errors
    ///
    /// - [`EditorError::NonFiniteValue`] if any operand is `NaN` or infinite.
    /// - [`EditorError::InvalidRange`] if `minimum > maximum`.
    /// - [`EditorError::InvalidStep`] if `step` is not strictly positive.
    pub fn new(initial: f64, minimum: f64, maximum: f64, step: f64) -> Result<Self, EditorError> {
        Self::build(None, initial, minimum, maximum, step)
    }

    /// Creates a bounded value of a physical quantity.
    ///
    /// Angular values get periodic unwrapping whenever their range spans a
    /// full turn.
    ///
    /// # Errors
    ///
    /// Same as [`BoundedNumericValue::new`].
    pub fn for_quantity(
        quantity: PhysicalQuantity,
        initial: f64,
        minimum: f64,
        maximum: f64,
        step: f64,
    ) -> Result<Self, EditorError> {
        Self::build(Some(quantity), initial, minimum, maximum, step)
    }

    fn build(
        quantity: Option<PhysicalQuantity>,
        initial: f64,
        minimum: f64,
        maximum: f64,
        step: f64,
    ) -> Result<Self, EditorError> {
        let (minimum, maximum) = validate_range(minimum, maximum)?;
        let mut bounded = Self {
            value: minimum,
            minimum,
            maximum,
            step: validate_step(step)?,
            quantity,
        };
        bounded.set_value(initial)?;
        Ok(bounded)
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Returns the inclusive upper bound.
    #[must_use]
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Returns the amount added or removed by one increment or decrement.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the quantity, if this value has one.
    #[must_use]
    pub fn quantity(&self) -> Option<PhysicalQuantity> {
        self.quantity
    }

    /// Returns the policy that the next clamp will use.
    #[must_use]
    pub fn policy(&self) -> ClampPolicy {
        self.quantity.map_or(ClampPolicy::Standard, |q| {
            ClampPolicy::select(q, self.minimum, self.maximum)
        })
    }

    /// Returns `value` as it would be stored, without storing it.
    #[must_use]
    pub fn clamped(&self, value: f64) -> f64 {
        self.policy().apply(value, self.minimum, self.maximum)
    }

    /// Clamps and stores `value`, returning what was stored.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NonFiniteValue`] if `value` is `NaN` or infinite.
    pub fn set_value(&mut self, value: f64) -> Result<f64, EditorError> {
        let value = finite(value)?;
        let clamped = self.clamped(value);
        if clamped != value {
            trace!(
                "{value} brought into [{}, {}] as {clamped} ({:?})",
                self.minimum,
                self.maximum,
                self.policy()
            );
        }
        self.value = clamped;
        Ok(clamped)
    }

    /// Replaces the bounds and re-clamps the stored value under them.
    ///
    /// # Errors
    ///
    /// - [`EditorError::NonFiniteValue`] if either bound is `NaN` or infinite.
    /// - [`EditorError::InvalidRange`] if `minimum > maximum`; nothing changes.
    pub fn set_range(&mut self, minimum: f64, maximum: f64) -> Result<f64, EditorError> {
        let value = self.value;
        self.set_range_and_value(minimum, maximum, value)
    }

    /// Replaces the bounds, then clamps and stores `value` under them.
    ///
    /// Bounds are applied first so the value is never checked against stale
    /// limits.
    ///
    /// # Errors
    ///
    /// Same as [`BoundedNumericValue::set_range`], plus
    /// [`EditorError::NonFiniteValue`] for `value`. On error nothing changes.
    pub fn set_range_and_value(
        &mut self,
        minimum: f64,
        maximum: f64,
        value: f64,
    ) -> Result<f64, EditorError> {
        let (minimum, maximum) = validate_range(minimum, maximum)?;
        let value = finite(value)?;
        self.minimum = minimum;
        self.maximum = maximum;
        self.set_value(value)
    }

    /// Replaces the step increment.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidStep`] if `step` is not strictly positive.
    pub fn set_step(&mut self, step: f64) -> Result<(), EditorError> {
        self.step = validate_step(step)?;
        Ok(())
    }

    /// Adds one step and stores the clamped result.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NonFiniteValue`] if the sum overflows.
    pub fn increment(&mut self) -> Result<f64, EditorError> {
        self.set_value(self.value + self.step)
    }

    /// Subtracts one step and stores the clamped result.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NonFiniteValue`] if the difference overflows.
    pub fn decrement(&mut self) -> Result<f64, EditorError> {
        self.set_value(self.value - self.step)
    }
}

fn validate_range(minimum: f64, maximum: f64) -> Result<(f64, f64), EditorError> {
    let (minimum, maximum) = (finite(minimum)?, finite(maximum)?);
    if minimum > maximum {
        return Err(EditorError::InvalidRange { minimum, maximum });
    }
    Ok((minimum, maximum))
}

fn validate_step(step: f64) -> Result<f64, EditorError> {
    let step = finite(step)?;
    StrictlyPositive::new(step)
        .map(|s| s.into_inner())
        .map_err(EditorError::InvalidStep)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintError;

    fn percent() -> BoundedNumericValue {
        BoundedNumericValue::new(50.0, 0.0, 100.0, 10.0).unwrap()
    }

    fn dial(minimum: f64, maximum: f64) -> BoundedNumericValue {
        BoundedNumericValue::for_quantity(PhysicalQuantity::Angle, minimum, minimum, maximum, 0.1)
            .unwrap()
    }

    #[test]
    fn standard_clamp_boundaries() {
        let mut v = percent();
        assert_relative_eq!(v.set_value(150.0).unwrap(), 100.0);
        assert_relative_eq!(v.set_value(-5.0).unwrap(), 0.0);
        assert_relative_eq!(v.set_value(50.0).unwrap(), 50.0);
        assert_relative_eq!(v.value(), 50.0);
    }

    #[test]
    fn clamp_is_idempotent() {
        let mut flat = percent();
        let mut turn = dial(0.0, 360.0);
        for x in [-1e4, -5.0, 0.0, 42.0, 100.0, 359.99, 360.0, 1e4] {
            let once = flat.set_value(x).unwrap();
            assert_relative_eq!(flat.set_value(once).unwrap(), once);

            let once = turn.set_value(x).unwrap();
            assert_relative_eq!(turn.set_value(once).unwrap(), once);
        }
    }

    #[test]
    fn initial_value_is_clamped() {
        let v = BoundedNumericValue::new(8.0, 0.0, 0.15, 0.005).unwrap();
        assert_relative_eq!(v.value(), 0.15);
    }

    #[test]
    fn periodic_unwrap() {
        let mut v = dial(0.0, 360.0);
        assert_eq!(v.policy(), ClampPolicy::PeriodicUnwrap);
        assert_relative_eq!(v.set_value(370.0).unwrap(), 10.0);

        let mut v = dial(-180.0, 180.0);
        assert_relative_eq!(v.set_value(200.0).unwrap(), -160.0);
    }

    #[test]
    fn narrow_angular_range_is_clamped() {
        let mut v = dial(10.0, 20.0);
        assert_eq!(v.policy(), ClampPolicy::Standard);
        assert_relative_eq!(v.set_value(400.0).unwrap(), 20.0);
    }

    #[test]
    fn policy_follows_range_width() {
        let mut v = dial(0.0, 360.0);
        v.set_range(0.0, 90.0).unwrap();
        assert_eq!(v.policy(), ClampPolicy::Standard);
        v.set_range(-180.0, 180.0).unwrap();
        assert_eq!(v.policy(), ClampPolicy::PeriodicUnwrap);
    }

    #[test]
    fn dimensionless_wide_range_never_unwraps() {
        let mut v = BoundedNumericValue::new(0.0, 0.0, 720.0, 1.0).unwrap();
        assert_relative_eq!(v.set_value(800.0).unwrap(), 720.0);
    }

    #[test]
    fn set_range_reclamps_stored_value() {
        let mut v = percent();
        assert_relative_eq!(v.set_range(60.0, 80.0).unwrap(), 60.0);
        assert_relative_eq!(v.minimum(), 60.0);
        assert_relative_eq!(v.maximum(), 80.0);
    }

    #[test]
    fn inverted_range_changes_nothing() {
        let mut v = percent();
        assert_eq!(
            v.set_range(10.0, 5.0),
            Err(EditorError::InvalidRange {
                minimum: 10.0,
                maximum: 5.0
            })
        );
        assert_eq!(v, percent());
    }

    #[test]
    fn non_finite_operands() {
        let mut v = percent();
        assert_eq!(v.set_value(f64::NAN), Err(EditorError::NonFiniteValue));
        assert_eq!(
            v.set_range(f64::NEG_INFINITY, 1.0),
            Err(EditorError::NonFiniteValue)
        );
        assert_eq!(
            BoundedNumericValue::new(f64::NAN, 0.0, 1.0, 0.1),
            Err(EditorError::NonFiniteValue)
        );
        assert_relative_eq!(v.value(), 50.0);
    }

    #[test]
    fn step_must_be_positive() {
        assert_eq!(
            BoundedNumericValue::new(0.0, 0.0, 1.0, 0.0),
            Err(EditorError::InvalidStep(ConstraintError::Zero))
        );
        let mut v = percent();
        assert_eq!(
            v.set_step(-1.0),
            Err(EditorError::InvalidStep(ConstraintError::Negative))
        );
        assert_relative_eq!(v.step(), 10.0);
    }

    #[test]
    fn increment_and_decrement() {
        let mut v = percent();
        assert_relative_eq!(v.increment().unwrap(), 60.0);
        v.set_value(95.0).unwrap();
        assert_relative_eq!(v.increment().unwrap(), 100.0);
        v.set_value(3.0).unwrap();
        assert_relative_eq!(v.decrement().unwrap(), 0.0);
    }

    #[test]
    fn increment_wraps_full_turn() {
        let mut v =
            BoundedNumericValue::for_quantity(PhysicalQuantity::Angle, 359.0, 0.0, 360.0, 2.0)
                .unwrap();
        assert_relative_eq!(v.increment().unwrap(), 1.0);
        assert_relative_eq!(v.decrement().unwrap(), 359.0);
    }
}
