use log::debug;

use crate::support::units::{PhysicalQuantity, Unit, convert};

use super::{BoundedNumericValue, EditorError, EditorSnapshot, NumericEditor, Precision};

/// A numeric editor bound to a physical quantity and a display unit.
///
/// Values, bounds, and the step are all expressed in the current unit.
/// [`change_unit`](Self::change_unit) converts the value and bounds to a new
/// unit and switches to that unit's precision.
///
/// # Example
///
/// ```
/// use physics_editors::models::editor::UnitAwareEditor;
/// use physics_editors::support::units::{DistanceUnit, Unit};
///
/// let mut editor =
///     UnitAwareEditor::new(Unit::Distance(DistanceUnit::Meters), 1.5, 0.0, 10.0, 0.5).unwrap();
/// assert_eq!(editor.precision().max_fraction_digits_format, 3);
///
/// let change = editor.change_unit(Unit::Distance(DistanceUnit::Millimeters)).unwrap();
/// assert!((change.value - 1500.0).abs() < 1e-9);
/// assert_eq!(change.precision.max_fraction_digits_format, 0);
/// assert_eq!(editor.display_text(), "1500 mm");
/// ```
#[derive(Debug)]
pub struct UnitAwareEditor {
    numeric: NumericEditor,
    quantity: PhysicalQuantity,
    unit: Unit,
}

impl UnitAwareEditor {
    /// Creates an editor showing values in `unit`, with that unit's precision.
    ///
    /// # Errors
    ///
    /// See [`BoundedNumericValue::for_quantity`].
    pub fn new(
        unit: Unit,
        initial: f64,
        minimum: f64,
        maximum: f64,
        step: f64,
    ) -> Result<Self, EditorError> {
        let quantity = unit.quantity();
        let bounded = BoundedNumericValue::for_quantity(quantity, initial, minimum, maximum, step)?;
        let numeric = NumericEditor::new(bounded, Precision::for_unit(unit))
            .with_suffix(unit.abbreviation());
        Ok(Self {
            numeric,
            quantity,
            unit,
        })
    }

    /// Overrides the precision until the next unit change.
    #[must_use]
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.numeric.set_precision(precision);
        self
    }

    /// Returns the physical quantity this editor measures.
    #[must_use]
    pub fn quantity(&self) -> PhysicalQuantity {
        self.quantity
    }

    /// Returns the current display unit.
    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Returns the value in the current unit.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.numeric.value()
    }

    /// Returns the lower bound in the current unit.
    #[must_use]
    pub fn minimum(&self) -> f64 {
        self.numeric.minimum()
    }

    /// Returns the upper bound in the current unit.
    #[must_use]
    pub fn maximum(&self) -> f64 {
        self.numeric.maximum()
    }

    /// Returns the arrow-key increment, in the current unit.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.numeric.step()
    }

    #[must_use]
    pub fn precision(&self) -> Precision {
        self.numeric.precision()
    }

    /// Returns the value, bounds and precision as one snapshot.
    #[must_use]
    pub fn snapshot(&self) -> EditorSnapshot {
        self.numeric.snapshot()
    }

    #[must_use]
    pub fn bounded(&self) -> &BoundedNumericValue {
        self.numeric.bounded()
    }

    /// Installs the change listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl FnMut(&EditorSnapshot) + 'static) {
        self.numeric.set_listener(listener);
    }

    pub fn clear_listener(&mut self) {
        self.numeric.clear_listener();
    }

    /// Clamps and stores `value`, given in the current unit.
    ///
    /// # Errors
    ///
    /// See [`BoundedNumericValue::set_value`].
    pub fn set_value(&mut self, value: f64) -> Result<f64, EditorError> {
        self.numeric.set_value(value)
    }

    /// Replaces the bounds, given in the current unit.
    ///
    /// # Errors
    ///
    /// See [`BoundedNumericValue::set_range`].
    pub fn set_range(&mut self, minimum: f64, maximum: f64) -> Result<f64, EditorError> {
        self.numeric.set_range(minimum, maximum)
    }

    /// # Errors
    ///
    /// See [`BoundedNumericValue::set_step`].
    pub fn set_step(&mut self, step: f64) -> Result<(), EditorError> {
        self.numeric.set_step(step)
    }

    /// # Errors
    ///
    /// See [`BoundedNumericValue::increment`].
    pub fn increment(&mut self) -> Result<f64, EditorError> {
        self.numeric.increment()
    }

    /// # Errors
    ///
    /// See [`BoundedNumericValue::decrement`].
    pub fn decrement(&mut self) -> Result<f64, EditorError> {
        self.numeric.decrement()
    }

    /// Returns the value converted to the quantity's base unit.
    ///
    /// # Errors
    ///
    /// Fails only if the stored value cannot be converted, which a
    /// well-formed editor never produces.
    pub fn value_in_base(&self) -> Result<f64, EditorError> {
        self.to_base(self.value())
    }

    /// Stores a value given in the base unit.
    ///
    /// Returns the stored value in the current unit.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NonFiniteValue`] if `value` is `NaN` or infinite.
    pub fn set_value_in_base(&mut self, value: f64) -> Result<f64, EditorError> {
        let value = self.from_base(value)?;
        self.set_value(value)
    }

    /// Replaces the bounds with limits given in the base unit.
    ///
    /// # Errors
    ///
    /// See [`BoundedNumericValue::set_range`].
    pub fn set_range_in_base(&mut self, minimum: f64, maximum: f64) -> Result<f64, EditorError> {
        let minimum = self.from_base(minimum)?;
        let maximum = self.from_base(maximum)?;
        self.set_range(minimum, maximum)
    }

    /// Switches the display unit, converting the value and its bounds.
    ///
    /// The bounds are converted and applied before the value is re-clamped, so
    /// the value is never checked against limits in the old unit. The
    /// precision is then reset from the per-unit table.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnknownUnit`] if `unit` does not measure this
    /// editor's quantity. Nothing changes on error.
    pub fn change_unit(&mut self, unit: Unit) -> Result<EditorSnapshot, EditorError> {
        let from = self.unit;
        let old = self.snapshot();

        let minimum = convert(old.minimum, from, unit, self.quantity)?;
        let maximum = convert(old.maximum, from, unit, self.quantity)?;
        let value = convert(old.value, from, unit, self.quantity)?;

        let precision = Precision::for_unit(unit);
        let snapshot =
            self.numeric
                .replace(minimum, maximum, value, precision, unit.abbreviation())?;
        self.unit = unit;

        debug!(
            "{} editor changed from {from} to {unit}: {} in [{}, {}]",
            self.quantity, snapshot.value, snapshot.minimum, snapshot.maximum
        );
        Ok(snapshot)
    }

    /// Formats the value without its unit.
    #[must_use]
    pub fn format_value(&self) -> String {
        self.numeric.format_value()
    }

    /// Formats the value followed by the unit abbreviation.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.numeric.display_text()
    }

    /// Reads typed text in the current unit and stores the clamped value.
    ///
    /// # Errors
    ///
    /// See [`NumericEditor::parse_text`].
    pub fn parse_text(&mut self, text: &str) -> Result<f64, EditorError> {
        self.numeric.parse_text(text)
    }

    fn to_base(&self, value: f64) -> Result<f64, EditorError> {
        convert(value, self.unit, self.quantity.base_unit(), self.quantity).map_err(Into::into)
    }

    fn from_base(&self, value: f64) -> Result<f64, EditorError> {
        convert(value, self.quantity.base_unit(), self.unit, self.quantity).map_err(Into::into)
    }
}
