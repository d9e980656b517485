//! Editors for acoustic analysis settings.
//!
//! Covers the frequency editor, whose resolution depends on magnitude, and
//! the smaller dimensionless controls: SPL range, dithering amount,
//! bandwidth, and delay.

use crate::support::units::{FrequencyUnit, PhysicalQuantity, Unit, convert};

use super::editor::{
    BoundedNumericValue, EditorError, EditorSnapshot, NumericEditor, Precision, UnitAwareEditor,
    round_to_digits,
};

/// Arrow-key step for frequency editors, in hertz.
pub const FREQUENCY_STEP_HZ: f64 = 0.1;

/// Frequencies at or above this are shown in whole hertz.
pub const WHOLE_HERTZ_THRESHOLD: f64 = 100.0;

/// Default SPL display range, in decibels.
pub const SPL_RANGE_DB_DEFAULT: f64 = 42.0;

/// Default dithering amount, in percent.
pub const DITHERING_PERCENT_DEFAULT: f64 = 8.0;

/// Returns the displayed resolution at `hertz`, in hertz.
#[must_use]
pub fn frequency_resolution(hertz: f64) -> f64 {
    if hertz >= WHOLE_HERTZ_THRESHOLD { 1.0 } else { 0.1 }
}

/// Rounds a frequency in hertz to its displayed resolution.
///
/// ```
/// use physics_editors::models::acoustics::adjust_frequency_precision;
///
/// assert_eq!(adjust_frequency_precision(1234.56), 1235.0);
/// assert_eq!(adjust_frequency_precision(31.56), 31.6);
/// ```
#[must_use]
pub fn adjust_frequency_precision(hertz: f64) -> f64 {
    if hertz >= WHOLE_HERTZ_THRESHOLD {
        hertz.round()
    } else {
        round_to_digits(hertz, 1)
    }
}

/// Frequency editor settings, in hertz.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyEditorConfig {
    pub minimum_hz: f64,
    pub maximum_hz: f64,
    pub initial_hz: f64,
}

impl Default for FrequencyEditorConfig {
    fn default() -> Self {
        Self {
            minimum_hz: 20.0,
            maximum_hz: 20_000.0,
            initial_hz: 1_000.0,
        }
    }
}

/// A frequency editor that snaps values to their displayed resolution.
///
/// Values are adjusted in hertz before clamping, whatever the display unit.
#[derive(Debug)]
pub struct FrequencyEditor {
    editor: UnitAwareEditor,
}

impl FrequencyEditor {
    /// Creates a frequency editor in hertz, snapping the initial value.
    ///
    /// # Errors
    ///
    /// Returns an [`EditorError`] if the limits are invalid.
    pub fn new(config: &FrequencyEditorConfig) -> Result<Self, EditorError> {
        let editor = UnitAwareEditor::new(
            Unit::Frequency(FrequencyUnit::Hertz),
            adjust_frequency_precision(config.initial_hz),
            config.minimum_hz,
            config.maximum_hz,
            FREQUENCY_STEP_HZ,
        )?;
        Ok(Self { editor })
    }

    /// Returns the underlying unit-aware editor.
    #[must_use]
    pub fn editor(&self) -> &UnitAwareEditor {
        &self.editor
    }

    /// Installs the change listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl FnMut(&EditorSnapshot) + 'static) {
        self.editor.set_listener(listener);
    }

    pub fn clear_listener(&mut self) {
        self.editor.clear_listener();
    }

    /// Returns the frequency in hertz, whatever the display unit.
    ///
    /// # Errors
    ///
    /// See [`UnitAwareEditor::value_in_base`].
    pub fn hertz(&self) -> Result<f64, EditorError> {
        self.editor.value_in_base()
    }

    /// Stores a frequency in hertz after snapping it to its resolution.
    ///
    /// Returns the stored value in hertz.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NonFiniteValue`] if `hertz` is `NaN` or infinite.
    pub fn set_hertz(&mut self, hertz: f64) -> Result<f64, EditorError> {
        self.editor
            .set_value_in_base(adjust_frequency_precision(hertz))?;
        self.editor.value_in_base()
    }

    /// Replaces the limits, given in hertz.
    ///
    /// # Errors
    ///
    /// See [`UnitAwareEditor::set_range_in_base`].
    pub fn set_range_hz(&mut self, minimum_hz: f64, maximum_hz: f64) -> Result<f64, EditorError> {
        self.editor.set_range_in_base(minimum_hz, maximum_hz)?;
        self.editor.value_in_base()
    }

    /// Steps up by the arrow-key increment and snaps the result.
    ///
    /// At or above [`WHOLE_HERTZ_THRESHOLD`] a step smaller than a whole
    /// hertz would snap back to where it started, so the value moves by one
    /// hertz instead. Returns the stored value in hertz.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NonFiniteValue`] if the sum overflows.
    pub fn increment(&mut self) -> Result<f64, EditorError> {
        self.step_by(self.editor.step())
    }

    /// Steps down by the arrow-key increment and snaps the result.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NonFiniteValue`] if the difference overflows.
    pub fn decrement(&mut self) -> Result<f64, EditorError> {
        self.step_by(-self.editor.step())
    }

    /// Reads typed text in the display unit and stores the snapped value.
    ///
    /// Returns the stored value in the display unit.
    ///
    /// # Errors
    ///
    /// See [`NumericEditor::parse_text`]. On error the stored value is
    /// unchanged.
    pub fn parse_text(&mut self, text: &str) -> Result<f64, EditorError> {
        let typed = self.editor.precision().parse(text, self.editor.unit().abbreviation())?;
        let hertz = self.to_hertz(typed)?;
        self.editor
            .set_value_in_base(adjust_frequency_precision(hertz))
    }

    /// # Errors
    ///
    /// See [`UnitAwareEditor::change_unit`].
    pub fn change_unit(&mut self, unit: FrequencyUnit) -> Result<EditorSnapshot, EditorError> {
        self.editor.change_unit(Unit::Frequency(unit))
    }

    #[must_use]
    pub fn display_text(&self) -> String {
        self.editor.display_text()
    }

    fn step_by(&mut self, delta: f64) -> Result<f64, EditorError> {
        let current = self.hertz()?;
        let target = self.to_hertz(self.editor.value() + delta)?;
        let mut snapped = adjust_frequency_precision(target);
        if snapped == current {
            let nudge = frequency_resolution(current).copysign(delta);
            snapped = adjust_frequency_precision(current + nudge);
        }
        self.set_hertz(snapped)
    }

    fn to_hertz(&self, value: f64) -> Result<f64, EditorError> {
        convert(
            value,
            self.editor.unit(),
            Unit::Frequency(FrequencyUnit::Hertz),
            PhysicalQuantity::Frequency,
        )
        .map_err(Into::into)
    }
}

/// Builds the SPL range spinner, in whole decibels with 3 dB steps.
///
/// The extended range reaches down to 3 dB and up to 120 dB for detailed
/// inspection; the standard range is 42 to 72 dB.
///
/// # Errors
///
/// Never fails for the built-in limits; the `Result` mirrors the other
/// constructors.
pub fn spl_range_spinner(extended: bool) -> Result<NumericEditor, EditorError> {
    let (minimum, maximum) = if extended { (3.0, 120.0) } else { (42.0, 72.0) };
    let bounded = BoundedNumericValue::new(SPL_RANGE_DB_DEFAULT, minimum, maximum, 3.0)?;
    Ok(NumericEditor::new(bounded, Precision::new(0, 0, 0, 0)).with_suffix("dB"))
}

/// Builds the dithering amount spinner, in percent.
///
/// # Errors
///
/// Never fails for the built-in limits.
pub fn dithering_amount_spinner() -> Result<NumericEditor, EditorError> {
    let bounded = BoundedNumericValue::new(DITHERING_PERCENT_DEFAULT, 0.0, 15.0, 0.5)?;
    Ok(NumericEditor::new(bounded, Precision::new(0, 1, 0, 1)).with_suffix("%"))
}

/// Builds a relative bandwidth editor.
///
/// # Errors
///
/// Returns an [`EditorError`] if the limits are invalid.
pub fn bandwidth_editor(
    minimum: f64,
    maximum: f64,
    initial: f64,
) -> Result<NumericEditor, EditorError> {
    let bounded = BoundedNumericValue::new(initial, minimum, maximum, 0.01)?;
    Ok(NumericEditor::new(bounded, Precision::new(0, 2, 0, 4)))
}

/// Builds a delay editor, in milliseconds.
///
/// # Errors
///
/// Returns an [`EditorError`] if the limits are invalid.
pub fn delay_editor(minimum: f64, maximum: f64, initial: f64) -> Result<NumericEditor, EditorError> {
    let bounded = BoundedNumericValue::new(initial, minimum, maximum, 0.1)?;
    Ok(NumericEditor::new(bounded, Precision::new(0, 2, 0, 4)).with_suffix("ms"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{cell::RefCell, rc::Rc};

    use approx::assert_relative_eq;

    #[test]
    fn frequency_resolution_depends_on_magnitude() {
        assert_relative_eq!(adjust_frequency_precision(99.94), 99.9);
        assert_relative_eq!(adjust_frequency_precision(99.96), 100.0);
        assert_relative_eq!(adjust_frequency_precision(100.4), 100.0);
        assert_relative_eq!(adjust_frequency_precision(16_000.5), 16_001.0);
    }

    #[test]
    fn frequency_editor_snaps_and_clamps() {
        let mut editor = FrequencyEditor::new(&FrequencyEditorConfig::default()).unwrap();
        assert_relative_eq!(editor.hertz().unwrap(), 1_000.0);
        assert_relative_eq!(editor.set_hertz(440.4).unwrap(), 440.0);
        assert_relative_eq!(editor.set_hertz(63.27).unwrap(), 63.3);
        assert_relative_eq!(editor.set_hertz(50_000.0).unwrap(), 20_000.0);
        assert_relative_eq!(editor.set_hertz(1.0).unwrap(), 20.0);
        assert!(editor.set_hertz(f64::NAN).is_err());
    }

    #[test]
    fn frequency_text_in_kilohertz() {
        let mut editor = FrequencyEditor::new(&FrequencyEditorConfig::default()).unwrap();
        editor.change_unit(FrequencyUnit::Kilohertz).unwrap();
        assert_eq!(editor.display_text(), "1 kHz");

        editor.parse_text("2.0004 kHz").unwrap();
        assert_relative_eq!(editor.hertz().unwrap(), 2_000.0, max_relative = 1e-12);
        assert_eq!(editor.display_text(), "2 kHz");
    }

    #[test]
    fn arrow_keys_snap_to_resolution() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut editor = FrequencyEditor::new(&FrequencyEditorConfig::default()).unwrap();
        editor.set_hertz(99.9).unwrap();
        let sink = Rc::clone(&seen);
        editor.set_listener(move |s| sink.borrow_mut().push(s.value));

        assert_relative_eq!(editor.increment().unwrap(), 100.0);
        assert_relative_eq!(editor.increment().unwrap(), 101.0);
        assert_relative_eq!(editor.decrement().unwrap(), 100.0);
        assert_relative_eq!(editor.decrement().unwrap(), 99.9);
        assert_relative_eq!(editor.decrement().unwrap(), 99.8);
        assert_eq!(seen.borrow().len(), 5);

        editor.set_hertz(20.0).unwrap();
        assert_relative_eq!(editor.decrement().unwrap(), 20.0);
    }

    #[test]
    fn range_in_hertz_reclamps() {
        let mut editor = FrequencyEditor::new(&FrequencyEditorConfig::default()).unwrap();
        assert_relative_eq!(editor.set_range_hz(20.0, 500.0).unwrap(), 500.0);
        editor.change_unit(FrequencyUnit::Kilohertz).unwrap();
        assert_relative_eq!(editor.set_range_hz(20.0, 400.0).unwrap(), 400.0, max_relative = 1e-12);
        assert_relative_eq!(editor.editor().maximum(), 0.4, max_relative = 1e-12);
    }

    #[test]
    fn typed_text_is_snapped_before_it_is_stored() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut editor = FrequencyEditor::new(&FrequencyEditorConfig::default()).unwrap();
        let sink = Rc::clone(&seen);
        editor.set_listener(move |s| sink.borrow_mut().push(s.value));

        assert_relative_eq!(editor.parse_text("440.4 Hz").unwrap(), 440.0);
        assert!(editor.parse_text("loud").is_err());

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_relative_eq!(seen[0], 440.0);
    }

    #[test]
    fn spl_range_spinner_limits() {
        let mut standard = spl_range_spinner(false).unwrap();
        assert_relative_eq!(standard.value(), 42.0);
        assert_relative_eq!(standard.decrement().unwrap(), 42.0);
        for _ in 0..20 {
            standard.increment().unwrap();
        }
        assert_relative_eq!(standard.value(), 72.0);
        assert_eq!(standard.display_text(), "72 dB");

        let mut extended = spl_range_spinner(true).unwrap();
        assert_relative_eq!(extended.set_value(0.0).unwrap(), 3.0);
        assert_relative_eq!(extended.set_value(200.0).unwrap(), 120.0);
    }

    #[test]
    fn dithering_default_fits_range() {
        let mut spinner = dithering_amount_spinner().unwrap();
        assert_relative_eq!(spinner.value(), 8.0);
        assert_eq!(spinner.display_text(), "8%");
        assert_relative_eq!(spinner.increment().unwrap(), 8.5);
    }

    #[test]
    fn bandwidth_and_delay_keep_initial_value() {
        let bandwidth = bandwidth_editor(0.0, 2.0, 0.33).unwrap();
        assert_relative_eq!(bandwidth.value(), 0.33);
        assert_relative_eq!(bandwidth.step(), 0.01);

        let mut delay = delay_editor(0.0, 100.0, 12.5).unwrap();
        assert_eq!(delay.display_text(), "12.5 ms");
        assert_relative_eq!(delay.parse_text("120 ms").unwrap(), 100.0);
    }
}
