use std::fmt;

use super::{BoundedNumericValue, EditorError, Precision};

/// The observable state of an editor after a mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorSnapshot {
    pub value: f64,
    pub minimum: f64,
    pub maximum: f64,
    pub precision: Precision,
}

/// A callback invoked synchronously after a mutation that changed the value,
/// the range, or the unit.
pub type Listener = Box<dyn FnMut(&EditorSnapshot)>;

/// A bounded numeric value with display precision and a change listener.
///
/// This is the state behind a plain numeric text field: arrow keys map to
/// [`increment`](Self::increment) and [`decrement`](Self::decrement), typed
/// text goes through [`parse_text`](Self::parse_text), and
/// [`display_text`](Self::display_text) renders the value back.
pub struct NumericEditor {
    bounded: BoundedNumericValue,
    precision: Precision,
    suffix: String,
    listener: Option<Listener>,
}

impl NumericEditor {
    /// Creates an editor with no unit suffix and no listener.
    #[must_use]
    pub fn new(bounded: BoundedNumericValue, precision: Precision) -> Self {
        Self {
            bounded,
            precision,
            suffix: String::new(),
            listener: None,
        }
    }

    /// Sets the measurement-unit text shown after the value.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Returns the stored value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.bounded.value()
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn minimum(&self) -> f64 {
        self.bounded.minimum()
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn maximum(&self) -> f64 {
        self.bounded.maximum()
    }

    /// Returns the arrow-key increment.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.bounded.step()
    }

    /// Returns the display precision.
    #[must_use]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Returns the unit text shown after the value.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Returns the underlying bounded value.
    #[must_use]
    pub fn bounded(&self) -> &BoundedNumericValue {
        &self.bounded
    }

    /// Returns the value, bounds and precision as one snapshot.
    #[must_use]
    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            value: self.bounded.value(),
            minimum: self.bounded.minimum(),
            maximum: self.bounded.maximum(),
            precision: self.precision,
        }
    }

    /// Replaces the display precision. The listener is not called.
    pub fn set_precision(&mut self, precision: Precision) {
        self.precision = precision;
    }

    /// Installs the change listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl FnMut(&EditorSnapshot) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Clamps and stores `value`, returning what was stored.
    ///
    /// The listener is called only if the stored value changed.
    ///
    /// # Errors
    ///
    /// See [`BoundedNumericValue::set_value`].
    pub fn set_value(&mut self, value: f64) -> Result<f64, EditorError> {
        let before = self.snapshot();
        let stored = self.bounded.set_value(value)?;
        self.notify_if_changed(&before);
        Ok(stored)
    }

    /// Replaces the bounds and re-clamps the stored value.
    ///
    /// # Errors
    ///
    /// See [`BoundedNumericValue::set_range`].
    pub fn set_range(&mut self, minimum: f64, maximum: f64) -> Result<f64, EditorError> {
        let before = self.snapshot();
        let stored = self.bounded.set_range(minimum, maximum)?;
        self.notify_if_changed(&before);
        Ok(stored)
    }

    /// # Errors
    ///
    /// See [`BoundedNumericValue::set_step`].
    pub fn set_step(&mut self, step: f64) -> Result<(), EditorError> {
        self.bounded.set_step(step)
    }

    /// # Errors
    ///
    /// See [`BoundedNumericValue::increment`].
    pub fn increment(&mut self) -> Result<f64, EditorError> {
        let before = self.snapshot();
        let stored = self.bounded.increment()?;
        self.notify_if_changed(&before);
        Ok(stored)
    }

    /// # Errors
    ///
    /// See [`BoundedNumericValue::decrement`].
    pub fn decrement(&mut self) -> Result<f64, EditorError> {
        let before = self.snapshot();
        let stored = self.bounded.decrement()?;
        self.notify_if_changed(&before);
        Ok(stored)
    }

    /// Formats the value without its unit.
    #[must_use]
    pub fn format_value(&self) -> String {
        self.precision.format(self.bounded.value())
    }

    /// Formats the value followed by its unit.
    #[must_use]
    pub fn display_text(&self) -> String {
        let number = self.format_value();
        match self.suffix.as_str() {
            "" => number,
            "°" | "%" => format!("{number}{}", self.suffix),
            suffix => format!("{number} {suffix}"),
        }
    }

    /// Reads typed text and stores the clamped value.
    ///
    /// # Errors
    ///
    /// See [`Precision::parse`] and [`BoundedNumericValue::set_value`].
    /// On error the stored value is unchanged.
    pub fn parse_text(&mut self, text: &str) -> Result<f64, EditorError> {
        let value = self.precision.parse(text, &self.suffix)?;
        self.set_value(value)
    }

    pub(super) fn replace(
        &mut self,
        minimum: f64,
        maximum: f64,
        value: f64,
        precision: Precision,
        suffix: &str,
    ) -> Result<EditorSnapshot, EditorError> {
        let before = self.snapshot();
        let unit_changed = suffix != self.suffix;
        self.bounded.set_range_and_value(minimum, maximum, value)?;
        self.precision = precision;
        suffix.clone_into(&mut self.suffix);
        if unit_changed {
            self.notify();
        } else {
            self.notify_if_changed(&before);
        }
        Ok(self.snapshot())
    }

    fn notify_if_changed(&mut self, before: &EditorSnapshot) {
        let after = self.snapshot();
        if after.value != before.value
            || after.minimum != before.minimum
            || after.maximum != before.maximum
        {
            self.notify();
        }
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        if let Some(listener) = self.listener.as_mut() {
            listener(&snapshot);
        }
    }
}

impl fmt::Debug for NumericEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericEditor")
            .field("bounded", &self.bounded)
            .field("precision", &self.precision)
            .field("suffix", &self.suffix)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
