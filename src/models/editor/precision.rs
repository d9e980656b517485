use crate::support::units::{
    AngleUnit, DistanceUnit, FrequencyUnit, HumidityUnit, PressureUnit, TemperatureUnit, Unit,
};

use super::error::{EditorError, finite};

/// Fraction-digit limits for displaying and reading a value.
///
/// Formatting rounds to `max_fraction_digits_format` and then drops trailing
/// zeros, keeping at least `min_fraction_digits_format` digits. Parsing rounds
/// to `max_fraction_digits_parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    pub min_fraction_digits_format: u8,
    pub max_fraction_digits_format: u8,
    pub min_fraction_digits_parse: u8,
    pub max_fraction_digits_parse: u8,
}

impl Default for Precision {
    fn default() -> Self {
        Self::new(0, 2, 0, 4)
    }
}

impl Precision {
    /// Creates a precision from format and parse digit limits.
    #[must_use]
    pub const fn new(
        min_fraction_digits_format: u8,
        max_fraction_digits_format: u8,
        min_fraction_digits_parse: u8,
        max_fraction_digits_parse: u8,
    ) -> Self {
        Self {
            min_fraction_digits_format,
            max_fraction_digits_format,
            min_fraction_digits_parse,
            max_fraction_digits_parse,
        }
    }

    /// Returns the precision used for values shown in `unit`.
    ///
    /// The table is fixed: each unit gets the resolution that suits its scale
    /// (whole millimeters, but thousandths of a meter).
    #[must_use]
    pub fn for_unit(unit: Unit) -> Self {
        match unit {
            Unit::Distance(u) => {
                let digits = match u {
                    DistanceUnit::Meters | DistanceUnit::Yards => 3,
                    DistanceUnit::Feet | DistanceUnit::Unitless => 2,
                    DistanceUnit::Centimeters | DistanceUnit::Inches => 1,
                    DistanceUnit::Millimeters => 0,
                };
                Self::new(0, digits, 0, 10)
            }
            Unit::Angle(AngleUnit::Degrees) => Self::new(0, 2, 0, 10),
            Unit::Angle(AngleUnit::Radians) => Self::new(0, 4, 0, 10),
            Unit::Temperature(TemperatureUnit::Kelvin | TemperatureUnit::Celsius) => {
                Self::new(0, 2, 0, 4)
            }
            Unit::Temperature(TemperatureUnit::Fahrenheit) => Self::new(0, 1, 0, 4),
            Unit::Pressure(PressureUnit::Pascals) => Self::new(0, 0, 0, 4),
            Unit::Pressure(PressureUnit::Kilopascals) => Self::new(0, 3, 0, 6),
            Unit::Pressure(PressureUnit::Millibars) => Self::new(0, 1, 0, 4),
            Unit::Pressure(PressureUnit::Atmospheres) => Self::new(0, 5, 0, 8),
            Unit::Humidity(HumidityUnit::Percent) => Self::new(0, 2, 0, 4),
            Unit::Humidity(HumidityUnit::Fraction) => Self::new(0, 4, 0, 6),
            Unit::Frequency(FrequencyUnit::Hertz) => Self::new(0, 1, 0, 4),
            Unit::Frequency(FrequencyUnit::Kilohertz) => Self::new(0, 4, 0, 7),
        }
    }

    /// Formats `value` for display.
    ///
    /// ```
    /// use physics_editors::models::editor::Precision;
    ///
    /// let p = Precision::new(1, 3, 0, 10);
    /// assert_eq!(p.format(2.0), "2.0");
    /// assert_eq!(p.format(2.12345), "2.123");
    /// assert_eq!(p.format(-0.0001), "0.0");
    /// ```
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        let max = usize::from(self.max_fraction_digits_format);
        let min = usize::from(self.min_fraction_digits_format.min(self.max_fraction_digits_format));

        let mut text = format!("{value:.max$}");
        if let Some(dot) = text.find('.') {
            let keep = dot + 1 + min;
            while text.len() > keep && text.ends_with('0') {
                text.pop();
            }
            if text.ends_with('.') {
                text.pop();
            }
        }

        // Rounding can leave a signed zero such as "-0.00".
        if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
            text.remove(0);
        }
        text
    }

    /// Reads a number from `text`, ignoring an optional trailing `suffix`.
    ///
    /// The result is rounded to `max_fraction_digits_parse` digits.
    ///
    /// # Errors
    ///
    /// - [`EditorError::Parse`] if the text is not a number.
    /// - [`EditorError::NonFiniteValue`] if it names `NaN` or infinity.
    pub fn parse(&self, text: &str, suffix: &str) -> Result<f64, EditorError> {
        let trimmed = text.trim();
        let number = if suffix.is_empty() {
            trimmed
        } else {
            trimmed.strip_suffix(suffix).unwrap_or(trimmed).trim_end()
        };

        let value: f64 = number.parse().map_err(|_| EditorError::Parse {
            text: text.to_owned(),
        })?;
        let value = finite(value)?;

        Ok(round_to_digits(value, self.max_fraction_digits_parse))
    }
}

/// Rounds `value` to `digits` fractional decimal digits, half away from zero.
///
/// Values too large to scale are returned unchanged.
#[must_use]
pub fn round_to_digits(value: f64, digits: u8) -> f64 {
    let scale = 10f64.powi(i32::from(digits));
    let scaled = value * scale;
    if scaled.is_finite() && scaled.abs() < 2f64.powi(52) {
        scaled.round() / scale
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn distance_table() {
        let digits = |u| Precision::for_unit(Unit::Distance(u)).max_fraction_digits_format;
        assert_eq!(digits(DistanceUnit::Meters), 3);
        assert_eq!(digits(DistanceUnit::Centimeters), 1);
        assert_eq!(digits(DistanceUnit::Millimeters), 0);
        assert_eq!(digits(DistanceUnit::Yards), 3);
        assert_eq!(digits(DistanceUnit::Feet), 2);
        assert_eq!(digits(DistanceUnit::Inches), 1);
        assert_eq!(digits(DistanceUnit::Unitless), 2);
    }

    #[test]
    fn format_trims_to_min_digits() {
        let p = Precision::new(0, 2, 0, 4);
        assert_eq!(p.format(12.0), "12");
        assert_eq!(p.format(12.5), "12.5");
        assert_eq!(p.format(12.346), "12.35");
        assert_eq!(p.format(-3.999), "-4");
        assert_eq!(p.format(-0.001), "0");

        let whole = Precision::new(0, 0, 0, 0);
        assert_eq!(whole.format(1249.6), "1250");
    }

    #[test]
    fn parse_with_suffix() {
        let p = Precision::new(0, 2, 0, 4);
        assert_relative_eq!(p.parse(" 12.5 mm", "mm").unwrap(), 12.5);
        assert_relative_eq!(p.parse("12.5mm", "mm").unwrap(), 12.5);
        assert_relative_eq!(p.parse("-7", "°").unwrap(), -7.0);
        assert_relative_eq!(p.parse("0.123456", "").unwrap(), 0.1235);
    }

    #[test]
    fn parse_failures() {
        let p = Precision::default();
        assert_eq!(
            p.parse("twelve", "m"),
            Err(EditorError::Parse {
                text: "twelve".to_owned()
            })
        );
        assert_eq!(p.parse("inf", ""), Err(EditorError::NonFiniteValue));
        assert!(p.parse("12 ft", "m").is_err());
    }

    #[test]
    fn rounding() {
        assert_relative_eq!(round_to_digits(1.25, 1), 1.3);
        assert_relative_eq!(round_to_digits(-1.25, 1), -1.3);
        assert_relative_eq!(round_to_digits(1e300, 10), 1e300);
    }
}
