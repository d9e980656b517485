//! Constructors for the standard physics editors.
//!
//! Each constructor takes an explicit configuration struct whose `Default`
//! holds the usual settings, so callers override only what differs:
//!
//! ```
//! use physics_editors::models::factory::{DistanceEditorConfig, distance_editor};
//! use physics_editors::support::units::DistanceUnit;
//!
//! let editor = distance_editor(&DistanceEditorConfig {
//!     unit: DistanceUnit::Feet,
//!     ..DistanceEditorConfig::default()
//! })
//! .unwrap();
//! assert_eq!(editor.precision().max_fraction_digits_format, 2);
//! ```

use crate::support::units::{
    AngleUnit, DistanceUnit, HumidityUnit, PressureUnit, TemperatureUnit, Unit,
};

use super::editor::{EditorError, Precision, UnitAwareEditor};

/// Arrow-key step for distance editors, in the display unit.
pub const DISTANCE_STEP: f64 = 0.5;

/// Arrow-key step for angle editors, in degrees.
pub const ANGLE_STEP_DEGREES: f64 = 0.1;

/// Arrow-key step for humidity editors, in percent.
pub const HUMIDITY_STEP_PERCENT: f64 = 10.0;

/// Distance editor settings. Limits are in meters.
#[derive(Debug, Clone, Copy)]
pub struct DistanceEditorConfig {
    pub unit: DistanceUnit,
    pub minimum_meters: f64,
    pub maximum_meters: f64,
    pub initial_meters: f64,
    pub step: f64,
}

impl Default for DistanceEditorConfig {
    fn default() -> Self {
        Self {
            unit: DistanceUnit::Meters,
            minimum_meters: 0.0,
            maximum_meters: 10_000.0,
            initial_meters: 0.0,
            step: DISTANCE_STEP,
        }
    }
}

/// Angle editor settings, in degrees.
#[derive(Debug, Clone, Copy)]
pub struct AngleEditorConfig {
    pub minimum: f64,
    pub maximum: f64,
    pub initial: f64,
    pub step: f64,
    pub precision: Precision,
}

impl Default for AngleEditorConfig {
    fn default() -> Self {
        Self {
            minimum: -180.0,
            maximum: 180.0,
            initial: 0.0,
            step: ANGLE_STEP_DEGREES,
            precision: Precision::for_unit(Unit::Angle(AngleUnit::Degrees)),
        }
    }
}

/// Temperature editor settings. Limits are in kelvin.
#[derive(Debug, Clone, Copy)]
pub struct TemperatureEditorConfig {
    pub unit: TemperatureUnit,
    pub minimum_kelvin: f64,
    pub maximum_kelvin: f64,
    pub initial_kelvin: f64,
    pub step: f64,
}

impl Default for TemperatureEditorConfig {
    fn default() -> Self {
        Self {
            unit: TemperatureUnit::Kelvin,
            minimum_kelvin: 233.15,
            maximum_kelvin: 333.15,
            initial_kelvin: 293.15,
            step: 1.0,
        }
    }
}

/// Pressure editor settings. Limits are in pascals.
#[derive(Debug, Clone, Copy)]
pub struct PressureEditorConfig {
    pub unit: PressureUnit,
    pub minimum_pascals: f64,
    pub maximum_pascals: f64,
    pub initial_pascals: f64,
    pub step: f64,
}

impl Default for PressureEditorConfig {
    fn default() -> Self {
        Self {
            unit: PressureUnit::Pascals,
            minimum_pascals: 80_000.0,
            maximum_pascals: 110_000.0,
            initial_pascals: 101_325.0,
            step: 100.0,
        }
    }
}

/// Relative humidity editor settings, in percent.
#[derive(Debug, Clone, Copy)]
pub struct HumidityEditorConfig {
    pub minimum: f64,
    pub maximum: f64,
    pub initial: f64,
    pub step: f64,
}

impl Default for HumidityEditorConfig {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 100.0,
            initial: 50.0,
            step: HUMIDITY_STEP_PERCENT,
        }
    }
}

/// Builds a distance editor showing values in `config.unit`.
///
/// # Errors
///
/// Returns an [`EditorError`] if the limits or step are invalid.
pub fn distance_editor(config: &DistanceEditorConfig) -> Result<UnitAwareEditor, EditorError> {
    let mut editor = UnitAwareEditor::new(
        Unit::Distance(DistanceUnit::Meters),
        config.initial_meters,
        config.minimum_meters,
        config.maximum_meters,
        config.step,
    )?;
    editor.change_unit(Unit::Distance(config.unit))?;
    Ok(editor)
}

/// Builds an angle editor in degrees.
///
/// A range spanning a full turn or more gives a wrap-around dial.
///
/// # Errors
///
/// Returns an [`EditorError`] if the limits or step are invalid.
pub fn angle_editor(config: &AngleEditorConfig) -> Result<UnitAwareEditor, EditorError> {
    let editor = UnitAwareEditor::new(
        Unit::Angle(AngleUnit::Degrees),
        config.initial,
        config.minimum,
        config.maximum,
        config.step,
    )?;
    Ok(editor.with_precision(config.precision))
}

/// Builds a temperature editor showing values in `config.unit`.
///
/// # Errors
///
/// Returns an [`EditorError`] if the limits or step are invalid.
pub fn temperature_editor(
    config: &TemperatureEditorConfig,
) -> Result<UnitAwareEditor, EditorError> {
    let mut editor = UnitAwareEditor::new(
        Unit::Temperature(TemperatureUnit::Kelvin),
        config.initial_kelvin,
        config.minimum_kelvin,
        config.maximum_kelvin,
        config.step,
    )?;
    editor.change_unit(Unit::Temperature(config.unit))?;
    Ok(editor)
}

/// Builds a pressure editor showing values in `config.unit`.
///
/// # Errors
///
/// Returns an [`EditorError`] if the limits or step are invalid.
pub fn pressure_editor(config: &PressureEditorConfig) -> Result<UnitAwareEditor, EditorError> {
    let mut editor = UnitAwareEditor::new(
        Unit::Pressure(PressureUnit::Pascals),
        config.initial_pascals,
        config.minimum_pascals,
        config.maximum_pascals,
        config.step,
    )?;
    editor.change_unit(Unit::Pressure(config.unit))?;
    Ok(editor)
}

/// Builds a relative humidity editor in percent.
///
/// # Errors
///
/// Returns an [`EditorError`] if the limits or step are invalid.
pub fn humidity_editor(config: &HumidityEditorConfig) -> Result<UnitAwareEditor, EditorError> {
    UnitAwareEditor::new(
        Unit::Humidity(HumidityUnit::Percent),
        config.initial,
        config.minimum,
        config.maximum,
        config.step,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn distance_defaults() {
        let editor = distance_editor(&DistanceEditorConfig::default()).unwrap();
        assert_eq!(editor.unit(), Unit::Distance(DistanceUnit::Meters));
        assert_relative_eq!(editor.step(), DISTANCE_STEP);
        assert_eq!(editor.display_text(), "0 m");
    }

    #[test]
    fn distance_limits_follow_unit() {
        let editor = distance_editor(&DistanceEditorConfig {
            unit: DistanceUnit::Centimeters,
            maximum_meters: 2.0,
            initial_meters: 1.0,
            ..DistanceEditorConfig::default()
        })
        .unwrap();
        assert_relative_eq!(editor.maximum(), 200.0, max_relative = 1e-12);
        assert_relative_eq!(editor.value(), 100.0, max_relative = 1e-12);
        // The step stays in the display unit.
        assert_relative_eq!(editor.step(), DISTANCE_STEP);
    }

    #[test]
    fn full_turn_angle_dial() {
        let mut editor = angle_editor(&AngleEditorConfig::default()).unwrap();
        assert_relative_eq!(editor.set_value(200.0).unwrap(), -160.0);
        assert_eq!(editor.display_text(), "-160°");
    }

    #[test]
    fn partial_angle_range_with_custom_precision() {
        let mut editor = angle_editor(&AngleEditorConfig {
            minimum: 10.0,
            maximum: 20.0,
            initial: 15.0,
            precision: Precision::new(1, 1, 0, 4),
            ..AngleEditorConfig::default()
        })
        .unwrap();
        assert_relative_eq!(editor.set_value(400.0).unwrap(), 20.0);
        assert_eq!(editor.format_value(), "20.0");
    }

    #[test]
    fn temperature_in_celsius() {
        let editor = temperature_editor(&TemperatureEditorConfig {
            unit: TemperatureUnit::Celsius,
            ..TemperatureEditorConfig::default()
        })
        .unwrap();
        assert_relative_eq!(editor.value(), 20.0, epsilon = 1e-9);
        assert_relative_eq!(editor.value_in_base().unwrap(), 293.15, max_relative = 1e-12);
        assert_eq!(editor.display_text(), "20 °C");
    }

    #[test]
    fn pressure_in_kilopascals() {
        let editor = pressure_editor(&PressureEditorConfig {
            unit: PressureUnit::Kilopascals,
            ..PressureEditorConfig::default()
        })
        .unwrap();
        assert_relative_eq!(editor.value(), 101.325, max_relative = 1e-12);
        assert_eq!(editor.display_text(), "101.325 kPa");
    }

    #[test]
    fn humidity_defaults() {
        let mut editor = humidity_editor(&HumidityEditorConfig::default()).unwrap();
        assert_relative_eq!(editor.increment().unwrap(), 60.0);
        assert_eq!(editor.display_text(), "60%");
    }

    #[test]
    fn inverted_limits_fail() {
        let err = humidity_editor(&HumidityEditorConfig {
            minimum: 80.0,
            maximum: 20.0,
            ..HumidityEditorConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, EditorError::InvalidRange { .. }));
    }
}
