//! Natural environment settings: air temperature, humidity, and pressure.
//!
//! [`NaturalEnvironmentEditors`] groups the three editors with the
//! air-attenuation flag and can reset them all to their configured defaults.
//! The flag is a plain boolean kept in sync with its owner through an
//! explicit callback rather than a property binding.

use std::fmt;

use log::debug;

use super::{
    editor::{EditorError, UnitAwareEditor},
    factory::{
        HumidityEditorConfig, PressureEditorConfig, TemperatureEditorConfig, humidity_editor,
        pressure_editor, temperature_editor,
    },
};

/// Environment values in base units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NaturalEnvironment {
    pub temperature_kelvin: f64,
    pub relative_humidity_percent: f64,
    pub pressure_pascals: f64,
    pub air_attenuation_applied: bool,
}

/// Settings for [`NaturalEnvironmentEditors`].
#[derive(Debug, Clone, Copy)]
pub struct NaturalEnvironmentConfig {
    pub temperature: TemperatureEditorConfig,
    pub humidity: HumidityEditorConfig,
    pub pressure: PressureEditorConfig,
    pub use_air_attenuation: bool,
}

impl Default for NaturalEnvironmentConfig {
    fn default() -> Self {
        Self {
            temperature: TemperatureEditorConfig::default(),
            humidity: HumidityEditorConfig::default(),
            pressure: PressureEditorConfig::default(),
            use_air_attenuation: true,
        }
    }
}

impl NaturalEnvironmentConfig {
    /// Returns the environment these settings start from.
    #[must_use]
    pub fn initial(&self) -> NaturalEnvironment {
        NaturalEnvironment {
            temperature_kelvin: self.temperature.initial_kelvin,
            relative_humidity_percent: self.humidity.initial,
            pressure_pascals: self.pressure.initial_pascals,
            air_attenuation_applied: self.use_air_attenuation,
        }
    }
}

/// A boolean shared with another owner through explicit callbacks.
///
/// Local changes ([`set`](Self::set), [`toggle`](Self::toggle)) call the
/// callback; changes pushed from the owner ([`sync_from`](Self::sync_from))
/// do not, so the two sides never echo each other.
#[derive(Default)]
pub struct SyncedFlag {
    value: bool,
    on_change: Option<Box<dyn FnMut(bool)>>,
}

impl SyncedFlag {
    #[must_use]
    pub fn new(value: bool) -> Self {
        Self {
            value,
            on_change: None,
        }
    }

    #[must_use]
    pub fn get(&self) -> bool {
        self.value
    }

    /// Installs the callback that pushes local changes to the owner.
    pub fn set_on_change(&mut self, on_change: impl FnMut(bool) + 'static) {
        self.on_change = Some(Box::new(on_change));
    }

    /// Sets the flag, notifying the owner if it changed.
    pub fn set(&mut self, value: bool) {
        if self.value == value {
            return;
        }
        self.value = value;
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(value);
        }
    }

    pub fn toggle(&mut self) {
        self.set(!self.value);
    }

    /// Accepts a value from the owner without notifying it back.
    pub fn sync_from(&mut self, value: bool) {
        self.value = value;
    }
}

impl fmt::Debug for SyncedFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncedFlag")
            .field("value", &self.value)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// The editors behind a natural environment form.
#[derive(Debug)]
pub struct NaturalEnvironmentEditors {
    pub temperature: UnitAwareEditor,
    pub humidity: UnitAwareEditor,
    pub pressure: UnitAwareEditor,
    pub use_air_attenuation: SyncedFlag,
    config: NaturalEnvironmentConfig,
}

impl NaturalEnvironmentEditors {
    /// # Errors
    ///
    /// Returns an [`EditorError`] if any configured range is invalid.
    pub fn new(config: NaturalEnvironmentConfig) -> Result<Self, EditorError> {
        Ok(Self {
            temperature: temperature_editor(&config.temperature)?,
            humidity: humidity_editor(&config.humidity)?,
            pressure: pressure_editor(&config.pressure)?,
            use_air_attenuation: SyncedFlag::new(config.use_air_attenuation),
            config,
        })
    }

    /// Reads the current environment in base units.
    ///
    /// # Errors
    ///
    /// See [`UnitAwareEditor::value_in_base`].
    pub fn environment(&self) -> Result<NaturalEnvironment, EditorError> {
        Ok(NaturalEnvironment {
            temperature_kelvin: self.temperature.value_in_base()?,
            relative_humidity_percent: self.humidity.value_in_base()?,
            pressure_pascals: self.pressure.value_in_base()?,
            air_attenuation_applied: self.use_air_attenuation.get(),
        })
    }

    /// Loads an environment into the editors, clamping each value.
    ///
    /// The air-attenuation flag is treated as coming from its owner and does
    /// not trigger the flag callback.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NonFiniteValue`] if any value is `NaN` or
    /// infinite. Editors before the failing one keep their new values.
    pub fn apply(&mut self, environment: &NaturalEnvironment) -> Result<(), EditorError> {
        self.temperature
            .set_value_in_base(environment.temperature_kelvin)?;
        self.humidity
            .set_value_in_base(environment.relative_humidity_percent)?;
        self.pressure
            .set_value_in_base(environment.pressure_pascals)?;
        self.use_air_attenuation
            .sync_from(environment.air_attenuation_applied);
        Ok(())
    }

    /// Restores every field to its configured default, regardless of state.
    ///
    /// Display units are kept. The flag callback fires if the flag changes.
    ///
    /// # Errors
    ///
    /// Fails only if the configured defaults are not finite.
    pub fn reset(&mut self) -> Result<(), EditorError> {
        debug!("resetting natural environment to defaults");
        let initial = self.config.initial();
        self.temperature
            .set_value_in_base(initial.temperature_kelvin)?;
        self.humidity
            .set_value_in_base(initial.relative_humidity_percent)?;
        self.pressure.set_value_in_base(initial.pressure_pascals)?;
        self.use_air_attenuation.set(initial.air_attenuation_applied);
        Ok(())
    }
}
