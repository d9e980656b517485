use uom::si::{
    f64::ThermodynamicTemperature,
    thermodynamic_temperature::{degree_celsius, degree_fahrenheit, kelvin},
};

use super::{MeasurementUnit, PhysicalQuantity};

/// Display units for absolute temperature.
///
/// Conversions are affine: Celsius and Fahrenheit carry an offset from
/// absolute zero in addition to a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemperatureUnit {
    #[default]
    Kelvin,
    Celsius,
    Fahrenheit,
}

impl MeasurementUnit for TemperatureUnit {
    const QUANTITY: PhysicalQuantity = PhysicalQuantity::Temperature;
    const BASE: Self = Self::Kelvin;
    const ALL: &'static [Self] = &[Self::Kelvin, Self::Celsius, Self::Fahrenheit];

    fn abbreviation(self) -> &'static str {
        match self {
            Self::Kelvin => "K",
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        let t = match self {
            Self::Kelvin => ThermodynamicTemperature::new::<kelvin>(value),
            Self::Celsius => ThermodynamicTemperature::new::<degree_celsius>(value),
            Self::Fahrenheit => ThermodynamicTemperature::new::<degree_fahrenheit>(value),
        };
        t.get::<kelvin>()
    }

    fn from_base(self, value: f64) -> f64 {
        let t = ThermodynamicTemperature::new::<kelvin>(value);
        match self {
            Self::Kelvin => t.get::<kelvin>(),
            Self::Celsius => t.get::<degree_celsius>(),
            Self::Fahrenheit => t.get::<degree_fahrenheit>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn fixed_points() {
        assert_relative_eq!(TemperatureUnit::Celsius.to_base(0.0), 273.15, max_relative = 1e-12);
        assert_relative_eq!(
            TemperatureUnit::Fahrenheit.convert_to(-40.0, TemperatureUnit::Celsius),
            -40.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            TemperatureUnit::Kelvin.from_base(300.0),
            300.0,
            max_relative = 1e-12
        );
    }
}
