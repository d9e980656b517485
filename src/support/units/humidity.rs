use uom::si::{
    f64::Ratio,
    ratio::{percent, ratio},
};

use super::{MeasurementUnit, PhysicalQuantity};

/// Display units for relative humidity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HumidityUnit {
    #[default]
    Percent,
    /// Relative humidity as a plain ratio in `[0, 1]`.
    Fraction,
}

impl MeasurementUnit for HumidityUnit {
    const QUANTITY: PhysicalQuantity = PhysicalQuantity::Humidity;
    const BASE: Self = Self::Percent;
    const ALL: &'static [Self] = &[Self::Percent, Self::Fraction];

    fn abbreviation(self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Fraction => "",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            Self::Percent => value,
            Self::Fraction => Ratio::new::<ratio>(value).get::<percent>(),
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            Self::Percent => value,
            Self::Fraction => Ratio::new::<percent>(value).get::<ratio>(),
        }
    }
}
