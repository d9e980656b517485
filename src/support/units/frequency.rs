use uom::si::{
    f64::Frequency,
    frequency::{hertz, kilohertz},
};

use super::{MeasurementUnit, PhysicalQuantity};

/// Display units for acoustic frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FrequencyUnit {
    #[default]
    Hertz,
    Kilohertz,
}

impl MeasurementUnit for FrequencyUnit {
    const QUANTITY: PhysicalQuantity = PhysicalQuantity::Frequency;
    const BASE: Self = Self::Hertz;
    const ALL: &'static [Self] = &[Self::Hertz, Self::Kilohertz];

    fn abbreviation(self) -> &'static str {
        match self {
            Self::Hertz => "Hz",
            Self::Kilohertz => "kHz",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            Self::Hertz => value,
            Self::Kilohertz => Frequency::new::<kilohertz>(value).get::<hertz>(),
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            Self::Hertz => value,
            Self::Kilohertz => Frequency::new::<hertz>(value).get::<kilohertz>(),
        }
    }
}
