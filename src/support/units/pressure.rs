use uom::si::{
    f64::Pressure,
    pressure::{atmosphere, kilopascal, millibar, pascal},
};

use super::{MeasurementUnit, PhysicalQuantity};

/// Display units for atmospheric pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PressureUnit {
    #[default]
    Pascals,
    Kilopascals,
    Millibars,
    Atmospheres,
}

impl MeasurementUnit for PressureUnit {
    const QUANTITY: PhysicalQuantity = PhysicalQuantity::Pressure;
    const BASE: Self = Self::Pascals;
    const ALL: &'static [Self] = &[
        Self::Pascals,
        Self::Kilopascals,
        Self::Millibars,
        Self::Atmospheres,
    ];

    fn abbreviation(self) -> &'static str {
        match self {
            Self::Pascals => "Pa",
            Self::Kilopascals => "kPa",
            Self::Millibars => "mbar",
            Self::Atmospheres => "atm",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        let p = match self {
            Self::Pascals => Pressure::new::<pascal>(value),
            Self::Kilopascals => Pressure::new::<kilopascal>(value),
            Self::Millibars => Pressure::new::<millibar>(value),
            Self::Atmospheres => Pressure::new::<atmosphere>(value),
        };
        p.get::<pascal>()
    }

    fn from_base(self, value: f64) -> f64 {
        let p = Pressure::new::<pascal>(value);
        match self {
            Self::Pascals => p.get::<pascal>(),
            Self::Kilopascals => p.get::<kilopascal>(),
            Self::Millibars => p.get::<millibar>(),
            Self::Atmospheres => p.get::<atmosphere>(),
        }
    }
}
