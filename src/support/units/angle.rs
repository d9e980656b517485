use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};

use super::{MeasurementUnit, PhysicalQuantity};

/// Display units for plane angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl MeasurementUnit for AngleUnit {
    const QUANTITY: PhysicalQuantity = PhysicalQuantity::Angle;
    const BASE: Self = Self::Degrees;
    const ALL: &'static [Self] = &[Self::Degrees, Self::Radians];

    fn abbreviation(self) -> &'static str {
        match self {
            Self::Degrees => "°",
            Self::Radians => "rad",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            Self::Degrees => value,
            Self::Radians => Angle::new::<radian>(value).get::<degree>(),
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            Self::Degrees => value,
            Self::Radians => Angle::new::<degree>(value).get::<radian>(),
        }
    }
}
