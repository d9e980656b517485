use uom::si::{
    f64::Length,
    length::{centimeter, foot, inch, meter, millimeter, yard},
};

use super::{MeasurementUnit, PhysicalQuantity};

/// Display units for distance.
///
/// [`Unitless`](Self::Unitless) is for scenes drawn without a physical scale;
/// it converts like meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistanceUnit {
    #[default]
    Meters,
    Centimeters,
    Millimeters,
    Yards,
    Feet,
    Inches,
    Unitless,
}

impl MeasurementUnit for DistanceUnit {
    const QUANTITY: PhysicalQuantity = PhysicalQuantity::Distance;
    const BASE: Self = Self::Meters;
    const ALL: &'static [Self] = &[
        Self::Meters,
        Self::Centimeters,
        Self::Millimeters,
        Self::Yards,
        Self::Feet,
        Self::Inches,
        Self::Unitless,
    ];

    fn abbreviation(self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Centimeters => "cm",
            Self::Millimeters => "mm",
            Self::Yards => "yd",
            Self::Feet => "ft",
            Self::Inches => "in",
            Self::Unitless => "",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        let length = match self {
            Self::Meters | Self::Unitless => Length::new::<meter>(value),
            Self::Centimeters => Length::new::<centimeter>(value),
            Self::Millimeters => Length::new::<millimeter>(value),
            Self::Yards => Length::new::<yard>(value),
            Self::Feet => Length::new::<foot>(value),
            Self::Inches => Length::new::<inch>(value),
        };
        length.get::<meter>()
    }

    fn from_base(self, value: f64) -> f64 {
        let length = Length::new::<meter>(value);
        match self {
            Self::Meters | Self::Unitless => length.get::<meter>(),
            Self::Centimeters => length.get::<centimeter>(),
            Self::Millimeters => length.get::<millimeter>(),
            Self::Yards => length.get::<yard>(),
            Self::Feet => length.get::<foot>(),
            Self::Inches => length.get::<inch>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn imperial_lengths() {
        assert_relative_eq!(DistanceUnit::Feet.to_base(1.0), 0.3048, max_relative = 1e-12);
        assert_relative_eq!(DistanceUnit::Yards.to_base(1.0), 0.9144, max_relative = 1e-12);
        assert_relative_eq!(
            DistanceUnit::Feet.convert_to(1.0, DistanceUnit::Inches),
            12.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn unitless_is_meters() {
        assert_relative_eq!(DistanceUnit::Unitless.convert_to(3.5, DistanceUnit::Meters), 3.5);
        assert_relative_eq!(
            DistanceUnit::Unitless.convert_to(2.0, DistanceUnit::Centimeters),
            200.0,
            max_relative = 1e-12
        );
    }
}
