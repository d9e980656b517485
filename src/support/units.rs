//! Physical quantities, their display units, and conversion between them.
//!
//! Conversion factors come from [`uom`]; this module only decides which
//! [`uom`] unit each display unit maps to, and which unit is the canonical
//! base for each quantity.
//!
//! ## Typed and tagged units
//!
//! Each quantity has its own unit enum implementing [`MeasurementUnit`]
//! (e.g., [`DistanceUnit`]). When the quantity is only known at runtime,
//! units travel as the tagged [`Unit`] variant and conversions go through
//! [`convert`], which rejects units that do not belong to the requested
//! quantity:
//!
//! ```
//! use physics_editors::support::units::{convert, PhysicalQuantity, TemperatureUnit, Unit};
//!
//! let kelvin = convert(
//!     0.0,
//!     Unit::Temperature(TemperatureUnit::Celsius),
//!     Unit::Temperature(TemperatureUnit::Kelvin),
//!     PhysicalQuantity::Temperature,
//! )
//! .unwrap();
//! assert!((kelvin - 273.15).abs() < 1e-12);
//! ```

mod angle;
mod distance;
mod error;
mod frequency;
mod humidity;
mod pressure;
mod temperature;

use std::fmt;

use crate::support::constraint::Finite;

pub use angle::AngleUnit;
pub use distance::DistanceUnit;
pub use error::UnitError;
pub use frequency::FrequencyUnit;
pub use humidity::HumidityUnit;
pub use pressure::PressureUnit;
pub use temperature::TemperatureUnit;

/// The physical quantities an editor can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalQuantity {
    Distance,
    Angle,
    Temperature,
    Pressure,
    Humidity,
    Frequency,
}

impl PhysicalQuantity {
    /// Returns the canonical unit used for internal conversion.
    #[must_use]
    pub fn base_unit(self) -> Unit {
        match self {
            Self::Distance => Unit::Distance(DistanceUnit::BASE),
            Self::Angle => Unit::Angle(AngleUnit::BASE),
            Self::Temperature => Unit::Temperature(TemperatureUnit::BASE),
            Self::Pressure => Unit::Pressure(PressureUnit::BASE),
            Self::Humidity => Unit::Humidity(HumidityUnit::BASE),
            Self::Frequency => Unit::Frequency(FrequencyUnit::BASE),
        }
    }

    /// Returns every unit supported for this quantity.
    #[must_use]
    pub fn units(self) -> Vec<Unit> {
        match self {
            Self::Distance => DistanceUnit::ALL.iter().copied().map(Unit::from).collect(),
            Self::Angle => AngleUnit::ALL.iter().copied().map(Unit::from).collect(),
            Self::Temperature => TemperatureUnit::ALL.iter().copied().map(Unit::from).collect(),
            Self::Pressure => PressureUnit::ALL.iter().copied().map(Unit::from).collect(),
            Self::Humidity => HumidityUnit::ALL.iter().copied().map(Unit::from).collect(),
            Self::Frequency => FrequencyUnit::ALL.iter().copied().map(Unit::from).collect(),
        }
    }
}

impl fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Distance => "distance",
            Self::Angle => "angle",
            Self::Temperature => "temperature",
            Self::Pressure => "pressure",
            Self::Humidity => "humidity",
            Self::Frequency => "frequency",
        };
        f.write_str(name)
    }
}

/// A display unit of a single physical quantity.
///
/// Implementations map each unit onto the quantity's base unit.
/// `from_base(to_base(x))` must return `x` within floating-point tolerance.
pub trait MeasurementUnit: Copy + PartialEq + 'static {
    /// The quantity measured in this unit.
    const QUANTITY: PhysicalQuantity;

    /// The canonical unit for internal conversion.
    const BASE: Self;

    /// Every supported unit, in presentation order.
    const ALL: &'static [Self];

    /// Returns the abbreviation shown beside values in this unit.
    fn abbreviation(self) -> &'static str;

    /// Converts a value in this unit to the base unit.
    fn to_base(self, value: f64) -> f64;

    /// Converts a value in the base unit to this unit.
    fn from_base(self, value: f64) -> f64;

    /// Converts a value in this unit to `target`.
    fn convert_to(self, value: f64, target: Self) -> f64 {
        if self == target {
            value
        } else {
            target.from_base(self.to_base(value))
        }
    }
}

/// A display unit tagged with its physical quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Distance(DistanceUnit),
    Angle(AngleUnit),
    Temperature(TemperatureUnit),
    Pressure(PressureUnit),
    Humidity(HumidityUnit),
    Frequency(FrequencyUnit),
}

impl Unit {
    /// Returns the quantity this unit measures.
    #[must_use]
    pub fn quantity(self) -> PhysicalQuantity {
        match self {
            Self::Distance(_) => PhysicalQuantity::Distance,
            Self::Angle(_) => PhysicalQuantity::Angle,
            Self::Temperature(_) => PhysicalQuantity::Temperature,
            Self::Pressure(_) => PhysicalQuantity::Pressure,
            Self::Humidity(_) => PhysicalQuantity::Humidity,
            Self::Frequency(_) => PhysicalQuantity::Frequency,
        }
    }

    /// Returns the abbreviation shown beside values in this unit.
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Distance(u) => u.abbreviation(),
            Self::Angle(u) => u.abbreviation(),
            Self::Temperature(u) => u.abbreviation(),
            Self::Pressure(u) => u.abbreviation(),
            Self::Humidity(u) => u.abbreviation(),
            Self::Frequency(u) => u.abbreviation(),
        }
    }

    /// Looks up a unit of `quantity` by its abbreviation.
    ///
    /// Surrounding whitespace is ignored; the match is otherwise exact.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::UnknownUnit`] if no unit of `quantity` uses
    /// this abbreviation.
    pub fn from_abbreviation(quantity: PhysicalQuantity, text: &str) -> Result<Self, UnitError> {
        let text = text.trim();
        quantity
            .units()
            .into_iter()
            .find(|unit| unit.abbreviation() == text)
            .ok_or_else(|| UnitError::UnknownUnit {
                quantity,
                unit: text.to_owned(),
            })
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            Self::Distance(u) => u.to_base(value),
            Self::Angle(u) => u.to_base(value),
            Self::Temperature(u) => u.to_base(value),
            Self::Pressure(u) => u.to_base(value),
            Self::Humidity(u) => u.to_base(value),
            Self::Frequency(u) => u.to_base(value),
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            Self::Distance(u) => u.from_base(value),
            Self::Angle(u) => u.from_base(value),
            Self::Temperature(u) => u.from_base(value),
            Self::Pressure(u) => u.from_base(value),
            Self::Humidity(u) => u.from_base(value),
            Self::Frequency(u) => u.from_base(value),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Distance(u) => write!(f, "{u:?}"),
            Self::Angle(u) => write!(f, "{u:?}"),
            Self::Temperature(u) => write!(f, "{u:?}"),
            Self::Pressure(u) => write!(f, "{u:?}"),
            Self::Humidity(u) => write!(f, "{u:?}"),
            Self::Frequency(u) => write!(f, "{u:?}"),
        }
    }
}

impl From<DistanceUnit> for Unit {
    fn from(unit: DistanceUnit) -> Self {
        Self::Distance(unit)
    }
}

impl From<AngleUnit> for Unit {
    fn from(unit: AngleUnit) -> Self {
        Self::Angle(unit)
    }
}

impl From<TemperatureUnit> for Unit {
    fn from(unit: TemperatureUnit) -> Self {
        Self::Temperature(unit)
    }
}

impl From<PressureUnit> for Unit {
    fn from(unit: PressureUnit) -> Self {
        Self::Pressure(unit)
    }
}

impl From<HumidityUnit> for Unit {
    fn from(unit: HumidityUnit) -> Self {
        Self::Humidity(unit)
    }
}

impl From<FrequencyUnit> for Unit {
    fn from(unit: FrequencyUnit) -> Self {
        Self::Frequency(unit)
    }
}

/// Converts `value` from one unit of `quantity` to another.
///
/// Linear quantities scale through the base unit; temperature applies the
/// affine offset on the way to and from kelvin.
///
/// # Errors
///
/// - [`UnitError::NonFiniteValue`] if `value` is `NaN` or infinite.
/// - [`UnitError::UnknownUnit`] if `from` or `to` is not a unit of `quantity`.
pub fn convert(
    value: f64,
    from: Unit,
    to: Unit,
    quantity: PhysicalQuantity,
) -> Result<f64, UnitError> {
    let value = Finite::new(value)
        .map_err(|_| UnitError::NonFiniteValue)?
        .into_inner();

    if let Some(stray) = [from, to].into_iter().find(|u| u.quantity() != quantity) {
        return Err(UnitError::UnknownUnit {
            quantity,
            unit: stray.to_string(),
        });
    }

    if from == to {
        return Ok(value);
    }

    Ok(to.from_base(from.to_base(value)))
}
