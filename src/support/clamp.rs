//! Clamping policies for bounded values.
//!
//! Two policies exist:
//!
//! - [`ClampPolicy::Standard`] pins values to the nearest bound.
//! - [`ClampPolicy::PeriodicUnwrap`] shifts angles by whole turns so a
//!   full-turn dial wraps around instead of sticking at its end stop.
//!
//! The policy is chosen per call from the quantity and the current range
//! width. It is never stored, so narrowing an angular range back below a full
//! turn immediately returns to standard clamping.
//!
//! ```
//! use physics_editors::support::{clamp::ClampPolicy, units::PhysicalQuantity};
//!
//! let dial = ClampPolicy::select(PhysicalQuantity::Angle, -180.0, 180.0);
//! assert_eq!(dial, ClampPolicy::PeriodicUnwrap);
//! assert_eq!(dial.apply(200.0, -180.0, 180.0), -160.0);
//!
//! let tilt = ClampPolicy::select(PhysicalQuantity::Angle, 10.0, 20.0);
//! assert_eq!(tilt.apply(400.0, 10.0, 20.0), 20.0);
//! ```

use crate::support::units::PhysicalQuantity;

/// One full turn, in degrees.
///
/// Angular ranges at least this wide are unwrapped rather than clamped.
/// The threshold assumes the range is expressed in degrees.
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// How an out-of-range value is brought back into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampPolicy {
    /// `max(minimum, min(maximum, value))`.
    Standard,

    /// Shift by whole turns into `[minimum, maximum)`.
    PeriodicUnwrap,
}

impl ClampPolicy {
    /// Selects the policy for a value of `quantity` bounded by `[minimum, maximum]`.
    #[must_use]
    pub fn select(quantity: PhysicalQuantity, minimum: f64, maximum: f64) -> Self {
        if quantity == PhysicalQuantity::Angle && (maximum - minimum).abs() >= FULL_TURN_DEGREES {
            Self::PeriodicUnwrap
        } else {
            Self::Standard
        }
    }

    /// Applies this policy to `value`.
    #[must_use]
    pub fn apply(self, value: f64, minimum: f64, maximum: f64) -> f64 {
        match self {
            Self::Standard => clamp(value, minimum, maximum),
            Self::PeriodicUnwrap => unwrap_angle_degrees(value, minimum, maximum),
        }
    }
}

/// Pins `value` to `[minimum, maximum]`.
#[must_use]
pub fn clamp(value: f64, minimum: f64, maximum: f64) -> f64 {
    minimum.max(maximum.min(value))
}

/// Shifts `value` by whole turns until it lies in `[minimum, maximum)`.
///
/// Values already in range are returned untouched, so ranges wider than a
/// full turn keep every representable angle. When the range is narrower than
/// a full turn no shift can be guaranteed to land inside it, and the result
/// falls back to [`clamp`].
#[must_use]
pub fn unwrap_angle_degrees(value: f64, minimum: f64, maximum: f64) -> f64 {
    if (minimum..maximum).contains(&value) {
        return value;
    }

    let unwrapped = if value >= maximum {
        let turns = ((value - maximum) / FULL_TURN_DEGREES).floor() + 1.0;
        value - turns * FULL_TURN_DEGREES
    } else {
        let turns = ((minimum - value) / FULL_TURN_DEGREES).ceil();
        value + turns * FULL_TURN_DEGREES
    };

    if (minimum..maximum).contains(&unwrapped) {
        unwrapped
    } else {
        clamp(unwrapped, minimum, maximum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn standard_clamp_boundaries() {
        let policy = ClampPolicy::select(PhysicalQuantity::Distance, 0.0, 100.0);
        assert_eq!(policy, ClampPolicy::Standard);
        assert_relative_eq!(policy.apply(150.0, 0.0, 100.0), 100.0);
        assert_relative_eq!(policy.apply(-5.0, 0.0, 100.0), 0.0);
        assert_relative_eq!(policy.apply(50.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn wide_non_angular_range_is_never_unwrapped() {
        let policy = ClampPolicy::select(PhysicalQuantity::Temperature, 0.0, 1000.0);
        assert_eq!(policy, ClampPolicy::Standard);
        assert_relative_eq!(policy.apply(1200.0, 0.0, 1000.0), 1000.0);
    }

    #[test]
    fn full_turn_unwraps() {
        assert_relative_eq!(unwrap_angle_degrees(370.0, 0.0, 360.0), 10.0);
        assert_relative_eq!(unwrap_angle_degrees(200.0, -180.0, 180.0), -160.0);
        assert_relative_eq!(unwrap_angle_degrees(-190.0, -180.0, 180.0), 170.0);
        assert_relative_eq!(unwrap_angle_degrees(-725.0, 0.0, 360.0), 355.0);
        assert_relative_eq!(unwrap_angle_degrees(1090.0, 0.0, 360.0), 10.0);
    }

    #[test]
    fn upper_bound_wraps_to_lower() {
        assert_relative_eq!(unwrap_angle_degrees(360.0, 0.0, 360.0), 0.0);
        assert_relative_eq!(unwrap_angle_degrees(180.0, -180.0, 180.0), -180.0);
    }

    #[test]
    fn wider_than_full_turn_keeps_in_range_values() {
        assert_relative_eq!(unwrap_angle_degrees(200.0, -360.0, 360.0), 200.0);
        assert_relative_eq!(unwrap_angle_degrees(400.0, -360.0, 360.0), 40.0);
    }

    #[test]
    fn narrow_angular_range_uses_standard_clamp() {
        let policy = ClampPolicy::select(PhysicalQuantity::Angle, 10.0, 20.0);
        assert_eq!(policy, ClampPolicy::Standard);
        assert_relative_eq!(policy.apply(400.0, 10.0, 20.0), 20.0);
    }

    #[test]
    fn unwrap_is_idempotent() {
        for v in [-1000.0, -180.0, 0.0, 359.9, 360.0, 725.5] {
            let once = unwrap_angle_degrees(v, 0.0, 360.0);
            let twice = unwrap_angle_degrees(once, 0.0, 360.0);
            assert_relative_eq!(once, twice);
        }
    }
}
