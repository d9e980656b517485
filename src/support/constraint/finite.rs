use num_traits::Float;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a floating-point value is finite.
///
/// Rejects `NaN` as well as positive and negative infinity.
///
/// # Examples
///
/// ```
/// use physics_editors::support::constraint::{Constrained, Finite};
///
/// // Generic constructor:
/// let x = Constrained::<f64, Finite>::new(-3.5).unwrap();
/// assert_eq!(x.into_inner(), -3.5);
///
/// // Associated constructor:
/// let y = Finite::new(0.0_f32).unwrap();
/// assert_eq!(y.into_inner(), 0.0);
///
/// // Error cases:
/// assert!(Finite::new(f64::NAN).is_err());
/// assert!(Finite::new(f64::INFINITY).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Finite;

impl Finite {
    /// Constructs a [`Constrained<T, Finite>`] if the value is finite.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::NotANumber`] if the value is `NaN`.
    /// - [`ConstraintError::Infinite`] if the value is infinite.
    pub fn new<T: Float>(value: T) -> Result<Constrained<T, Finite>, ConstraintError> {
        Constrained::<T, Finite>::new(value)
    }
}

impl<T: Float> Constraint<T> for Finite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_values() {
        assert!(Finite::new(0.0).is_ok());
        assert!(Finite::new(-1e300).is_ok());
        assert!(Finite::new(f64::MIN_POSITIVE).is_ok());
        assert!(Constrained::<f32, Finite>::new(f32::MAX).is_ok());
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(Finite::new(f64::NAN), Err(ConstraintError::NotANumber));
        assert_eq!(Finite::new(f64::INFINITY), Err(ConstraintError::Infinite));
        assert_eq!(
            Finite::new(f64::NEG_INFINITY),
            Err(ConstraintError::Infinite)
        );
    }
}
