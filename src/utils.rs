use crate::error::IntegrationError;
use num::Float;

/// Convert an `f64` literal into the working float type.
#[inline]
pub(crate) fn cast<T: Float>(x: f64) -> T {
    T::from(x).unwrap_or_else(T::nan)
}

/// Lossy view of a working float as `f64`, for log messages.
#[inline]
pub(crate) fn as_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

/// Returns true when the integral of `f` looks like the integral of `|f|`,
/// i.e. the integrand does not change sign over the interval.
#[inline]
pub fn test_positivity<T: Float>(result: T, resabs: T) -> bool {
    result.abs() >= (T::one() - cast::<T>(50.0) * T::epsilon()) * resabs
}

/// Reject tolerances that cannot be met in the working precision: a
/// non-positive `epsabs` requires `epsrel >= 50 * epsilon`.
pub(crate) fn check_tolerance<T: Float>(epsabs: T, epsrel: T) -> Result<(), IntegrationError<T>> {
    let unreachable = epsabs <= T::zero()
        && (epsrel < cast::<T>(50.0) * T::epsilon() || epsrel < cast::<T>(0.5e-28));

    if unreachable || epsabs.is_nan() || epsrel.is_nan() {
        Err(IntegrationError::ToleranceUnreachable { epsabs, epsrel })
    } else {
        Ok(())
    }
}

/// Both endpoints must be finite numbers for the finite-interval drivers.
pub(crate) fn check_finite_interval<T: Float>(a: T, b: T) -> Result<(), IntegrationError<T>> {
    if a.is_finite() && b.is_finite() {
        Ok(())
    } else {
        Err(IntegrationError::InvalidInterval { a, b })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_floor() {
        assert!(check_tolerance(0.0, 1e-10).is_ok());
        assert!(check_tolerance(1e-30, 0.0).is_ok());
        assert!(check_tolerance(0.0, 1e-15).is_err());
        assert!(check_tolerance(0.0, 0.0).is_err());
        assert!(check_tolerance(f64::NAN, 1e-3).is_err());
        // f32 has a much larger epsilon
        assert!(check_tolerance(0.0f32, 1e-6).is_err());
        assert!(check_tolerance(0.0f32, 1e-4).is_ok());
    }

    #[test]
    fn test_positivity_sign_change() {
        assert!(test_positivity(2.0, 2.0));
        assert!(test_positivity(-2.0, 2.0));
        assert!(!test_positivity(0.0, 4.0 / std::f64::consts::PI));
    }

    #[test]
    fn test_finite_interval() {
        assert!(check_finite_interval(0.0, 1.0).is_ok());
        assert!(check_finite_interval(0.0, f64::INFINITY).is_err());
        assert!(check_finite_interval(f64::NAN, 1.0).is_err());
    }
}
