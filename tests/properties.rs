//! Properties every integration in this crate must satisfy, checked through
//! the public entry points.

use std::cell::Cell;
use std::f64::consts::{FRAC_PI_2, PI};

use approx::{assert_abs_diff_eq, assert_relative_eq};

use kronrod_quadpack::prelude::*;

// ============================================================================
// Single-step exactness
// ============================================================================

#[test]
fn test_cos_single_step() {
    let f = |x: f64| x.cos();

    let result = integrate_smooth(f, 0.0, PI, 1e-10, 0.0, DEFAULT_LIMIT, QkRule::Gauss61).unwrap();

    assert_abs_diff_eq!(result.val, 0.0, epsilon = 1e-15);
    assert_eq!(result.intervals, 1);
    assert_eq!(result.neval, 61);
}

#[test]
fn test_polynomial_single_step() {
    // degree 2 * 30 - 1 is the limit of the embedded 30-point Gauss rule
    let f = |x: f64| x.powi(59) + 3.0 * x.powi(20) - x;

    let result = integrate_smooth(f, 0.0, 1.0, 0.0, 1e-12, DEFAULT_LIMIT, QkRule::Gauss61).unwrap();

    assert_relative_eq!(result.val, 1.0 / 60.0 + 3.0 / 21.0 - 0.5, max_relative = 1e-13);
    assert_eq!(result.intervals, 1);
}

// ============================================================================
// Reference integrals
// ============================================================================

#[test]
fn test_sin() {
    let f = |x: f64| x.sin();

    let result = integrate_smooth(f, 0.0, PI, 1e-10, 0.0, DEFAULT_LIMIT, QkRule::Gauss61).unwrap();

    assert_abs_diff_eq!(result.val, 2.0, epsilon = 1e-10);
    assert!(result.err <= 1e-10);
}

#[test]
fn test_cos_sin_squared() {
    let cos2 = |x: f64| x.cos().powi(2);
    let sin2 = |x: f64| x.sin().powi(2);

    let result = integrate_smooth(cos2, 0.0, PI, 1e-10, 0.0, DEFAULT_LIMIT, QkRule::Gauss61).unwrap();
    assert_abs_diff_eq!(result.val, FRAC_PI_2, epsilon = 1e-10);

    let result = integrate_smooth(sin2, 0.0, PI, 1e-10, 0.0, DEFAULT_LIMIT, QkRule::Gauss61).unwrap();
    assert_abs_diff_eq!(result.val, FRAC_PI_2, epsilon = 1e-10);
}

#[test]
fn test_gaussian_whole_line() {
    let f = |x: f64| (-x * x).exp();

    let result = integrate(f, f64::NEG_INFINITY, f64::INFINITY, 1e-10, 0.0, DEFAULT_LIMIT).unwrap();

    assert_abs_diff_eq!(result.val, PI.sqrt(), epsilon = 1e-8);
}

#[test]
fn test_endpoint_singularities() {
    // odd about pi/2 with inverse square-root singularities at both ends
    let f = |x: f64| x.cos() / (x * (PI - x)).sqrt();

    let result = integrate_singular(f, 0.0, PI, 1e-8, 0.0, DEFAULT_LIMIT).unwrap();

    assert_abs_diff_eq!(result.val, 0.0, epsilon = 1e-6);
}

#[test]
fn test_semi_infinite_entry_points() {
    let f = |x: f64| (-x).exp();

    let upper = integrate_to_infinity(f, 0.0, 1e-10, 0.0, DEFAULT_LIMIT).unwrap();
    assert_relative_eq!(upper.val, 1.0, max_relative = 1e-9);

    let g = |x: f64| x.exp();
    let lower = integrate_from_infinity(g, 0.0, 1e-10, 0.0, DEFAULT_LIMIT).unwrap();
    assert_relative_eq!(lower.val, 1.0, max_relative = 1e-9);

    // the dispatcher takes the same route
    let via_dispatch = integrate(f, 0.0, f64::INFINITY, 1e-10, 0.0, DEFAULT_LIMIT).unwrap();
    assert_eq!(via_dispatch, upper);
}

// ============================================================================
// Determinism and symmetry
// ============================================================================

#[test]
fn test_idempotence() {
    let f = |x: f64| (x * x).sin() / (1.0 + x);

    let first = integrate(f, 0.0, 10.0, 1e-10, 1e-10, DEFAULT_LIMIT).unwrap();
    let second = integrate(f, 0.0, 10.0, 1e-10, 1e-10, DEFAULT_LIMIT).unwrap();

    assert_eq!(first.val.to_bits(), second.val.to_bits());
    assert_eq!(first.err.to_bits(), second.err.to_bits());
    assert_eq!(first.neval, second.neval);
}

#[test]
fn test_reversal() {
    let f = |x: f64| x.sqrt() * x.cos();

    let forward = integrate(f, 0.0, 3.0, 1e-10, 1e-10, DEFAULT_LIMIT).unwrap();
    let backward = integrate(f, 3.0, 0.0, 1e-10, 1e-10, DEFAULT_LIMIT).unwrap();

    assert_relative_eq!(forward.val, -backward.val, max_relative = 1e-14);
    assert_relative_eq!(forward.err, backward.err, max_relative = 1e-12);
}

#[test]
fn test_monotone_in_tolerance() {
    // x^2.6 ln(1/x), integral 1 / 3.6^2
    let f = |x: f64| x.powf(2.6) * x.recip().ln();
    let exact = 1.0 / (3.6 * 3.6);

    let mut previous: Option<(f64, IntegrationResult<f64>)> = None;
    for k in 3..=10 {
        let epsrel = 10f64.powi(-k);
        let result = integrate_smooth(f, 0.0, 1.0, 0.0, epsrel, DEFAULT_LIMIT, QkRule::Gauss21).unwrap();

        if let Some((old_epsrel, old)) = previous {
            assert!(result.err <= old.err, "epsrel {:e}: {:?} vs {:?}", epsrel, result, old);
            assert!((result.val - exact).abs() <= old_epsrel * exact);
        }
        previous = Some((epsrel, result));
    }
}

// ============================================================================
// Input validation
// ============================================================================

#[test]
fn test_unreachable_tolerance_skips_integrand() {
    let calls = Cell::new(0usize);
    let f = |x: f64| {
        calls.set(calls.get() + 1);
        x
    };

    let err = integrate(f, 0.0, 1.0, 0.0, 1e-16, DEFAULT_LIMIT).unwrap_err();
    assert_eq!(err.code(), IntegrationRetCode::BadTol);
    assert_eq!(err.estimate(), None);

    let err = integrate(f, 0.0, f64::INFINITY, 0.0, 0.0, DEFAULT_LIMIT).unwrap_err();
    assert!(matches!(err, IntegrationError::ToleranceUnreachable { .. }));

    let err = integrate_smooth(f, 0.0, 1.0, -1.0, 1e-20, DEFAULT_LIMIT, QkRule::Gauss15).unwrap_err();
    assert_eq!(err.code(), IntegrationRetCode::BadTol);

    assert_eq!(calls.get(), 0);
}

#[test]
fn test_failure_keeps_estimate() {
    // unresolved interior singularity at x = -0.1
    let f = |x: f64| (1.0 + 10.0 * x).recip().powi(2);

    let err = integrate_smooth(f, -1.0, 1.0, 1e-14, 0.0, 3, QkRule::Gauss61).unwrap_err();

    assert!(matches!(err, IntegrationError::TooManyIters(_)));
    let estimate = err.estimate().unwrap();
    assert!(estimate.val.is_finite());
    assert!(estimate.err > 1e-14);
    assert_eq!(estimate.intervals, 3);
}

#[test]
fn test_stalled_extrapolation_is_reported() {
    let f = |x: f64| (1000.0 * x).cos() / x.sqrt();

    let err = integrate_singular(f, 0.0, 1.0, 0.0, 1e-13, 50).unwrap_err();

    assert_eq!(err.code(), IntegrationRetCode::DivergeSlowConverge);
    assert!(err.estimate().unwrap().val.is_finite());
}
