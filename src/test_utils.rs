/// Compare `result` against `expected` to a relative tolerance, treating
/// NaN and infinities as equal only to themselves.
pub(crate) fn test_rel(result: f64, expected: f64, relative_error: f64) {
    let status = if result.is_nan() || expected.is_nan() {
        result.is_nan() != expected.is_nan()
    } else if result.is_infinite() || expected.is_infinite() {
        result != expected
    } else if expected != 0.0 {
        (result - expected).abs() / expected.abs() > relative_error
    } else {
        result.abs() > relative_error
    };

    assert!(
        !status,
        "observed: {:e}, expected: {:e}, relative tolerance: {:e}",
        result,
        expected,
        relative_error
    );
    assert!(
        expected == 0.0 || expected.abs() >= f64::MIN_POSITIVE,
        "test uses subnormal value"
    );
}

/// x^alpha * ln(1/x); integrates to 1/(alpha+1)^2 over [0, 1]
pub(crate) fn f1(x: f64, alpha: f64) -> f64 {
    x.powf(alpha) * x.recip().ln()
}

/// cos(2^alpha * sin(x))
pub(crate) fn f3(x: f64, alpha: f64) -> f64 {
    (2f64.powf(alpha) * x.sin()).cos()
}

/// ln(1/x)^(alpha-1)
pub(crate) fn f11(x: f64, alpha: f64) -> f64 {
    x.recip().ln().powf(alpha - 1.0)
}

/// x^2 * exp(-2^-alpha * x)
pub(crate) fn f15(x: f64, alpha: f64) -> f64 {
    x * x * (-(2f64.powf(-alpha)) * x).exp()
}

/// x^(alpha-1) / (1 + 10x)^2, with a double pole at x = -0.1
pub(crate) fn f16(x: f64, alpha: f64) -> f64 {
    if x == 0.0 && alpha == 1.0 {
        1.0
    } else if x == 0.0 && alpha > 1.0 {
        0.0
    } else {
        x.powf(alpha - 1.0) * (1.0 + 10.0 * x).recip().powi(2)
    }
}

/// ln(x) / (1 + 100 x^2); integrates to -pi ln(10) / 20 over [0, inf)
pub(crate) fn f455(x: f64) -> f64 {
    x.ln() / (1.0 + 100.0 * x * x)
}
