use log::{debug, trace};
use num::Float;

use crate::error::{handle_error, IntegrationError, Termination};
use crate::qk::QuadratureRule;
use crate::result::IntegrationResult;
use crate::utils::{as_f64, cast, check_tolerance};
use crate::workspace::IntegrationWorkSpace;

/// Adaptive integration of `f` over `[a, b]` with the Gauss-Kronrod `rule`,
/// bisecting the subinterval with the largest error until
/// `errsum <= max(epsabs, epsrel * |area|)`.
///
/// At most `limit` subintervals are used. No extrapolation is attempted, so
/// this is the driver of choice for smooth integrands.
pub fn qag<T, F, R>(
    f: F,
    a: T,
    b: T,
    epsabs: T,
    epsrel: T,
    limit: usize,
    rule: &R,
) -> Result<IntegrationResult<T>, IntegrationError<T>>
where
    T: Float,
    F: Fn(T) -> T,
    R: QuadratureRule,
{
    check_tolerance(epsabs, epsrel).map_err(IntegrationError::warned)?;

    let points = rule.points();

    // Roundoff detection counters
    let mut roundoff_type1: usize = 0;
    let mut roundoff_type2: usize = 0;
    let mut code = Termination::Success;

    // Perform the first integration
    let (result0, abserr0, resabs0, resasc0) = rule.evaluate(&f, a, b);
    let mut neval = points;

    // Test on accuracy
    let mut tolerance = epsabs.max(epsrel * result0.abs());
    let round_off = cast::<T>(50.0) * T::epsilon() * resabs0;

    let first = IntegrationResult::new(result0, abserr0, neval, 1);
    if abserr0 <= round_off && abserr0 > tolerance {
        return handle_error(first, Termination::RoundOff);
    } else if (abserr0 <= tolerance && abserr0 != resasc0) || abserr0.is_zero() {
        return Ok(first);
    } else if limit <= 1 {
        return handle_error(first, Termination::TooManyIters);
    }

    // Integration workspace for storing results, intervals and errors
    let mut workspace = IntegrationWorkSpace::new(limit);
    workspace.initialize(a, b, result0, abserr0);

    let mut area = result0;
    let mut errsum = abserr0;

    let mut iteration: usize = 1;
    loop {
        // Bisect the subinterval with the largest error estimate
        let (a_i, b_i, r_i, e_i) = workspace.worst();

        let a1 = a_i;
        let b1 = (a_i + b_i) / cast(2.0);
        let a2 = b1;
        let b2 = b_i;

        let (area1, error1, _, resasc1) = rule.evaluate(&f, a1, b1);
        let (area2, error2, _, resasc2) = rule.evaluate(&f, a2, b2);
        neval += 2 * points;

        let area12 = area1 + area2;
        let error12 = error1 + error2;

        errsum = errsum + (error12 - e_i);
        area = area + (area12 - r_i);

        if resasc1 != error1 && resasc2 != error2 {
            let delta = r_i - area12;

            if delta.abs() <= cast::<T>(1e-5) * area12.abs() && error12 >= cast::<T>(0.99) * e_i {
                roundoff_type1 += 1;
            }
            if iteration >= 10 && error12 > e_i {
                roundoff_type2 += 1;
            }
        }

        tolerance = epsabs.max(epsrel * area.abs());

        if errsum > tolerance {
            if roundoff_type1 >= 6 || roundoff_type2 >= 20 {
                code = Termination::RoundOff;
            }

            // Bad integrand behaviour at a point of the integration range
            if IntegrationWorkSpace::subinterval_too_small(a1, a2, b2) {
                code = Termination::BadIntegrand;
            }
        }

        workspace.update((a1, b1, area1, error1), (a2, b2, area2, error2));

        trace!(
            "qag: iteration {}: [{:e}, {:e}] area = {:e}, errsum = {:e}",
            iteration,
            as_f64(a_i),
            as_f64(b_i),
            as_f64(area),
            as_f64(errsum)
        );

        iteration += 1;
        if iteration >= limit || code != Termination::Success || errsum <= tolerance {
            break;
        }
    }

    let result = IntegrationResult::new(workspace.sum_results(), errsum, neval, workspace.size());

    debug!(
        "qag: stopped after {} iterations, result = {:e}, abserr = {:e}",
        iteration,
        as_f64(result.val),
        as_f64(result.err)
    );

    if errsum <= tolerance {
        return Ok(result);
    }
    if code == Termination::Success && iteration == limit {
        code = Termination::TooManyIters;
    }
    handle_error(result, code)
}
