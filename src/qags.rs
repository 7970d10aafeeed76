// GSL License:
//
// Copyright (C) 1996, 1997, 1998, 1999, 2000, 2001, 2007 Brian Gough
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 3 of the License, or (at
// your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program; if not, write to the Free Software
// Foundation, Inc., 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301, USA.

use log::{debug, trace};
use num::Float;

use crate::error::{handle_error, IntegrationError, Termination};
use crate::extrap::ExtrapolationTable;
use crate::qk::QuadratureRule;
use crate::result::IntegrationResult;
use crate::utils::{as_f64, cast, check_tolerance, test_positivity};
use crate::workspace::IntegrationWorkSpace;

/// Adaptive integration of `f` over `[a, b]` with bisection and Wynn epsilon
/// extrapolation, suited to integrands with integrable endpoint
/// singularities.
///
/// Once the subinterval to bisect next is among the smallest ones, the
/// running area is fed into an [`ExtrapolationTable`] and the accelerated
/// estimate replaces the subdivision sum whenever its error is smaller. At
/// most `limit` subintervals are used.
pub fn qags<T, F, R>(
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

    // Perform the first integration
    let (result0, abserr0, resabs0, resasc0) = rule.evaluate(&f, a, b);
    let mut neval = points;

    let mut tolerance = epsabs.max(epsrel * result0.abs());

    let first = IntegrationResult::new(result0, abserr0, neval, 1);
    if abserr0 <= cast::<T>(100.0) * T::epsilon() * resabs0 && abserr0 > tolerance {
        return handle_error(first, Termination::RoundOff);
    } else if (abserr0 <= tolerance && abserr0 != resasc0) || abserr0.is_zero() {
        return Ok(first);
    } else if limit <= 1 {
        return handle_error(first, Termination::TooManyIters);
    }

    // Initialization
    let mut workspace = IntegrationWorkSpace::new(limit);
    workspace.initialize(a, b, result0, abserr0);

    let mut table = ExtrapolationTable::new();
    table.append(result0);

    let mut area = result0;
    let mut errsum = abserr0;

    let mut res_ext = result0;
    let mut err_ext = T::max_value();

    let positive_integrand = test_positivity(result0, resabs0);

    let mut extrapolate = false;
    let mut disallow_extrapolation = false;

    // Roundoff detection counters
    let mut roundoff_type1: usize = 0;
    let mut roundoff_type2: usize = 0;
    let mut roundoff_type3: usize = 0;

    let mut code = Termination::Success;
    let mut error_type2 = false;

    let mut error_over_large_intervals = T::zero();
    let mut ertest = T::zero();
    let mut correc = T::zero();
    let mut ktmin: usize = 0;

    let mut iteration: usize = 1;

    // `true` when the subdivision sum is the answer, `false` when the
    // extrapolated value is.
    let use_sum = 'bisect: {
        while iteration < limit {
            // Bisect the subinterval with the largest error estimate
            let (a_i, b_i, r_i, e_i) = workspace.worst();

            let current_level = workspace.current_level() + 1;

            let a1 = a_i;
            let b1 = (a_i + b_i) / cast(2.0);
            let a2 = b1;
            let b2 = b_i;

            iteration += 1;

            let (area1, error1, _, resasc1) = rule.evaluate(&f, a1, b1);
            let (area2, error2, _, resasc2) = rule.evaluate(&f, a2, b2);
            neval += 2 * points;

            let area12 = area1 + area2;
            let error12 = error1 + error2;
            let last_e_i = e_i;

            // Improve previous approximations to the integral and test for
            // accuracy.
            errsum = errsum + error12 - e_i;
            area = area + area12 - r_i;

            tolerance = epsabs.max(epsrel * area.abs());

            if resasc1 != error1 && resasc2 != error2 {
                let delta = r_i - area12;

                if delta.abs() <= cast::<T>(1e-5) * area12.abs()
                    && error12 >= cast::<T>(0.99) * e_i
                {
                    if !extrapolate {
                        roundoff_type1 += 1;
                    } else {
                        roundoff_type2 += 1;
                    }
                }
                if iteration > 10 && error12 > e_i {
                    roundoff_type3 += 1;
                }
            }

            // Test for roundoff and eventually set error flag
            if roundoff_type1 + roundoff_type2 >= 10 || roundoff_type3 >= 20 {
                code = Termination::RoundOff;
            }
            if roundoff_type2 >= 5 {
                error_type2 = true;
            }

            // Bad integrand behaviour at a point of the integration range
            if IntegrationWorkSpace::subinterval_too_small(a1, a2, b2) {
                code = Termination::BadIntegrand;
            }

            workspace.update((a1, b1, area1, error1), (a2, b2, area2, error2));

            trace!(
                "qags: iteration {}: [{:e}, {:e}] area = {:e}, errsum = {:e}",
                iteration,
                as_f64(a_i),
                as_f64(b_i),
                as_f64(area),
                as_f64(errsum)
            );

            if errsum <= tolerance {
                break 'bisect true;
            }

            if code != Termination::Success {
                break;
            }

            if iteration >= limit - 1 {
                code = Termination::TooManyIters;
                break;
            }

            if iteration == 2 {
                // Set up variables on the first bisection
                error_over_large_intervals = errsum;
                ertest = tolerance;
                table.append(area);
                continue;
            }

            if disallow_extrapolation {
                continue;
            }

            error_over_large_intervals = error_over_large_intervals - last_e_i;

            if current_level < workspace.max_level() {
                error_over_large_intervals = error_over_large_intervals + error12;
            }

            if !extrapolate {
                // Keep bisecting until the next interval is one of the
                // smallest.
                if workspace.large_interval() {
                    continue;
                }
                extrapolate = true;
                workspace.set_nrmax(1);
            }

            if !error_type2 && error_over_large_intervals > ertest && workspace.increase_nrmax() {
                continue;
            }

            // Perform extrapolation
            table.append(area);
            let (reseps, abseps) = table.accelerate();

            ktmin += 1;

            if ktmin > 5 && err_ext < cast::<T>(1e-3) * errsum {
                code = Termination::DivergeSlowConverge;
            }

            if abseps < err_ext {
                ktmin = 0;
                err_ext = abseps;
                res_ext = reseps;
                correc = error_over_large_intervals;
                ertest = epsabs.max(epsrel * reseps.abs());

                debug!(
                    "qags: extrapolated result = {:e}, abserr = {:e} after {} iterations",
                    as_f64(res_ext),
                    as_f64(err_ext),
                    iteration
                );

                if err_ext <= ertest {
                    break;
                }
            }

            // Prepare bisection of the smallest interval.
            if table.len() == 1 {
                disallow_extrapolation = true;
            }

            if code == Termination::DivergeSlowConverge {
                break;
            }

            // Work on interval with largest error
            workspace.reset_nrmax();
            extrapolate = false;
            error_over_large_intervals = errsum;
        }

        // Decide between the extrapolated value and the subdivision sum.
        if err_ext == T::max_value() {
            break 'bisect true;
        }

        if code != Termination::Success || error_type2 {
            if error_type2 {
                err_ext = err_ext + correc;
            }

            if code == Termination::Success {
                code = Termination::RoundOff;
            }

            if !res_ext.is_zero() && !area.is_zero() {
                if err_ext / res_ext.abs() > errsum / area.abs() {
                    break 'bisect true;
                }
            } else if err_ext > errsum {
                break 'bisect true;
            } else if area.is_zero() {
                break 'bisect false;
            }
        }

        // Test on divergence
        let max_area = res_ext.abs().max(area.abs());
        if !positive_integrand && max_area < cast::<T>(0.01) * resabs0 {
            break 'bisect false;
        }

        let ratio = res_ext / area;
        if ratio < cast::<T>(0.01) || ratio > cast::<T>(100.0) || errsum > area.abs() {
            code = Termination::DivergeSlowConverge;
        }

        false
    };

    let result = if use_sum {
        IntegrationResult::new(workspace.sum_results(), errsum, neval, workspace.size())
    } else {
        IntegrationResult::new(res_ext, err_ext, neval, workspace.size())
    };

    debug!(
        "qags: stopped after {} iterations with {:?}, result = {:e}, abserr = {:e}",
        iteration,
        code,
        as_f64(result.val),
        as_f64(result.err)
    );

    handle_error(result, code)
}
