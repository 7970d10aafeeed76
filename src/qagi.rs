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

//! Integration over unbounded ranges.
//!
//! Each range is mapped onto `(0, 1]` with `x = (1 - t) / t` and the result
//! integrated with [`qags`]. The rules never sample the endpoint `t = 0`.

use num::Float;

use crate::error::IntegrationError;
use crate::qags::qags;
use crate::qk::QuadratureRule;
use crate::result::IntegrationResult;

/// Integrate `f` over `(-inf, inf)` using
/// `f(x) -> [f((1 - t) / t) + f(-(1 - t) / t)] / t^2`.
pub fn qagi<T, F, R>(
    f: F,
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
    let transformed = |t: T| -> T {
        let x = (T::one() - t) / t;
        let y = f(x) + f(-x);
        (y / t) / t
    };
    qags(transformed, T::zero(), T::one(), epsabs, epsrel, limit, rule)
}

/// Integrate `f` over `[a, inf)` using `f(x) -> f(a + (1 - t) / t) / t^2`.
pub fn qagiu<T, F, R>(
    f: F,
    a: T,
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
    let transformed = |t: T| -> T {
        let x = a + (T::one() - t) / t;
        (f(x) / t) / t
    };
    qags(transformed, T::zero(), T::one(), epsabs, epsrel, limit, rule)
}

/// Integrate `f` over `(-inf, b]` using `f(x) -> f(b - (1 - t) / t) / t^2`.
pub fn qagil<T, F, R>(
    f: F,
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
    let transformed = |t: T| -> T {
        let x = b - (T::one() - t) / t;
        (f(x) / t) / t
    };
    qags(transformed, T::zero(), T::one(), epsabs, epsrel, limit, rule)
}
