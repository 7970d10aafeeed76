use num::Float;

use crate::error::IntegrationError;
use crate::qag::qag;
use crate::qagi::{qagi, qagil, qagiu};
use crate::qags::qags;
use crate::qk::{QkRule, QK15, QK21, QK31, QK41, QK51, QK61};
use crate::result::IntegrationResult;
use crate::utils::{cast, check_finite_interval};

/// Default maximum number of subintervals.
pub const DEFAULT_LIMIT: usize = 1024;

/// Integrate a smooth function `f` from `a` to `b` with the plain adaptive
/// Gauss-Kronrod driver using `rule`.
///
/// Higher-order rules converge more rapidly for most functions, but may slow
/// convergence for less well-behaved ones. Both bounds must be finite.
pub fn integrate_smooth<T, F>(
    f: F,
    a: T,
    b: T,
    epsabs: T,
    epsrel: T,
    max_iter: usize,
    rule: QkRule,
) -> Result<IntegrationResult<T>, IntegrationError<T>>
where
    T: Float,
    F: Fn(T) -> T,
{
    check_finite_interval(a, b).map_err(IntegrationError::warned)?;

    match rule {
        QkRule::Gauss15 => qag(f, a, b, epsabs, epsrel, max_iter, &QK15),
        QkRule::Gauss21 => qag(f, a, b, epsabs, epsrel, max_iter, &QK21),
        QkRule::Gauss31 => qag(f, a, b, epsabs, epsrel, max_iter, &QK31),
        QkRule::Gauss41 => qag(f, a, b, epsabs, epsrel, max_iter, &QK41),
        QkRule::Gauss51 => qag(f, a, b, epsabs, epsrel, max_iter, &QK51),
        QkRule::Gauss61 => qag(f, a, b, epsabs, epsrel, max_iter, &QK61),
    }
}

/// Integrate `f` from `a` to `b` with bisection and epsilon extrapolation,
/// for discontinuous functions or integrable endpoint singularities. Both
/// bounds must be finite.
pub fn integrate_singular<T, F>(
    f: F,
    a: T,
    b: T,
    epsabs: T,
    epsrel: T,
    max_iter: usize,
) -> Result<IntegrationResult<T>, IntegrationError<T>>
where
    T: Float,
    F: Fn(T) -> T,
{
    check_finite_interval(a, b).map_err(IntegrationError::warned)?;
    qags(f, a, b, epsabs, epsrel, max_iter, &QK21)
}

/// Integrate `f` from -infinity to +infinity.
pub fn integrate_infinite<T, F>(
    f: F,
    epsabs: T,
    epsrel: T,
    max_iter: usize,
) -> Result<IntegrationResult<T>, IntegrationError<T>>
where
    T: Float,
    F: Fn(T) -> T,
{
    qagi(f, epsabs, epsrel, max_iter, &QK21)
}

/// Integrate `f` from -infinity to a finite `b`.
pub fn integrate_from_infinity<T, F>(
    f: F,
    b: T,
    epsabs: T,
    epsrel: T,
    max_iter: usize,
) -> Result<IntegrationResult<T>, IntegrationError<T>>
where
    T: Float,
    F: Fn(T) -> T,
{
    if !b.is_finite() {
        return Err(IntegrationError::InvalidInterval {
            a: T::neg_infinity(),
            b,
        }
        .warned());
    }
    qagil(f, b, epsabs, epsrel, max_iter, &QK21)
}

/// Integrate `f` from a finite `a` to +infinity.
pub fn integrate_to_infinity<T, F>(
    f: F,
    a: T,
    epsabs: T,
    epsrel: T,
    max_iter: usize,
) -> Result<IntegrationResult<T>, IntegrationError<T>>
where
    T: Float,
    F: Fn(T) -> T,
{
    if !a.is_finite() {
        return Err(IntegrationError::InvalidInterval {
            a,
            b: T::infinity(),
        }
        .warned());
    }
    qagiu(f, a, epsabs, epsrel, max_iter, &QK21)
}

/// Integrate `f` from `a` to `b`, either of which may be infinite.
///
/// Finite intervals go to the extrapolating driver; unbounded ones are
/// mapped onto `(0, 1]` first. Bounds given in decreasing order flip the sign
/// of the result. NaN bounds and intervals from an infinity to the same
/// infinity are rejected before `f` is called.
///
/// # Examples
///
/// ```
/// use kronrod_quadpack::quad::{integrate, DEFAULT_LIMIT};
///
/// let f = |x: f64| (-x * x).exp();
/// let res = integrate(f, f64::NEG_INFINITY, f64::INFINITY, 1e-10, 0.0, DEFAULT_LIMIT).unwrap();
/// assert!((res.val - std::f64::consts::PI.sqrt()).abs() < 1e-8);
/// ```
pub fn integrate<T, F>(
    f: F,
    a: T,
    b: T,
    epsabs: T,
    epsrel: T,
    max_iter: usize,
) -> Result<IntegrationResult<T>, IntegrationError<T>>
where
    T: Float,
    F: Fn(T) -> T,
{
    let invalid = || Err(IntegrationError::InvalidInterval { a, b }.warned());

    if a.is_nan() || b.is_nan() {
        return invalid();
    }

    let inf = T::infinity();
    let neg_inf = T::neg_infinity();

    if a == neg_inf {
        if b == inf {
            integrate_infinite(f, epsabs, epsrel, max_iter)
        } else if b == neg_inf {
            invalid()
        } else {
            integrate_from_infinity(f, b, epsabs, epsrel, max_iter)
        }
    } else if a == inf {
        if b == inf {
            invalid()
        } else if b == neg_inf {
            integrate_infinite(f, epsabs, epsrel, max_iter)
                .map(IntegrationResult::negate)
                .map_err(IntegrationError::negate)
        } else {
            integrate_to_infinity(f, b, epsabs, epsrel, max_iter)
                .map(IntegrationResult::negate)
                .map_err(IntegrationError::negate)
        }
    } else if b == inf {
        integrate_to_infinity(f, a, epsabs, epsrel, max_iter)
    } else if b == neg_inf {
        integrate_from_infinity(f, a, epsabs, epsrel, max_iter)
            .map(IntegrationResult::negate)
            .map_err(IntegrationError::negate)
    } else {
        integrate_singular(f, a, b, epsabs, epsrel, max_iter)
    }
}

/// One-dimensional adaptive Gauss-Kronrod integrator holding its
/// tolerances, subinterval limit and rule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Integrator<T> {
    /// Absolute tolerance.
    pub epsabs: T,
    /// Relative tolerance.
    pub epsrel: T,
    /// Maximum number of subintervals.
    pub limit: usize,
    /// Rule used by [`Integrator::integrate_smooth`].
    pub rule: QkRule,
}

impl<T: Float> Integrator<T> {
    /// Integrate `f` over `a` to `b`. For infinite bounds use
    /// `f64::INFINITY` or `f64::NEG_INFINITY`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kronrod_quadpack::quad::IntegratorBuilder;
    ///
    /// let gk = IntegratorBuilder::default().epsrel(1e-8).epsabs(1e-8).build();
    /// let f = |x: f64| x * x;
    /// let res = gk.integrate(f, 0.0, 1.0).unwrap();
    /// assert!((res.val - 1.0 / 3.0).abs() < 1e-8);
    /// ```
    pub fn integrate<F>(&self, f: F, a: T, b: T) -> Result<IntegrationResult<T>, IntegrationError<T>>
    where
        F: Fn(T) -> T,
    {
        integrate(f, a, b, self.epsabs, self.epsrel, self.limit)
    }

    /// Plain adaptive integration over a finite interval with `self.rule`.
    pub fn integrate_smooth<F>(
        &self,
        f: F,
        a: T,
        b: T,
    ) -> Result<IntegrationResult<T>, IntegrationError<T>>
    where
        F: Fn(T) -> T,
    {
        integrate_smooth(f, a, b, self.epsabs, self.epsrel, self.limit, self.rule)
    }

    /// Extrapolating adaptive integration over a finite interval.
    pub fn integrate_singular<F>(
        &self,
        f: F,
        a: T,
        b: T,
    ) -> Result<IntegrationResult<T>, IntegrationError<T>>
    where
        F: Fn(T) -> T,
    {
        integrate_singular(f, a, b, self.epsabs, self.epsrel, self.limit)
    }
}

/// Builder struct used to construct an integrator with wanted parameters.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntegratorBuilder<T> {
    /// Absolute tolerance.
    epsabs: Option<T>,
    /// Relative tolerance.
    epsrel: Option<T>,
    /// Maximum number of subintervals.
    limit: Option<usize>,
    /// Gauss-Kronrod rule for smooth integrands.
    rule: Option<QkRule>,
}

impl<T: Float> IntegratorBuilder<T> {
    /// Set the absolute tolerance.
    pub fn epsabs(mut self, epsabs: T) -> Self {
        self.epsabs = Some(epsabs);
        self
    }
    /// Set the relative tolerance.
    pub fn epsrel(mut self, epsrel: T) -> Self {
        self.epsrel = Some(epsrel);
        self
    }
    /// Set the maximum number of subintervals.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
    /// Set the Gauss-Kronrod rule used for smooth integrands.
    pub fn rule(mut self, rule: QkRule) -> Self {
        self.rule = Some(rule);
        self
    }
    /// Build the integrator.
    pub fn build(self) -> Integrator<T> {
        Integrator {
            epsabs: self.epsabs.unwrap_or_else(|| cast(1e-8)),
            epsrel: self.epsrel.unwrap_or_else(|| cast(1e-8)),
            limit: self.limit.unwrap_or(DEFAULT_LIMIT),
            rule: self.rule.unwrap_or_default(),
        }
    }
}
