use crate::result::{IntegrationResult, IntegrationRetCode};
use crate::utils::as_f64;
use log::warn;
use num::Float;
use thiserror::Error;

/// Failure of an integration. Every failure detected after the integrand
/// has been evaluated carries the best estimate available at that point.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum IntegrationError<T> {
    #[error("tolerance cannot be achieved with the given epsabs and epsrel")]
    ToleranceUnreachable { epsabs: T, epsrel: T },
    #[error("invalid integration interval")]
    InvalidInterval { a: T, b: T },
    #[error("cannot reach tolerance because of roundoff error")]
    RoundOff(IntegrationResult<T>),
    #[error("bad integrand behavior found in the integration interval")]
    BadIntegrand(IntegrationResult<T>),
    #[error("maximum number of iterations reached")]
    TooManyIters(IntegrationResult<T>),
    #[error("integral is divergent, or slowly convergent")]
    DivergeSlowConverge(IntegrationResult<T>),
}

/// Requested Gauss-Kronrod order is not tabulated.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("no Gauss-Kronrod rule with {0} points (expected 15, 21, 31, 41, 51 or 61)")]
pub struct InvalidRuleOrder(pub usize);

impl<T: Float> IntegrationError<T> {
    /// Classification of the failure.
    pub fn code(&self) -> IntegrationRetCode {
        match self {
            IntegrationError::ToleranceUnreachable { .. } => IntegrationRetCode::BadTol,
            IntegrationError::InvalidInterval { .. } => IntegrationRetCode::InvalidInterval,
            IntegrationError::RoundOff(_) => IntegrationRetCode::RoundOff,
            IntegrationError::BadIntegrand(_) => IntegrationRetCode::BadIntegrand,
            IntegrationError::TooManyIters(_) => IntegrationRetCode::TooManyIters,
            IntegrationError::DivergeSlowConverge(_) => IntegrationRetCode::DivergeSlowConverge,
        }
    }

    /// Best estimate obtained before the failure, if the integrand was
    /// evaluated at all.
    pub fn estimate(&self) -> Option<IntegrationResult<T>> {
        match *self {
            IntegrationError::ToleranceUnreachable { .. }
            | IntegrationError::InvalidInterval { .. } => None,
            IntegrationError::RoundOff(r)
            | IntegrationError::BadIntegrand(r)
            | IntegrationError::TooManyIters(r)
            | IntegrationError::DivergeSlowConverge(r) => Some(r),
        }
    }

    /// Flip the sign of the carried estimate (reversed interval).
    pub(crate) fn negate(self) -> Self {
        match self {
            IntegrationError::RoundOff(r) => IntegrationError::RoundOff(r.negate()),
            IntegrationError::BadIntegrand(r) => IntegrationError::BadIntegrand(r.negate()),
            IntegrationError::TooManyIters(r) => IntegrationError::TooManyIters(r.negate()),
            IntegrationError::DivergeSlowConverge(r) => {
                IntegrationError::DivergeSlowConverge(r.negate())
            }
            other => other,
        }
    }

    pub(crate) fn issue_warning(&self) {
        match self {
            IntegrationError::ToleranceUnreachable { epsabs, epsrel } => warn!(
                "{}: epsabs = {:e}, epsrel = {:e}",
                self,
                as_f64(*epsabs),
                as_f64(*epsrel)
            ),
            IntegrationError::InvalidInterval { a, b } => {
                warn!("{}: [{}, {}]", self, as_f64(*a), as_f64(*b))
            }
            IntegrationError::RoundOff(r)
            | IntegrationError::BadIntegrand(r)
            | IntegrationError::TooManyIters(r)
            | IntegrationError::DivergeSlowConverge(r) => warn!(
                "{}: result = {:e}, abserr = {:e}, neval = {}",
                self,
                as_f64(r.val),
                as_f64(r.err),
                r.neval
            ),
        }
    }

    /// Log the failure and hand it back, for use in `Err(..)` position.
    pub(crate) fn warned(self) -> Self {
        self.issue_warning();
        self
    }
}

/// How a driver loop ended. Input validation fails before any driver runs,
/// so those outcomes have no variant here.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Termination {
    Success,
    RoundOff,
    BadIntegrand,
    TooManyIters,
    DivergeSlowConverge,
}

/// Given how a driver stopped, return the result or raise the matching error.
pub(crate) fn handle_error<T: Float>(
    result: IntegrationResult<T>,
    code: Termination,
) -> Result<IntegrationResult<T>, IntegrationError<T>> {
    let err = match code {
        Termination::Success => return Ok(result),
        Termination::RoundOff => IntegrationError::RoundOff(result),
        Termination::BadIntegrand => IntegrationError::BadIntegrand(result),
        Termination::TooManyIters => IntegrationError::TooManyIters(result),
        Termination::DivergeSlowConverge => IntegrationError::DivergeSlowConverge(result),
    };
    Err(err.warned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_error() {
        let r = IntegrationResult::new(1.0, 1e-3, 21, 1);

        assert_eq!(handle_error(r, Termination::Success), Ok(r));

        for (exit, code) in [
            (Termination::RoundOff, IntegrationRetCode::RoundOff),
            (Termination::BadIntegrand, IntegrationRetCode::BadIntegrand),
            (Termination::TooManyIters, IntegrationRetCode::TooManyIters),
            (
                Termination::DivergeSlowConverge,
                IntegrationRetCode::DivergeSlowConverge,
            ),
        ] {
            let err = handle_error(r, exit).unwrap_err();
            assert_eq!(err.code(), code);
            assert_eq!(err.estimate(), Some(r));
        }
    }

    #[test]
    fn test_negate_keeps_error_bound() {
        let r = IntegrationResult::new(2.5, 1e-6, 63, 2);
        let err = IntegrationError::TooManyIters(r).negate();

        let est = err.estimate().unwrap();
        assert_eq!(est.val, -2.5);
        assert_eq!(est.err, 1e-6);
        assert_eq!(est.neval, 63);

        let bad = IntegrationError::InvalidInterval { a: 0.0, b: f64::NAN }.negate();
        assert_eq!(bad.estimate(), None);
        assert_eq!(bad.code(), IntegrationRetCode::InvalidInterval);
    }

    #[test]
    fn test_display() {
        let err = IntegrationError::ToleranceUnreachable {
            epsabs: 0.0,
            epsrel: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "tolerance cannot be achieved with the given epsabs and epsrel"
        );
        assert_eq!(
            InvalidRuleOrder(17).to_string(),
            "no Gauss-Kronrod rule with 17 points (expected 15, 21, 31, 41, 51 or 61)"
        );
    }
}
