use num::Float;

/// Codes for the outcome of an integration
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum IntegrationRetCode {
    /// Successful integration
    Success,
    /// Round-off error prevented the tolerance from being reached
    RoundOff,
    /// A subinterval collapsed without meeting the tolerance
    BadIntegrand,
    /// More iterations are required to reach tolerance
    TooManyIters,
    /// Integral is either divergent or slowly convergent
    DivergeSlowConverge,
    /// Invalid tolerances passed to integrator
    BadTol,
    /// Malformed integration bounds
    InvalidInterval,
}

/// Structure for the result of an integration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntegrationResult<T> {
    /// Value of the integration
    pub val: T,
    /// Estimated error of the integration
    pub err: T,
    /// Number of integrand evaluations
    pub neval: usize,
    /// Number of subintervals in the final partition
    pub intervals: usize,
}

impl<T: Float> IntegrationResult<T> {
    pub(crate) fn new(val: T, err: T, neval: usize, intervals: usize) -> Self {
        IntegrationResult {
            val,
            err,
            neval,
            intervals,
        }
    }

    /// The same estimate for the reversed interval.
    pub(crate) fn negate(self) -> Self {
        IntegrationResult {
            val: -self.val,
            ..self
        }
    }

    /// `(value, error)` pair.
    pub fn into_pair(self) -> (T, T) {
        (self.val, self.err)
    }
}
