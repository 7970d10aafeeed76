pub use crate::error::{IntegrationError, InvalidRuleOrder};
pub use crate::factorial::{FactorialTable, LnFactorialTable};
pub use crate::qk::{QkRule, QuadratureRule};
pub use crate::quad::{
    integrate, integrate_from_infinity, integrate_infinite, integrate_singular, integrate_smooth,
    integrate_to_infinity, Integrator, IntegratorBuilder, DEFAULT_LIMIT,
};
pub use crate::result::{IntegrationResult, IntegrationRetCode};
