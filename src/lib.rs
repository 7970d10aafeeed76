//! Adaptive one-dimensional numerical integration in the style of QUADPACK.
//!
//! The entry points in [`quad`] cover finite, semi-infinite and infinite
//! intervals:
//!
//! ```
//! use kronrod_quadpack::prelude::*;
//!
//! let f = |x: f64| x.sin();
//! let res = integrate_smooth(f, 0.0, std::f64::consts::PI, 1e-10, 0.0, DEFAULT_LIMIT, QkRule::Gauss61)
//!     .unwrap();
//! assert!((res.val - 2.0).abs() < 1e-10);
//! ```
//!
//! Every failure is an [`IntegrationError`](error::IntegrationError); those
//! raised after the integrand has been evaluated carry the best estimate
//! reached so far.
#![allow(clippy::excessive_precision, clippy::too_many_arguments)]

pub mod error;
pub mod extrap;
pub mod factorial;
pub mod prelude;
pub mod qag;
pub mod qagi;
pub mod qags;
pub mod qk;
pub mod quad;
pub mod result;
#[cfg(test)]
pub(crate) mod test_utils;
pub(crate) mod utils;
pub mod workspace;
