//! Estimation engine for yearly small-business (UMKM) counts.
//!
//! Provides three independent, pure computational components:
//! - [`regression`]    : ordinary least-squares trend fitting and prediction
//! - [`interpolation`] : Newton divided-difference polynomial interpolation
//!   and extrapolation
//! - [`evaluation`]    : forecast accuracy metrics (RMSE, MAE, MAPE)
//!
//! [`comparison`] runs both estimators side by side over the same data.
//!
//! All entry points borrow caller-owned observation slices read-only,
//! perform no I/O, and fail fast with a typed error instead of returning
//! non-finite values.

// shared types and configuration
pub mod config;
pub mod estimator;
pub mod methods;
pub mod series;

// estimation components
pub mod evaluation;
pub mod interpolation;
pub mod regression;

pub mod comparison;

pub use estimator::Estimator;
