//! Defines the estimation method variants.
//!
//! Provides the [`Method`] enum, which enumerates both supported estimators.

/// Estimation method variants.
/// - [`Method::LinearRegression`] least-squares straight-line trend
/// - [`Method::Newton`]           divided-difference polynomial
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Method {
    LinearRegression,
    Newton,
}

impl Method {
    pub fn method_name(self) -> &'static str {
        match self {
            Method::LinearRegression => "linear_regression",
            Method::Newton => "newton",
        }
    }
}
