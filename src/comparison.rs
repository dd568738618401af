//! Side-by-Side Model Comparison
//!
//! Runs both estimators over the same yearly series and target years so a
//! caller can tabulate the trend-line and polynomial forecasts next to
//! each other.

use thiserror::Error;

use crate::config::{impl_common_cfg, CommonCfg};
use crate::estimator::{Estimator, Region, Span};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::newton::{self, NewtonCfg};
use crate::methods::Method;
use crate::regression::errors::RegressionError;
use crate::regression::linear::{self, LinearCfg};
use crate::series::SeriesError;

/// Comparison errors. Wraps whichever estimator rejected the input.
#[derive(Debug, Error)]
pub enum ComparisonError {
    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Regression(#[from] RegressionError),

    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

/// Comparison configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`ComparisonCfg::new`] then the setters.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> ComparisonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(ComparisonCfg<'a>);

/// Both forecasts over the same target years.
///
/// [`ComparisonReport`]
/// - `method_names` : column labels, regression first
/// - `n_provided`   : number of input data points
/// - `n_evaluated`  : number of target years
/// - `span`         : observed year range of the input data
/// - `regression`   : trend-line prediction per target year
/// - `newton`       : polynomial interpolation per target year
/// - `regions`      : interpolation/extrapolation flag per target year
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub method_names: [&'static str; 2],
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub span: Span,
    pub regression: Vec<f64>,
    pub newton: Vec<f64>,
    pub regions: Vec<Region>,
}

/// Runs both estimators over the configured points and target years.
///
/// # Behavior
/// - Fits the least-squares line and builds the Newton polynomial from
///   the same points, so both columns answer for identical data.
/// - Evaluates each at every target year; the shared region flag comes
///   from the common observed span.
///
/// # Errors
/// Whichever estimator rejects the input first: duplicate years fail the
/// polynomial, a single repeated year for every point fails the
/// regression, and the shared slice validation fails both.
pub fn compare(cfg: ComparisonCfg) -> Result<ComparisonReport, ComparisonError> {
    let points = cfg.common.points();
    let evals = cfg.common.x_eval();

    let line = linear::fit(LinearCfg::new().set_points(points)?)?;
    let poly = newton::build(NewtonCfg::new().set_points(points)?)?;

    let span = poly.span();
    let mut report = ComparisonReport {
        method_names: [
            Method::LinearRegression.method_name(),
            Method::Newton.method_name(),
        ],
        n_provided: points.len(),
        n_evaluated: evals.len(),
        span,
        regression: Vec::with_capacity(evals.len()),
        newton: Vec::with_capacity(evals.len()),
        regions: Vec::with_capacity(evals.len()),
    };

    for &xq in evals {
        report.regression.push(line.eval(xq));
        report.newton.push(poly.eval(xq));
        report.regions.push(span.region(xq));
    }

    Ok(report)
}
