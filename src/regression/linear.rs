//! Least-Squares Trend Fitting
//!
//! Fits a straight line `count = slope * year + intercept` to a yearly
//! series by [ordinary least squares](https://en.wikipedia.org/wiki/Ordinary_least_squares)
//! in closed form, then predicts counts at arbitrary target years.

use crate::config::{impl_common_cfg, CommonCfg};
use crate::estimator::{Estimator, Span};
use crate::regression::errors::RegressionError;
use crate::regression::report::RegressionReport;
use crate::series::{self, DataPoint};

/// Linear regression configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`LinearCfg::new`] then the setters.
#[derive(Debug, Clone, Copy)]
pub struct LinearCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> LinearCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(LinearCfg<'a>);

/// Fitted trend line `count = slope * year + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    span: Span,
}

impl Estimator for LinearFit {
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    fn span(&self) -> Span {
        self.span
    }
}

/// Fits the least-squares line through the configured points.
///
/// # Behavior
/// With `n` points and sums `sum_x`, `sum_y`, `sum_xy`, `sum_xx` over
/// the years and counts:
///
/// ```text
/// slope     = (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x^2)
/// intercept = (sum_y - slope * sum_x) / n
/// ```
///
/// The zero-variance case (all years equal, denominator exactly zero) is
/// rejected up front on the integer years, so the division never sees it.
///
/// # Returns
/// [`LinearFit`] with the slope, intercept, and observed year range.
///
/// # Errors
/// - [`crate::series::SeriesError::InsufficientPoints`] if fewer than 2
///   points are configured, via [`RegressionError::Series`].
/// - [`RegressionError::DegenerateYears`] if every point shares one year.
pub fn fit(cfg: LinearCfg) -> Result<LinearFit, RegressionError> {
    cfg.common.validate()?;
    let points = cfg.common.points();

    let sorted = series::sorted_by_year(points);
    let first = sorted[0];
    let last = sorted[sorted.len() - 1];
    if first.year == last.year {
        return Err(RegressionError::DegenerateYears {
            year: first.year,
            n: sorted.len(),
        });
    }

    let n = points.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for p in points {
        let x = p.x();
        sum_x += x;
        sum_y += p.count;
        sum_xy += x * p.count;
        sum_xx += x * x;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / n;

    Ok(LinearFit {
        slope,
        intercept,
        span: Span { x_min: first.x(), x_max: last.x() },
    })
}

/// Fits the trend line and predicts counts at each configured target year.
///
/// # Returns
/// [`RegressionReport`] containing
/// - `method_name` : `"linear_regression"`
/// - `slope`, `intercept` : the fitted line
/// - `n_provided`  : number of data points
/// - `n_evaluated` : number of target years
/// - `span`        : observed year range
/// - `predicted`   : predicted count per target year
/// - `regions`     : whether each target falls inside the observed range
///
/// # Errors
/// Same as [`fit`].
pub fn regress(cfg: LinearCfg) -> Result<RegressionReport, RegressionError> {
    let evals = cfg.common.x_eval();
    let line = fit(cfg)?;

    let mut report = RegressionReport::new(&line, cfg.common.points().len(), evals.len());
    report.predicted.reserve(evals.len());
    report.regions.reserve(evals.len());

    for &xq in evals {
        report.predicted.push(line.eval(xq));
        report.regions.push(line.span().region(xq));
    }

    Ok(report)
}

/// Predicts the count at a single target year.
///
/// Convenience wrapper over [`regress`] for callers that only need one
/// value. The target year goes through the same finiteness validation as
/// any other evaluation year.
pub fn predict(points: &[DataPoint], target_year: f64) -> Result<f64, RegressionError> {
    let x_eval = [target_year];
    let cfg = LinearCfg::new().set_points(points)?.set_x_eval(&x_eval)?;
    Ok(regress(cfg)?.predicted[0])
}
