//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Coefficients are computed recursively by divided differences over the
//! points sorted by year and evaluated at target years using Horner's
//! scheme for numerical stability. The same polynomial serves targets
//! inside the observed year range and outside it; callers decide whether
//! to warn on extrapolation using the reported [`Span`].

use crate::config::{impl_common_cfg, CommonCfg};
use crate::estimator::{Estimator, Span};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::series::{self, DataPoint};

/// Newton interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`NewtonCfg::new`] then the setters. Points may be supplied in
///   any order; sorting happens internally.
#[derive(Debug, Clone, Copy)]
pub struct NewtonCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> NewtonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NewtonCfg<'a>);

/// Computes Newton divided-difference coefficients.
///
/// Returns a coefficient vector `c` s.t.
/// `P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})`.
///
/// Each pass collapses one column of the difference table in place; the
/// surviving head of the column is the next top-row coefficient.
#[inline]
fn divided_differences(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();

    let mut column = y.to_vec();
    let mut coeffs = Vec::with_capacity(n);
    coeffs.push(column[0]);

    for order in 1..n {
        for i in 0..n - order {
            column[i] = (column[i + 1] - column[i]) / (x[i + order] - x[i]);
        }
        coeffs.push(column[0]);
    }

    coeffs
}

/// Newton form of the interpolating polynomial through a yearly series.
///
/// Holds the divided-difference coefficients and the sorted years they
/// are centered on. Evaluation is exact at every original data point and
/// well defined everywhere else, endpoints and beyond included.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonPolynomial {
    coefficients: Vec<f64>,
    centers: Vec<f64>,
    span: Span,
}

impl NewtonPolynomial {
    /// Divided-difference coefficients, order 0 first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// The sorted years the polynomial is centered on.
    pub fn centers(&self) -> &[f64] {
        &self.centers
    }
}

impl Estimator for NewtonPolynomial {
    /// Evaluates the polynomial at `x` using Horner's nested form:
    ///
    /// ```text
    /// P(x) = c[0] + (x - x[0]) * [ c[1] + (x - x[1]) * [ ... c[n-1] ... ] ]
    /// ```
    fn eval(&self, x: f64) -> f64 {
        let c = &self.coefficients;
        let n = c.len();

        let mut p = c[n - 1];
        for j in (0..n - 1).rev() {
            p = c[j] + (x - self.centers[j]) * p;
        }

        p
    }

    fn span(&self) -> Span {
        self.span
    }
}

/// Builds the Newton polynomial through the configured points.
///
/// # Behavior
/// - Sorts a copy of the points ascending by year; the caller's slice is
///   untouched and may be in any order.
/// - Rejects repeated years before touching the difference table, since a
///   repeated year makes a finite difference divide by zero.
/// - Computes the divided-difference coefficient diagonal.
///
/// # Returns
/// [`NewtonPolynomial`] ready for evaluation at any target year.
///
/// # Errors
/// - [`crate::series::SeriesError::InsufficientPoints`] if fewer than 2
///   points are configured, via [`InterpolationError::Series`].
/// - [`InterpolationError::DuplicateYear`] if any year repeats.
pub fn build(cfg: NewtonCfg) -> Result<NewtonPolynomial, InterpolationError> {
    cfg.common.validate()?;

    let sorted = series::sorted_by_year(cfg.common.points());
    if let Some(year) = series::duplicate_year(&sorted) {
        return Err(InterpolationError::DuplicateYear { year });
    }

    let x: Vec<f64> = sorted.iter().map(|p| p.x()).collect();
    let y: Vec<f64> = sorted.iter().map(|p| p.count).collect();

    let coefficients = divided_differences(&x, &y);
    let span = Span::of_sorted(&x);

    Ok(NewtonPolynomial { coefficients, centers: x, span })
}

/// Performs Newton divided-difference interpolation.
///
/// # Behavior
/// - Builds the polynomial via [`build`].
/// - Evaluates it at each target year in `cfg`. Targets outside the
///   observed year range are evaluated the same way; the per-target
///   [`crate::estimator::Region`] in the report tells the caller which
///   results are extrapolated.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `method_name`  : `"newton"`
/// - `n_provided`   : number of (year, count) data points
/// - `n_evaluated`  : number of target years
/// - `coefficients` : divided-difference coefficients, order 0..n-1
/// - `span`         : observed year range
/// - `evaluated`    : interpolated counts at each target year
/// - `regions`      : interpolation/extrapolation flag per target year
///
/// # Errors
/// Same as [`build`].
pub fn interpolate(cfg: NewtonCfg) -> Result<InterpolationReport, InterpolationError> {
    let evals = cfg.common.x_eval();
    let poly = build(cfg)?;

    let mut report = InterpolationReport::new(&poly, evals.len());
    report.evaluated.reserve(evals.len());
    report.regions.reserve(evals.len());

    for &xq in evals {
        report.evaluated.push(poly.eval(xq));
        report.regions.push(poly.span().region(xq));
    }

    Ok(report)
}

/// Interpolates the count at a single target year.
///
/// Convenience wrapper over [`interpolate`] for callers that only need
/// one value. With exactly two points this reduces to linear
/// interpolation between them.
pub fn interpolate_at(points: &[DataPoint], target_year: f64) -> Result<f64, InterpolationError> {
    let x_eval = [target_year];
    let cfg = NewtonCfg::new().set_points(points)?.set_x_eval(&x_eval)?;
    Ok(interpolate(cfg)?.evaluated[0])
}
