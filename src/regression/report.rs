//! Defines the [`RegressionReport`] struct returned by a regression run.

use crate::estimator::{Estimator, Region, Span};
use crate::methods::Method;
use crate::regression::linear::LinearFit;

/// Summary of a regression run.
///
/// [`RegressionReport`]
/// - `method_name` : name of the estimation method (`"linear_regression"`)
/// - `slope`       : fitted slope of the trend line
/// - `intercept`   : fitted intercept of the trend line
/// - `n_provided`  : number of input data points
/// - `n_evaluated` : number of target years evaluated
/// - `span`        : observed year range of the input data
/// - `predicted`   : predicted counts at each target year
/// - `regions`     : interpolation/extrapolation flag per target year
#[derive(Debug, Clone)]
pub struct RegressionReport {
    pub method_name: &'static str,
    pub slope: f64,
    pub intercept: f64,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub span: Span,
    pub predicted: Vec<f64>,
    pub regions: Vec<Region>,
}

impl RegressionReport {
    pub fn new(fit: &LinearFit, n_provided: usize, n_evaluated: usize) -> Self {
        Self {
            method_name: Method::LinearRegression.method_name(),
            slope: fit.slope,
            intercept: fit.intercept,
            n_provided,
            n_evaluated,
            span: fit.span(),
            predicted: Vec::new(),
            regions: Vec::new(),
        }
    }
}
