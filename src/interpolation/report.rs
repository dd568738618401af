//! Defines the [`InterpolationReport`] struct returned by an
//! interpolation run.
//!
//! The report summarizes the fitted polynomial (its divided-difference
//! coefficients and observed year range) along with the evaluated targets,
//! so a caller can render the coefficient table and flag extrapolated
//! targets without recomputing anything.

use crate::estimator::{Estimator, Region, Span};
use crate::interpolation::newton::NewtonPolynomial;
use crate::methods::Method;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `method_name`  : name of the estimation method (`"newton"`)
/// - `n_provided`   : number of input data points
/// - `n_evaluated`  : number of target years evaluated
/// - `coefficients` : divided-difference coefficients, order 0..n-1
/// - `span`         : observed year range of the input data
/// - `evaluated`    : interpolated counts at each target year
/// - `regions`      : interpolation/extrapolation flag per target year
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub method_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub coefficients: Vec<f64>,
    pub span: Span,
    pub evaluated: Vec<f64>,
    pub regions: Vec<Region>,
}

impl InterpolationReport {
    pub fn new(poly: &NewtonPolynomial, n_evaluated: usize) -> Self {
        Self {
            method_name: Method::Newton.method_name(),
            n_provided: poly.coefficients().len(),
            n_evaluated,
            coefficients: poly.coefficients().to_vec(),
            span: poly.span(),
            evaluated: Vec::new(),
            regions: Vec::new(),
        }
    }
}
