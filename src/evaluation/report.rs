//! Defines the [`EvaluationReport`] struct returned by the accuracy
//! evaluator.

/// Forecast accuracy summary over one actual/predicted pairing.
///
/// [`EvaluationReport`]
/// - `rmse`        : root mean square error, same scale as the counts
/// - `mae`         : mean absolute error, same scale as the counts
/// - `mape`        : mean absolute percentage error, in percent
/// - `mse`         : mean square error (the RMSE intermediate)
/// - `n_evaluated` : number of pairs the metrics were computed over
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationReport {
    pub rmse: f64,
    pub mae: f64,
    pub mape: f64,
    pub mse: f64,
    pub n_evaluated: usize,
}
