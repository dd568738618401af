//! Forecast Accuracy Metrics
//!
//! Computes [RMSE, MAE, and MAPE](https://en.wikipedia.org/wiki/Mean_absolute_percentage_error)
//! over parallel actual/predicted series. Element order carries no
//! meaning beyond positional pairing.

use crate::evaluation::errors::EvaluationError;
use crate::evaluation::report::EvaluationReport;
use crate::series::EvaluationPoint;

fn validate(actual: &[f64], predicted: &[f64]) -> Result<(), EvaluationError> {
    if actual.len() != predicted.len() {
        return Err(EvaluationError::UnequalLength {
            actual_len: actual.len(),
            predicted_len: predicted.len(),
        });
    }
    if actual.is_empty() {
        return Err(EvaluationError::EmptyInput);
    }
    if let Some(idx) = actual.iter().position(|v| !v.is_finite()) {
        return Err(EvaluationError::NonFiniteActual { idx });
    }
    if let Some(idx) = predicted.iter().position(|v| !v.is_finite()) {
        return Err(EvaluationError::NonFinitePredicted { idx });
    }
    Ok(())
}

/// Computes forecast accuracy metrics over parallel series.
///
/// # Behavior
/// With `n` pairs and errors `e[i] = actual[i] - predicted[i]`:
///
/// ```text
/// mse  = (1/n) * sum(e[i]^2)
/// rmse = sqrt(mse)
/// mae  = (1/n) * sum(|e[i]|)
/// mape = (1/n) * sum(|e[i]| / |actual[i]|) * 100
/// ```
///
/// A zero actual value makes MAPE undefined; the evaluator rejects it
/// naming the offending index instead of letting Infinity through.
///
/// # Returns
/// [`EvaluationReport`] with the metrics and the pair count.
///
/// # Errors
/// - [`EvaluationError::UnequalLength`] if the series lengths differ
/// - [`EvaluationError::EmptyInput`] if the series are empty
/// - [`EvaluationError::NonFiniteActual`] / [`EvaluationError::NonFinitePredicted`]
///   on NaN/inf elements
/// - [`EvaluationError::UndefinedMape`] if any actual value is zero
pub fn evaluate(actual: &[f64], predicted: &[f64]) -> Result<EvaluationReport, EvaluationError> {
    validate(actual, predicted)?;

    let n = actual.len() as f64;

    let mut sq_sum = 0.0;
    let mut abs_sum = 0.0;
    let mut pct_sum = 0.0;
    for (idx, (&a, &p)) in actual.iter().zip(predicted.iter()).enumerate() {
        if a == 0.0 {
            return Err(EvaluationError::UndefinedMape { idx });
        }

        let err = a - p;
        sq_sum += err * err;
        abs_sum += err.abs();
        pct_sum += (err / a).abs();
    }

    let mse = sq_sum / n;

    Ok(EvaluationReport {
        rmse: mse.sqrt(),
        mae: abs_sum / n,
        mape: pct_sum / n * 100.0,
        mse,
        n_evaluated: actual.len(),
    })
}

/// Computes the same metrics over an accuracy table.
///
/// Splits the rows into their actual/predicted columns and defers to
/// [`evaluate`]; the years are carried by the caller for display only.
pub fn evaluate_points(points: &[EvaluationPoint]) -> Result<EvaluationReport, EvaluationError> {
    let actual: Vec<f64> = points.iter().map(|p| p.actual_count).collect();
    let predicted: Vec<f64> = points.iter().map(|p| p.predicted_count).collect();
    evaluate(&actual, &predicted)
}
