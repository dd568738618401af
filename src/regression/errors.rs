use thiserror::Error;

use crate::series::SeriesError;

/// Regression errors.
///
/// ┌ Shared input validation ([`SeriesError`], wrapped transparently)
/// └ Zero variance in the independent variable
#[derive(Debug, Error)]
pub enum RegressionError {
    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error("degenerate input: all {n} points share year {year}")]
    DegenerateYears { year: i32, n: usize },
}
