use thiserror::Error;

use crate::series::SeriesError;

/// Interpolation errors.
///
/// ┌ Shared input validation ([`SeriesError`], wrapped transparently)
/// └ Repeated years, which would divide by zero in the difference table
#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error("duplicate year {year} in data points")]
    DuplicateYear { year: i32 },
}
