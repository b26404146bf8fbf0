/// Reason a (timestamps, values) pair was rejected before filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    /// No samples were supplied.
    #[error("time series is empty")]
    Empty,
    /// The two sequences are not index-aligned.
    #[error("timestamps and values differ in length: {timestamps} != {values}")]
    LengthMismatch { timestamps: usize, values: usize },
}

/// Error type for filter invocations.
///
/// A failed invocation never yields a partial result.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum FilterError {
    #[error("invalid input data: {0}")]
    InvalidInput(#[from] InvalidInput),
    /// Tolerance is negative or NaN.
    #[error("invalid tolerance {0}: must be a non-negative number")]
    InvalidTolerance(f64),
}

/// Checks that a tolerance is usable as a deviation threshold.
pub(crate) fn check_tolerance(tolerance: f64) -> Result<f64, FilterError> {
    if tolerance.is_nan() || tolerance < 0.0 {
        return Err(FilterError::InvalidTolerance(tolerance));
    }
    Ok(tolerance)
}
