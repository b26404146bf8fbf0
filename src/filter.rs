use crate::error::FilterError;
use crate::mask::ValidityMask;
use crate::series::{Filtered, Series};

/// Shared capability of every compression filter.
///
/// Implementors only decide which samples are significant
/// ([`mask_series`](Filter::mask_series)); validation and compaction are
/// provided. Invocations are pure: a filter holds nothing but its tolerance,
/// so one instance can serve many threads at once.
pub trait Filter: Send + Sync {
    /// Stable registry name of the algorithm.
    fn name(&self) -> &'static str;

    /// Maximum permitted deviation before a sample counts as significant.
    fn tolerance(&self) -> f64;

    /// Replaces the tolerance. Rejects negative or NaN values.
    fn set_tolerance(&mut self, tolerance: f64) -> Result<(), FilterError>;

    /// Scans a validated series once and decides which samples to keep.
    fn mask_series(&self, series: &Series<'_>) -> ValidityMask;

    /// Validates the input and computes its validity mask.
    fn mask(&self, timestamps: &[f64], values: &[f64]) -> Result<ValidityMask, FilterError> {
        let series = Series::new(timestamps, values)?;
        Ok(self.mask_series(&series))
    }

    /// Validates the input, scans it and returns the retained samples.
    fn filter(&self, timestamps: &[f64], values: &[f64]) -> Result<Filtered, FilterError> {
        let series = Series::new(timestamps, values)?;
        let mask = self.mask_series(&series);
        let filtered = mask.compact(&series);

        log::debug!(
            "{}: kept {} of {} samples (tolerance {}, ratio {:.2})",
            self.name(),
            filtered.len(),
            series.len(),
            self.tolerance(),
            filtered.compression_ratio(series.len()),
        );
        Ok(filtered)
    }
}
