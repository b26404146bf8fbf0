use crate::error::{check_tolerance, FilterError};
use crate::filter::Filter;
use crate::mask::ValidityMask;
use crate::series::Series;

/// Deadband filter keeping samples that stay within a fixed band of the
/// last retained value.
///
/// Each interior sample is compared against the value of the most recently
/// retained sample, and is retained when `|value - reference| <= tolerance`.
/// A retained sample becomes the new reference; a rejected one leaves it in
/// place, however many rejections follow in a row. The first and last
/// samples are always retained.
///
/// # Example
/// ```
/// use historian::{Filter, ToleranceBasedFilter};
///
/// let filter = ToleranceBasedFilter::new(0.5).unwrap();
/// let out = filter
///     .filter(&[0.0, 1.0, 2.0, 3.0, 4.0], &[10.0, 10.5, 10.2, 15.0, 15.1])
///     .unwrap();
/// assert_eq!(out.timestamps(), vec![0.0, 1.0, 2.0, 4.0]);
/// assert_eq!(out.values(), vec![10.0, 10.5, 10.2, 15.1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToleranceBasedFilter {
    tolerance: f64,
}

impl ToleranceBasedFilter {
    pub const NAME: &'static str = "ToleranceBasedFilter";

    /// Creates a filter with the given tolerance.
    pub fn new(tolerance: f64) -> Result<Self, FilterError> {
        Ok(Self {
            tolerance: check_tolerance(tolerance)?,
        })
    }
}

impl Filter for ToleranceBasedFilter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn tolerance(&self) -> f64 {
        self.tolerance
    }

    fn set_tolerance(&mut self, tolerance: f64) -> Result<(), FilterError> {
        self.tolerance = check_tolerance(tolerance)?;
        Ok(())
    }

    fn mask_series(&self, series: &Series<'_>) -> ValidityMask {
        let values = series.values();
        let mut mask = ValidityMask::for_series(series);
        let mut reference = values[0];

        for (i, &value) in values
            .iter()
            .enumerate()
            .take(series.last_index())
            .skip(1)
        {
            // NaN deviations fall outside the band.
            let within = (value - reference).abs() <= self.tolerance;
            if within {
                reference = value;
            }
            mask.set(i, within);
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidInput;

    fn mask_of(tolerance: f64, values: &[f64]) -> Vec<bool> {
        let timestamps: Vec<f64> = (0..values.len()).map(|i| i as f64).collect();
        ToleranceBasedFilter::new(tolerance)
            .unwrap()
            .mask(&timestamps, values)
            .unwrap()
            .into()
    }

    #[test]
    fn test_within_band_retained() {
        let filter = ToleranceBasedFilter::new(0.5).unwrap();
        let out = filter
            .filter(&[0.0, 1.0, 2.0, 3.0, 4.0], &[10.0, 10.5, 10.2, 15.0, 15.1])
            .unwrap();
        assert_eq!(out.timestamps(), vec![0.0, 1.0, 2.0, 4.0]);
        assert_eq!(out.values(), vec![10.0, 10.5, 10.2, 15.1]);
    }

    #[test]
    fn test_exact_tolerance_is_within_band() {
        assert_eq!(
            mask_of(0.5, &[0.0, 0.5, 1.0, 1.5]),
            vec![true, true, true, true]
        );
        assert_eq!(
            mask_of(0.5, &[0.0, 0.75, 0.0, 0.0]),
            vec![true, false, true, true]
        );
    }

    #[test]
    fn test_reference_carries_forward_over_rejections() {
        // Two spikes in a row: 0.2 is compared against 0.0, not against 5.0.
        assert_eq!(
            mask_of(0.5, &[0.0, 5.0, 6.0, 0.2, 9.0]),
            vec![true, false, false, true, true]
        );
    }

    #[test]
    fn test_last_sample_forced() {
        assert_eq!(mask_of(0.1, &[0.0, 0.0, 100.0]), vec![true, true, true]);
        assert_eq!(mask_of(0.1, &[7.0]), vec![true]);
        assert_eq!(mask_of(0.1, &[0.0, 100.0]), vec![true, true]);
    }

    #[test]
    fn test_nan_dropped() {
        assert_eq!(
            mask_of(1.0, &[0.0, f64::NAN, 0.5, 0.0]),
            vec![true, false, true, true]
        );
    }

    #[test]
    fn test_invalid_input() {
        let filter = ToleranceBasedFilter::default();
        assert_eq!(
            filter.filter(&[], &[]),
            Err(FilterError::InvalidInput(InvalidInput::Empty))
        );
        assert_eq!(
            filter.filter(&[0.0, 1.0, 2.0], &[0.0, 1.0]),
            Err(FilterError::InvalidInput(InvalidInput::LengthMismatch {
                timestamps: 3,
                values: 2
            }))
        );
    }

    #[test]
    fn test_set_tolerance() {
        let mut filter = ToleranceBasedFilter::default();
        assert_eq!(filter.tolerance(), 0.0);
        filter.set_tolerance(2.5).unwrap();
        assert_eq!(filter.tolerance(), 2.5);
        assert!(filter.set_tolerance(-1.0).is_err());
        assert_eq!(filter.tolerance(), 2.5);
    }
}
