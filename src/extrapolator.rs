use crate::error::{check_tolerance, FilterError};
use crate::filter::Filter;
use crate::mask::ValidityMask;
use crate::series::Series;

/// Swinging-door style filter keeping samples that a first-order
/// extrapolation fails to predict.
///
/// The reference line runs through the last retained sample and the raw
/// sample immediately after it. An interior sample is significant, and
/// retained, when it deviates from that line by more than the tolerance; it
/// then becomes the new anchor. A deviation of exactly `tolerance` is not
/// significant. The first and last samples are always retained.
///
/// When the line cannot be evaluated (two anchor samples share a timestamp,
/// or a non-finite input poisons the arithmetic) the sample is treated as
/// significant rather than letting NaN decide.
///
/// # Example
/// ```
/// use historian::{Filter, FirstOrderExtrapolator};
///
/// let filter = FirstOrderExtrapolator::new(0.1).unwrap();
/// let out = filter
///     .filter(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 2.0, 100.0])
///     .unwrap();
/// assert_eq!(out.timestamps(), vec![0.0, 3.0]);
/// assert_eq!(out.values(), vec![0.0, 100.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FirstOrderExtrapolator {
    tolerance: f64,
}

impl FirstOrderExtrapolator {
    pub const NAME: &'static str = "FirstOrderExtrapolator";

    /// Creates a filter with the given tolerance.
    pub fn new(tolerance: f64) -> Result<Self, FilterError> {
        Ok(Self {
            tolerance: check_tolerance(tolerance)?,
        })
    }

    /// Indices where the reference line could not be evaluated and the
    /// sample was retained by policy.
    pub fn anomalies(
        &self,
        timestamps: &[f64],
        values: &[f64],
    ) -> Result<Vec<usize>, FilterError> {
        let series = Series::new(timestamps, values)?;
        let mut anomalies = Vec::new();
        self.scan(&series, |i| anomalies.push(i));
        Ok(anomalies)
    }

    fn scan(&self, series: &Series<'_>, mut on_anomaly: impl FnMut(usize)) -> ValidityMask {
        let ts = series.timestamps();
        let vs = series.values();
        let mut mask = ValidityMask::for_series(series);
        let mut last_valid = 0;

        for i in 1..series.last_index() {
            let anchor = last_valid + 1;
            let predicted = extrapolate(
                ts[last_valid],
                vs[last_valid],
                ts[anchor],
                vs[anchor],
                ts[i],
            );
            let deviation = (predicted - vs[i]).abs();

            let significant = if !predicted.is_finite() || deviation.is_nan() {
                log::debug!(
                    "sample {i}: no usable prediction from samples {last_valid} and {anchor}, retaining"
                );
                on_anomaly(i);
                true
            } else if deviation > self.tolerance {
                log::trace!(
                    "sample {i}: deviation {deviation} exceeds tolerance {}",
                    self.tolerance
                );
                true
            } else {
                false
            };

            if significant {
                last_valid = i;
            }
            mask.set(i, significant);
        }
        mask
    }
}

/// Evaluates at `x` the line through `(x0, y0)` and `(x1, y1)`.
///
/// Offsets are taken from `x0` so large timestamps do not cancel out.
/// Yields a non-finite result when `x0 == x1`.
#[inline]
fn extrapolate(x0: f64, y0: f64, x1: f64, y1: f64, x: f64) -> f64 {
    let slope = (y1 - y0) / (x1 - x0);
    y0 + slope * (x - x0)
}

impl Filter for FirstOrderExtrapolator {
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
        self.scan(series, |_| {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidInput;

    fn mask_of(tolerance: f64, timestamps: &[f64], values: &[f64]) -> Vec<bool> {
        FirstOrderExtrapolator::new(tolerance)
            .unwrap()
            .mask(timestamps, values)
            .unwrap()
            .into()
    }

    #[test]
    fn test_extrapolate() {
        assert_eq!(extrapolate(0.0, 0.0, 1.0, 1.0, 2.0), 2.0);
        assert_eq!(extrapolate(1.0, 3.0, 3.0, 3.0, 10.0), 3.0);
        assert!(!extrapolate(1.0, 3.0, 1.0, 4.0, 2.0).is_finite());
    }

    #[test]
    fn test_ramp_on_epoch_millis() {
        // 1024 ms steps and a power-of-two slope keep every prediction exact.
        let ts: Vec<f64> = (0..1000).map(|i| 1.7e12 + i as f64 * 1024.0).collect();
        let vs: Vec<f64> = (0..1000).map(|i| i as f64 * 0.25).collect();
        let filter = FirstOrderExtrapolator::new(0.0).unwrap();
        let out = filter.filter(&ts, &vs).unwrap();
        assert_eq!(out.timestamps(), vec![ts[0], ts[999]]);
        assert!(filter.anomalies(&ts, &vs).unwrap().is_empty());
    }

    #[test]
    fn test_linear_interior_dropped() {
        assert_eq!(
            mask_of(0.1, &[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 2.0, 100.0]),
            vec![true, false, false, true]
        );
    }

    #[test]
    fn test_exact_tolerance_not_significant() {
        let ts = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(
            mask_of(0.5, &ts, &[0.0, 1.0, 2.5, 3.0]),
            vec![true, false, false, true]
        );
        assert_eq!(
            mask_of(0.5, &ts, &[0.0, 1.0, 2.75, 3.0]),
            vec![true, false, true, true]
        );
    }

    #[test]
    fn test_anchor_is_next_raw_sample() {
        // After retaining index 2 the line runs through samples 2 and 3,
        // predicting 7.0 at t=4.
        let ts = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let vs = [0.0, 1.0, 5.0, 6.0, 9.0, 8.0];
        assert_eq!(
            mask_of(0.5, &ts, &vs),
            vec![true, false, true, false, true, true]
        );
        assert_eq!(
            mask_of(2.5, &ts, &vs),
            vec![true, false, true, false, false, true]
        );
    }

    #[test]
    fn test_zero_length_interval_retained() {
        let filter = FirstOrderExtrapolator::new(1.0).unwrap();
        let ts = [0.0, 0.0, 1.0, 2.0];
        let vs = [1.0, 2.0, 3.0, 4.0];

        let mask: Vec<bool> = filter.mask(&ts, &vs).unwrap().into();
        assert_eq!(mask, vec![true, true, false, true]);
        assert_eq!(filter.anomalies(&ts, &vs).unwrap(), vec![1]);

        let out = filter.filter(&ts, &vs).unwrap();
        assert!(out.values().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_nan_value_retained() {
        let ts = [0.0, 1.0, 2.0, 3.0];
        let vs = [0.0, 1.0, f64::NAN, 3.0];
        let filter = FirstOrderExtrapolator::new(0.5).unwrap();
        let mask: Vec<bool> = filter.mask(&ts, &vs).unwrap().into();
        assert_eq!(mask, vec![true, false, true, true]);
        assert_eq!(filter.anomalies(&ts, &vs).unwrap(), vec![2]);
    }

    #[test]
    fn test_short_series() {
        assert_eq!(mask_of(0.0, &[5.0], &[1.0]), vec![true]);
        assert_eq!(mask_of(0.0, &[5.0, 6.0], &[1.0, 1.0]), vec![true, true]);
    }

    #[test]
    fn test_invalid_input() {
        let filter = FirstOrderExtrapolator::default();
        assert_eq!(
            filter.filter(&[], &[]),
            Err(FilterError::InvalidInput(InvalidInput::Empty))
        );
        assert_eq!(
            filter.anomalies(&[0.0], &[]),
            Err(FilterError::InvalidInput(InvalidInput::LengthMismatch {
                timestamps: 1,
                values: 0
            }))
        );
        assert!(FirstOrderExtrapolator::new(f64::NAN).is_err());
    }
}
