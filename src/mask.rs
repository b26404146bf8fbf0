use crate::series::{Filtered, Series};

/// Per-sample retention decisions for one filter invocation.
///
/// The first and last samples are always retained: a mask is created with
/// both endpoints set and they cannot be cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidityMask {
    bits: Vec<bool>,
}

impl ValidityMask {
    /// Creates a mask over `series` with only the endpoints retained.
    pub fn for_series(series: &Series<'_>) -> Self {
        let len = series.len();
        let mut bits = vec![false; len];
        bits[0] = true;
        bits[len - 1] = true;
        Self { bits }
    }

    /// Marks an interior sample as retained or redundant.
    ///
    /// Endpoints are left untouched.
    pub(crate) fn set(&mut self, index: usize, valid: bool) {
        if index == 0 || index == self.bits.len() - 1 {
            return;
        }
        self.bits[index] = valid;
    }

    pub fn is_valid(&self, index: usize) -> bool {
        self.bits.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always `false`; a mask covers a non-empty series.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of retained samples.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&v| v).count()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Indices of retained samples, ascending.
    pub fn retained(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| v.then_some(i))
    }

    /// Materializes the retained samples of `series` in original order.
    ///
    /// The output is sized exactly to [`count`](Self::count).
    pub fn compact(&self, series: &Series<'_>) -> Filtered {
        debug_assert_eq!(self.len(), series.len(), "mask does not match series");
        let timestamps = series.timestamps();
        let values = series.values();

        let mut out = Filtered::with_capacity(self.count());
        for i in self.retained() {
            out.push(timestamps[i], values[i]);
        }
        out
    }
}

impl From<ValidityMask> for Vec<bool> {
    fn from(mask: ValidityMask) -> Self {
        mask.bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_forced() {
        let ts = [0.0, 1.0, 2.0, 3.0];
        let mask = ValidityMask::for_series(&Series::new(&ts, &ts).unwrap());
        assert_eq!(mask.as_slice(), &[true, false, false, true]);

        let single = ValidityMask::for_series(&Series::new(&[5.0], &[1.0]).unwrap());
        assert_eq!(single.as_slice(), &[true]);
        assert_eq!(single.count(), 1);
    }

    #[test]
    fn test_set_cannot_clear_endpoints() {
        let ts = [0.0, 1.0, 2.0];
        let mut mask = ValidityMask::for_series(&Series::new(&ts, &ts).unwrap());
        mask.set(0, false);
        mask.set(2, false);
        mask.set(1, true);
        assert_eq!(mask.as_slice(), &[true, true, true]);
        mask.set(1, false);
        assert_eq!(mask.count(), 2);
    }

    #[test]
    fn test_compact_preserves_order() {
        let ts = [0.0, 1.0, 2.0, 3.0, 4.0];
        let vs = [10.0, 11.0, 12.0, 13.0, 14.0];
        let series = Series::new(&ts, &vs).unwrap();

        let mut mask = ValidityMask::for_series(&series);
        mask.set(2, true);
        let out = mask.compact(&series);

        assert_eq!(out.timestamps(), vec![0.0, 2.0, 4.0]);
        assert_eq!(out.values(), vec![10.0, 12.0, 14.0]);
        assert_eq!(out.len(), mask.count());
        assert_eq!(mask.retained().collect::<Vec<_>>(), vec![0, 2, 4]);
    }
}
