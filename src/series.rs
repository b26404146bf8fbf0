use crate::error::InvalidInput;

/// A validated, borrowed view over an index-aligned time series.
///
/// `timestamps[i]` is the time of `values[i]`. Construction guarantees both
/// slices are non-empty and of equal length; timestamps are expected to be
/// increasing but this is not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Series<'a> {
    timestamps: &'a [f64],
    values: &'a [f64],
}

impl<'a> Series<'a> {
    /// Validates and wraps a (timestamps, values) pair.
    pub fn new(timestamps: &'a [f64], values: &'a [f64]) -> Result<Self, InvalidInput> {
        if timestamps.len() != values.len() {
            return Err(InvalidInput::LengthMismatch {
                timestamps: timestamps.len(),
                values: values.len(),
            });
        }
        if timestamps.is_empty() {
            return Err(InvalidInput::Empty);
        }
        Ok(Self { timestamps, values })
    }

    pub fn timestamps(&self) -> &'a [f64] {
        self.timestamps
    }

    pub fn values(&self) -> &'a [f64] {
        self.values
    }

    /// Number of samples. Always at least one.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of the final sample.
    pub fn last_index(&self) -> usize {
        self.len() - 1
    }
}

/// The retained samples of a filter invocation, in original order.
///
/// Timestamps and values always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "FilteredParts"))]
pub struct Filtered {
    timestamps: Vec<f64>,
    values: Vec<f64>,
}

/// Unchecked wire form of [`Filtered`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct FilteredParts {
    timestamps: Vec<f64>,
    values: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<FilteredParts> for Filtered {
    type Error = InvalidInput;

    fn try_from(parts: FilteredParts) -> Result<Self, Self::Error> {
        Filtered::new(parts.timestamps, parts.values)
    }
}

impl Filtered {
    /// Pairs retained timestamps with their values.
    ///
    /// Both may be empty, but they must have the same length.
    pub fn new(timestamps: Vec<f64>, values: Vec<f64>) -> Result<Self, InvalidInput> {
        if timestamps.len() != values.len() {
            return Err(InvalidInput::LengthMismatch {
                timestamps: timestamps.len(),
                values: values.len(),
            });
        }
        Ok(Self { timestamps, values })
    }

    /// Creates an empty output with room for `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            timestamps: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Splits into `(timestamps, values)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.timestamps, self.values)
    }

    pub(crate) fn push(&mut self, timestamp: f64, value: f64) {
        self.timestamps.push(timestamp);
        self.values.push(value);
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Iterates over retained `(timestamp, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.timestamps
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// Ratio of original sample count to retained sample count.
    ///
    /// Returns `0.0` when nothing was retained.
    pub fn compression_ratio(&self, original_len: usize) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        original_len as f64 / self.len() as f64
    }

    /// Reconstructs values at the given timestamps by linear interpolation
    /// between retained samples.
    ///
    /// Timestamps outside the retained range take the nearest endpoint value.
    /// Returns an empty vector if nothing was retained.
    pub fn reconstruct(&self, at: &[f64]) -> Vec<f64> {
        let len = self.timestamps.len().min(self.values.len());
        if len == 0 {
            return Vec::new();
        }
        let timestamps = &self.timestamps[..len];
        let last = len - 1;

        at.iter()
            .map(|&t| {
                // First retained sample strictly after `t`.
                let right = timestamps.partition_point(|&x| x <= t);
                if right == 0 {
                    return self.values[0];
                }
                if right > last {
                    return self.values[last];
                }
                let left = right - 1;
                let (x0, y0) = (timestamps[left], self.values[left]);
                let (x1, y1) = (timestamps[right], self.values[right]);
                let dx = x1 - x0;
                if dx == 0.0 {
                    return y0;
                }
                y0 + (y1 - y0) * (t - x0) / dx
            })
            .collect()
    }
}
