//! Parallel filtering of many independent channels.

use rayon::prelude::*;

use crate::error::FilterError;
use crate::filter::Filter;
use crate::series::Filtered;

/// Filters every `(timestamps, values)` channel with the same filter, in
/// parallel.
///
/// Results are returned in input order, one per channel; a malformed
/// channel fails on its own without affecting the others.
pub fn filter_all<F, T, V>(
    filter: &F,
    channels: &[(T, V)],
) -> Vec<Result<Filtered, FilterError>>
where
    F: Filter + ?Sized,
    T: AsRef<[f64]> + Sync,
    V: AsRef<[f64]> + Sync,
{
    let results: Vec<_> = channels
        .par_iter()
        .map(|(timestamps, values)| filter.filter(timestamps.as_ref(), values.as_ref()))
        .collect();

    log::debug!(
        "{}: filtered {} channels, {} failed",
        filter.name(),
        results.len(),
        results.iter().filter(|r| r.is_err()).count()
    );
    results
}
