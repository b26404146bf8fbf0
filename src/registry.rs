use std::str::FromStr;

use crate::codec::{self, ParseError};
use crate::config::{ConfigError, FilterConfig};
use crate::deadband::ToleranceBasedFilter;
use crate::error::FilterError;
use crate::extrapolator::FirstOrderExtrapolator;
use crate::filter::Filter;

/// Every filter algorithm a host can look up by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    FirstOrderExtrapolator,
    ToleranceBasedFilter,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [
        Algorithm::FirstOrderExtrapolator,
        Algorithm::ToleranceBasedFilter,
    ];

    /// Stable registry name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::FirstOrderExtrapolator => FirstOrderExtrapolator::NAME,
            Algorithm::ToleranceBasedFilter => ToleranceBasedFilter::NAME,
        }
    }

    /// Looks up an algorithm by its exact registry name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Instantiates the algorithm with a validated config.
    pub fn build(self, config: &FilterConfig) -> Result<Box<dyn Filter>, FilterError> {
        config.validate()?;
        let filter: Box<dyn Filter> = match self {
            Algorithm::FirstOrderExtrapolator => {
                Box::new(FirstOrderExtrapolator::new(config.tolerance)?)
            }
            Algorithm::ToleranceBasedFilter => {
                Box::new(ToleranceBasedFilter::new(config.tolerance)?)
            }
        };
        Ok(filter)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| SolveError::UnknownAlgorithm(s.to_string()))
    }
}

/// Error type for string-level invocations through [`solve`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolveError {
    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),
    #[error("invalid parameters: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid input string: {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Runs a named algorithm end to end on delimited text.
///
/// `params` configures the filter (see [`FilterConfig::from_params`]),
/// `input` is `"t0,...;v0,..."`, and the result is rendered with
/// [`codec::format_filtered`].
///
/// # Example
/// ```
/// let out = historian::registry::solve(
///     "FirstOrderExtrapolator",
///     [("tolerance", "0.1")],
///     "0,1,2,3;0,1,2,100",
/// )
/// .unwrap();
/// assert_eq!(out, "Timestamps:0.0,3.0 | TimeSeries:0.0,100.0");
/// ```
pub fn solve<I, K, V>(name: &str, params: I, input: &str) -> Result<String, SolveError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let algorithm: Algorithm = name.parse()?;
    let config = FilterConfig::from_params(params)?;
    let filter = algorithm.build(&config)?;
    let (timestamps, values) = codec::parse_series(input)?;
    let filtered = filter.filter(&timestamps, &values)?;
    Ok(codec::format_filtered(&filtered))
}
