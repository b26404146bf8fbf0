use std::num::ParseFloatError;

use crate::error::{check_tolerance, FilterError};

/// Parameter key for the deviation threshold.
pub const TOLERANCE: &str = "tolerance";

/// Recognized parameter keys with a human-readable description.
const PARAMETERS: &[(&str, &str)] = &[(TOLERANCE, "Tolerance value for filtering")];

/// Error produced while building a [`FilterConfig`] from parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("parameter '{key}' is not a number: '{value}'")]
    InvalidNumber {
        key: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },
    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Typed filter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilterConfig {
    /// Maximum deviation before a sample is significant.
    pub tolerance: f64,
}

impl FilterConfig {
    pub fn new(tolerance: f64) -> Result<Self, FilterError> {
        Ok(Self {
            tolerance: check_tolerance(tolerance)?,
        })
    }

    /// Checks a config that may have been built field-by-field or deserialized.
    pub fn validate(&self) -> Result<(), FilterError> {
        check_tolerance(self.tolerance).map(|_| ())
    }

    /// Builds a config from string key/value pairs, starting from the default.
    ///
    /// Only `"tolerance"` is recognized; other keys are logged and ignored.
    pub fn from_params<I, K, V>(params: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        config.apply_params(params)?;
        Ok(config)
    }

    /// Overrides fields from string key/value pairs.
    ///
    /// On error the config is left unchanged.
    pub fn apply_params<I, K, V>(&mut self, params: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut next = *self;
        for (key, value) in params {
            let (key, value) = (key.as_ref(), value.as_ref());
            match key {
                TOLERANCE => {
                    let tolerance = value.trim().parse::<f64>().map_err(|source| {
                        ConfigError::InvalidNumber {
                            key: key.to_string(),
                            value: value.to_string(),
                            source,
                        }
                    })?;
                    next.tolerance = check_tolerance(tolerance)?;
                }
                _ => log::warn!("ignoring unknown filter parameter '{key}'"),
            }
        }
        *self = next;
        Ok(())
    }

    /// Recognized parameter keys and what they do.
    pub fn parameters() -> &'static [(&'static str, &'static str)] {
        PARAMETERS
    }
}
