//! Delimited text boundary for series input and filter output.
//!
//! Input form: `"t0,t1,...,tn;v0,v1,...,vn"`. Output form:
//! `"Timestamps:t0,t1,... | TimeSeries:v0,v1,..."`. Numbers are written
//! with the shortest representation that parses back to the same `f64`.

use std::num::ParseFloatError;

use crate::series::Filtered;

const GROUP_SEPARATOR: char = ';';
const VALUE_SEPARATOR: char = ',';

/// Which group of the input a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Timestamps,
    Values,
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Group::Timestamps => write!(f, "timestamps"),
            Group::Values => write!(f, "values"),
        }
    }
}

/// Error type for malformed series strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("missing ';' between timestamps and values")]
    MissingSeparator,
    #[error("expected 2 groups separated by ';', found {0}")]
    TooManyGroups(usize),
    #[error("invalid number '{token}' at position {position} of {group}")]
    InvalidNumber {
        group: Group,
        position: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Parses `"t0,...;v0,..."` into `(timestamps, values)`.
///
/// Whitespace around tokens is ignored and an empty group yields no
/// samples. Length agreement is not checked here; the filters reject
/// mismatched input themselves.
pub fn parse_series(input: &str) -> Result<(Vec<f64>, Vec<f64>), ParseError> {
    let mut groups = input.split(GROUP_SEPARATOR);
    let (timestamps, values) = match (groups.next(), groups.next()) {
        (Some(t), Some(v)) => (t, v),
        _ => return Err(ParseError::MissingSeparator),
    };
    let extra = groups.count();
    if extra > 0 {
        return Err(ParseError::TooManyGroups(2 + extra));
    }

    Ok((
        parse_group(timestamps, Group::Timestamps)?,
        parse_group(values, Group::Values)?,
    ))
}

fn parse_group(group: &str, kind: Group) -> Result<Vec<f64>, ParseError> {
    if group.trim().is_empty() {
        return Ok(Vec::new());
    }
    group
        .split(VALUE_SEPARATOR)
        .enumerate()
        .map(|(position, token)| {
            let token = token.trim();
            token.parse::<f64>().map_err(|source| ParseError::InvalidNumber {
                group: kind,
                position,
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

/// Renders a series in the input form accepted by [`parse_series`].
pub fn format_series(timestamps: &[f64], values: &[f64]) -> String {
    let mut out = String::new();
    push_joined(&mut out, timestamps);
    out.push(GROUP_SEPARATOR);
    push_joined(&mut out, values);
    out
}

/// Renders filter output as `"Timestamps:... | TimeSeries:..."`.
pub fn format_filtered(filtered: &Filtered) -> String {
    let mut out = String::from("Timestamps:");
    push_joined(&mut out, filtered.timestamps());
    out.push_str(" | TimeSeries:");
    push_joined(&mut out, filtered.values());
    out
}

fn push_joined(out: &mut String, numbers: &[f64]) {
    for (i, n) in numbers.iter().enumerate() {
        if i > 0 {
            out.push(VALUE_SEPARATOR);
        }
        // Debug keeps a trailing ".0" on integral values and round-trips exactly.
        out.push_str(&format!("{n:?}"));
    }
}
