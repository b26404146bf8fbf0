//! # Historian
//!
//! Lossy, error-bounded compression of time-stamped measurements, in the
//! style of data-historian deadband and swinging-door filtering.
//!
//! ## Algorithm overview
//!
//! Both filters scan a series once, left to right, and mark each sample
//! valid or redundant against a reference derived from previously retained
//! samples. The first and last samples are always kept, so the retained
//! series spans the same interval as the input.
//!
//! - [`ToleranceBasedFilter`] keeps a sample when it lies within
//!   `tolerance` of the last retained value (inclusive).
//! - [`FirstOrderExtrapolator`] keeps a sample when it deviates by more
//!   than `tolerance` from the line through the last retained sample and
//!   the raw sample right after it.
//!
//! The validity mask is then compacted into a [`Filtered`] pair of
//! timestamps and values.
//!
//! ## Example
//!
//! ```rust
//! use historian::{Filter, FirstOrderExtrapolator};
//!
//! let timestamps = [0.0, 1.0, 2.0, 3.0, 4.0];
//! let values = [0.0, 1.0, 2.0, 3.0, 10.0];
//!
//! let filter = FirstOrderExtrapolator::new(0.1).unwrap();
//! let filtered = filter.filter(&timestamps, &values).unwrap();
//! assert_eq!(filtered.timestamps(), vec![0.0, 4.0]);
//!
//! // Dropped samples are approximated by linear interpolation.
//! let rebuilt = filtered.reconstruct(&timestamps);
//! assert_eq!(rebuilt.len(), timestamps.len());
//! ```
//!
//! ## Named algorithms
//!
//! Hosts that select filters by name go through [`Algorithm`]:
//!
//! ```rust
//! use historian::{Algorithm, FilterConfig};
//!
//! let algorithm: Algorithm = "ToleranceBasedFilter".parse().unwrap();
//! let filter = algorithm.build(&FilterConfig::new(0.5).unwrap()).unwrap();
//! let filtered = filter.filter(&[0.0, 1.0, 2.0], &[1.0, 9.0, 1.2]).unwrap();
//! assert_eq!(filtered.values(), vec![1.0, 1.2]);
//! ```

pub mod batch;
pub mod codec;
pub mod config;
pub mod deadband;
pub mod error;
pub mod extrapolator;
pub mod filter;
pub mod mask;
pub mod registry;
pub mod series;

// Re-export primary types at the crate root.
pub use codec::ParseError;
pub use config::{ConfigError, FilterConfig};
pub use deadband::ToleranceBasedFilter;
pub use error::{FilterError, InvalidInput};
pub use extrapolator::FirstOrderExtrapolator;
pub use filter::Filter;
pub use mask::ValidityMask;
pub use registry::{Algorithm, SolveError};
pub use series::{Filtered, Series};
