//! Time-frequency Error Types

use signal_filter::FilterError;
use thiserror::Error;

/// Errors raised while estimating phase, amplitude or frequency
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeFrequencyError {
    /// Frequency range cannot be mapped to a filter
    #[error("Invalid frequency range: {0}")]
    InvalidRange(String),

    /// The sequence handed to the analytic transform had no defined sample
    #[error("Signal contains no valid (non-NaN) samples")]
    NoValidSamples,

    /// Filtering failed; passed through untouched
    #[error(transparent)]
    Filter(#[from] FilterError),
}
