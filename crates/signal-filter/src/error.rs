//! Filter Error Types

use thiserror::Error;

/// Errors raised while defining, designing or applying a filter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// Sampling rate is zero, negative or not finite
    #[error("Sampling rate must be positive and finite, got {0}")]
    InvalidSamplingRate(f64),

    /// A cutoff required by the pass type was not given
    #[error("{pass_type} filter requires a {bound} cutoff frequency")]
    MissingCutoff {
        pass_type: &'static str,
        bound: &'static str,
    },

    /// Band cutoffs out of order
    #[error("Second cutoff frequency must be greater than first: ({low}, {high})")]
    InvalidCutoffOrder { low: f64, high: f64 },

    /// Cutoff at or below zero
    #[error("Filter frequencies must be positive, got {0}")]
    NonPositiveCutoff(f64),

    /// Cutoff at or above the Nyquist rate
    #[error("Filter frequency {cutoff} must be below the Nyquist rate {nyquist}")]
    AboveNyquist { cutoff: f64, nyquist: f64 },

    /// Neither cycles nor seconds given to size the kernel
    #[error("Either n_cycles or n_seconds needs to be defined")]
    MissingLength,

    /// Filter length could not be derived from the options
    #[error("Invalid filter length option: {0}")]
    InvalidLength(String),

    /// Kernel longer than the data it is applied to
    #[error("The designed filter (length: {filter_len}) is longer than the signal (length: {signal_len})")]
    FilterTooLong { filter_len: usize, signal_len: usize },

    /// Nothing to filter
    #[error("Cannot filter an empty signal")]
    EmptySignal,
}
