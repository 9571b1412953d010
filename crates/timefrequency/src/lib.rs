//! Time-resolved Oscillation Estimation
//!
//! Instantaneous phase, amplitude and frequency of a band-limited component
//! of a single neural time series, via FIR filtering and the analytic signal.
//!
//! Outputs use NaN for undefined samples (edges and NaN input padding).

mod edges;
mod error;
mod estimator;
mod hilbert;
mod passband;

pub use edges::{edge_length, remove_edges, Undefined};
pub use error::TimeFrequencyError;
pub use estimator::{amp_by_time, freq_by_time, phase_by_time, EstimateOptions, Estimator};
pub use hilbert::{hilbert_ignore_nan, padded_length, Complex64, HilbertBackend, RustFftHilbert};
pub use passband::pass_type_for;

pub use signal_filter::{FilterError, FilterOptions, FrequencyRange, PassType};
