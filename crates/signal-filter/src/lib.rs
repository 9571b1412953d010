//! Signal Filtering
//!
//! Windowed-sinc FIR filter design and application for neural time series,
//! with NaN-aware application and filter-property diagnostics.

mod apply;
mod definition;
mod error;
mod fir;
mod properties;

pub use apply::{apply_fir_filter, filter_signal, remove_filter_edges, FilteredSignal};
pub use definition::{
    check_filter_definition, compute_filter_length, compute_nyquist, FilterOptions,
    FrequencyRange, PassType,
};
pub use error::FilterError;
pub use fir::{design_fir_filter, firwin, hamming};
pub use properties::{
    check_filter_properties, compute_frequency_response, compute_pass_band,
    compute_transition_band, FilterProperties, FrequencyResponse,
};
