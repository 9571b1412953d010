//! Pass Type Classification

use crate::error::TimeFrequencyError;
use signal_filter::{FrequencyRange, PassType};

/// Pick the filter pass type implied by a frequency range.
///
/// A missing lower bound means lowpass, a missing upper bound highpass, and
/// two ordered bounds bandpass.
pub fn pass_type_for(range: &FrequencyRange) -> Result<PassType, TimeFrequencyError> {
    match (range.low, range.high) {
        (None, Some(_)) => Ok(PassType::Lowpass),
        (Some(_), None) => Ok(PassType::Highpass),
        (Some(low), Some(high)) if low >= high => Err(TimeFrequencyError::InvalidRange(format!(
            "second cutoff frequency must be greater than first, got ({low}, {high})"
        ))),
        (Some(_), Some(_)) => Ok(PassType::Bandpass),
        (None, None) => Err(TimeFrequencyError::InvalidRange(
            "at least one cutoff frequency must be given".to_string(),
        )),
    }
}
