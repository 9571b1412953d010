//! Filter Definition and Range Checking

use crate::error::FilterError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which part of the spectrum a filter lets through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassType {
    /// Keep everything below the high cutoff
    Lowpass,
    /// Keep everything above the low cutoff
    Highpass,
    /// Keep the band between the two cutoffs
    Bandpass,
    /// Reject the band between the two cutoffs
    Bandstop,
}

impl PassType {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PassType::Lowpass => "lowpass",
            PassType::Highpass => "highpass",
            PassType::Bandpass => "bandpass",
            PassType::Bandstop => "bandstop",
        }
    }

    /// Whether the response at DC is in the pass band
    pub fn passes_zero(&self) -> bool {
        matches!(self, PassType::Lowpass | PassType::Bandstop)
    }
}

impl fmt::Display for PassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Frequency range in Hz, open on at most one side
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrequencyRange {
    /// Lower cutoff (Hz), `None` for no lower bound
    pub low: Option<f64>,
    /// Upper cutoff (Hz), `None` for no upper bound
    pub high: Option<f64>,
}

impl FrequencyRange {
    /// Create a range from optional bounds
    pub fn new(low: Option<f64>, high: Option<f64>) -> Self {
        Self { low, high }
    }

    /// Range bounded on both sides
    pub fn band(low: f64, high: f64) -> Self {
        Self::new(Some(low), Some(high))
    }

    /// Range with only an upper bound
    pub fn lowpass(high: f64) -> Self {
        Self::new(None, Some(high))
    }

    /// Range with only a lower bound
    pub fn highpass(low: f64) -> Self {
        Self::new(Some(low), None)
    }
}

impl From<(Option<f64>, Option<f64>)> for FrequencyRange {
    fn from((low, high): (Option<f64>, Option<f64>)) -> Self {
        Self::new(low, high)
    }
}

/// Options controlling the length of a designed FIR kernel
///
/// `n_seconds` takes precedence over `n_cycles` when both are set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Kernel length in cycles of the lowest cutoff (high cutoff for lowpass)
    pub n_cycles: Option<f64>,
    /// Kernel length in seconds
    pub n_seconds: Option<f64>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            n_cycles: Some(3.0),
            n_seconds: None,
        }
    }
}

/// Nyquist rate for a sampling rate
pub fn compute_nyquist(fs: f64) -> f64 {
    fs / 2.0
}

/// Validate a filter definition and return the cutoffs it uses, ascending.
///
/// Only the bounds the pass type needs are read: `high` for lowpass, `low`
/// for highpass, both for the band types.
pub fn check_filter_definition(
    pass_type: PassType,
    range: &FrequencyRange,
    fs: f64,
) -> Result<Vec<f64>, FilterError> {
    if !(fs.is_finite() && fs > 0.0) {
        return Err(FilterError::InvalidSamplingRate(fs));
    }

    let require = |bound: Option<f64>, name: &'static str| {
        bound.ok_or(FilterError::MissingCutoff {
            pass_type: pass_type.as_str(),
            bound: name,
        })
    };

    let cutoffs = match pass_type {
        PassType::Lowpass => vec![require(range.high, "high")?],
        PassType::Highpass => vec![require(range.low, "low")?],
        PassType::Bandpass | PassType::Bandstop => {
            let low = require(range.low, "low")?;
            let high = require(range.high, "high")?;
            if low >= high {
                return Err(FilterError::InvalidCutoffOrder { low, high });
            }
            vec![low, high]
        }
    };

    let nyquist = compute_nyquist(fs);
    for &cutoff in &cutoffs {
        if cutoff.is_nan() || cutoff <= 0.0 {
            return Err(FilterError::NonPositiveCutoff(cutoff));
        }
        if cutoff >= nyquist {
            return Err(FilterError::AboveNyquist { cutoff, nyquist });
        }
    }

    Ok(cutoffs)
}

/// Number of taps for a kernel, always odd
pub fn compute_filter_length(
    fs: f64,
    pass_type: PassType,
    cutoffs: &[f64],
    options: &FilterOptions,
) -> Result<usize, FilterError> {
    let raw = match (options.n_seconds, options.n_cycles) {
        (Some(n_seconds), _) => {
            if !(n_seconds.is_finite() && n_seconds > 0.0) {
                return Err(FilterError::InvalidLength(format!(
                    "n_seconds must be positive, got {n_seconds}"
                )));
            }
            fs * n_seconds
        }
        (None, Some(n_cycles)) => {
            if !(n_cycles.is_finite() && n_cycles > 0.0) {
                return Err(FilterError::InvalidLength(format!(
                    "n_cycles must be positive, got {n_cycles}"
                )));
            }
            // Lowpass kernels are sized by their only cutoff, the rest by the lowest one
            let reference = match pass_type {
                PassType::Lowpass => cutoffs[cutoffs.len() - 1],
                _ => cutoffs[0],
            };
            fs * n_cycles / reference
        }
        (None, None) => return Err(FilterError::MissingLength),
    };

    let mut filter_len = (raw.ceil() as usize).max(1);
    if filter_len % 2 == 0 {
        filter_len += 1;
    }
    Ok(filter_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bandpass_cutoffs() {
        let cutoffs =
            check_filter_definition(PassType::Bandpass, &FrequencyRange::band(8.0, 12.0), 500.0)
                .unwrap();
        assert_eq!(cutoffs, vec![8.0, 12.0]);
    }

    #[test]
    fn test_single_sided_cutoffs() {
        let lp =
            check_filter_definition(PassType::Lowpass, &FrequencyRange::lowpass(30.0), 500.0)
                .unwrap();
        assert_eq!(lp, vec![30.0]);

        let hp =
            check_filter_definition(PassType::Highpass, &FrequencyRange::highpass(1.0), 500.0)
                .unwrap();
        assert_eq!(hp, vec![1.0]);
    }

    #[test]
    fn test_range_from_tuple() {
        assert_eq!(FrequencyRange::from((None, Some(30.0))), FrequencyRange::lowpass(30.0));
        let range: FrequencyRange = (Some(8.0), Some(12.0)).into();
        assert_eq!(range, FrequencyRange::band(8.0, 12.0));
    }

    #[test]
    fn test_missing_cutoff() {
        let err = check_filter_definition(PassType::Bandpass, &FrequencyRange::lowpass(30.0), 500.0)
            .unwrap_err();
        assert!(matches!(err, FilterError::MissingCutoff { bound: "low", .. }));
    }

    #[test]
    fn test_cutoff_order() {
        let err =
            check_filter_definition(PassType::Bandstop, &FrequencyRange::band(12.0, 8.0), 500.0)
                .unwrap_err();
        assert_eq!(err, FilterError::InvalidCutoffOrder { low: 12.0, high: 8.0 });
    }

    #[test]
    fn test_nyquist_and_sign() {
        assert!(matches!(
            check_filter_definition(PassType::Lowpass, &FrequencyRange::lowpass(250.0), 500.0),
            Err(FilterError::AboveNyquist { .. })
        ));
        assert!(matches!(
            check_filter_definition(PassType::Highpass, &FrequencyRange::highpass(-1.0), 500.0),
            Err(FilterError::NonPositiveCutoff(_))
        ));
        assert!(matches!(
            check_filter_definition(PassType::Highpass, &FrequencyRange::highpass(1.0), 0.0),
            Err(FilterError::InvalidSamplingRate(_))
        ));
    }

    #[test]
    fn test_filter_length_cycles() {
        // 3 cycles of 8 Hz at 500 Hz = 187.5 -> 188 -> odd 189
        let len =
            compute_filter_length(500.0, PassType::Bandpass, &[8.0, 12.0], &FilterOptions::default())
                .unwrap();
        assert_eq!(len, 189);

        // Lowpass sized by the high cutoff: 3 * 500 / 30 = 50 -> 51
        let len =
            compute_filter_length(500.0, PassType::Lowpass, &[30.0], &FilterOptions::default())
                .unwrap();
        assert_eq!(len, 51);
    }

    #[test]
    fn test_filter_length_seconds() {
        let options = FilterOptions {
            n_cycles: Some(3.0),
            n_seconds: Some(0.5),
        };
        let len = compute_filter_length(1000.0, PassType::Highpass, &[2.0], &options).unwrap();
        assert_eq!(len, 501);
    }

    #[test]
    fn test_filter_length_missing() {
        let options = FilterOptions {
            n_cycles: None,
            n_seconds: None,
        };
        assert_eq!(
            compute_filter_length(1000.0, PassType::Highpass, &[2.0], &options),
            Err(FilterError::MissingLength)
        );
    }

    #[test]
    fn test_options_deserialize_defaults() {
        let options: FilterOptions = serde_json::from_str(r#"{"n_seconds": 1.0}"#).unwrap();
        assert_eq!(options.n_cycles, Some(3.0));
        assert_eq!(options.n_seconds, Some(1.0));
    }
}
