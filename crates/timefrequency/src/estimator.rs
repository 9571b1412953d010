//! Phase, Amplitude and Frequency Over Time
//!
//! Each estimate runs the same pipeline: pick a pass type from the frequency
//! range, filter (edge removal deferred), take the analytic signal, read off
//! the feature, then optionally mask the samples within half a kernel of
//! either edge.
//!
//! Undefined samples are returned as NaN. Every output has the same length
//! as the input signal.

use crate::edges::{edge_length, remove_edges};
use crate::error::TimeFrequencyError;
use crate::hilbert::{hilbert_ignore_nan, Complex64, HilbertBackend, RustFftHilbert};
use crate::passband::pass_type_for;
use serde::{Deserialize, Serialize};
use signal_filter::{filter_signal, FilterOptions, FrequencyRange};
use std::f64::consts::PI;
use tracing::debug;

/// Options shared by all estimates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateOptions {
    /// Forwarded to the filter unchanged
    pub filter: FilterOptions,
    /// Zero-pad the analytic transform to the next power of two
    pub hilbert_increase_n: bool,
    /// Set samples within half a kernel of the edges to NaN
    pub remove_edge_artifacts: bool,
    /// Log the filter's transition band
    pub verbose: bool,
}

impl Default for EstimateOptions {
    fn default() -> Self {
        Self {
            filter: FilterOptions::default(),
            hilbert_increase_n: false,
            remove_edge_artifacts: true,
            verbose: true,
        }
    }
}

impl EstimateOptions {
    /// Defaults without diagnostic logging
    pub fn quiet() -> Self {
        Self {
            verbose: false,
            ..Default::default()
        }
    }
}

/// Estimator of time-resolved oscillation properties
#[derive(Debug, Clone, Default)]
pub struct Estimator<B = RustFftHilbert> {
    /// Analytic signal backend
    backend: B,
}

impl Estimator<RustFftHilbert> {
    /// Create an estimator with the default FFT backend
    pub fn new() -> Self {
        Self::with_backend(RustFftHilbert)
    }
}

impl<B: HilbertBackend> Estimator<B> {
    /// Create an estimator with a custom analytic signal backend
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// The analytic signal backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Filter and transform; returns the analytic signal and kernel length
    fn analytic_signal(
        &self,
        sig: &[f64],
        fs: f64,
        range: &FrequencyRange,
        options: &EstimateOptions,
    ) -> Result<(Vec<Complex64>, usize), TimeFrequencyError> {
        let pass_type = pass_type_for(range)?;

        let filtered = filter_signal(
            sig,
            fs,
            pass_type,
            range,
            &options.filter,
            false,
            options.verbose,
        )?;

        let analytic =
            hilbert_ignore_nan(&self.backend, &filtered.signal, options.hilbert_increase_n)?;

        debug!(
            "{} analytic signal: {} samples, kernel {} taps, edge {} samples{}",
            pass_type,
            sig.len(),
            filtered.kernel.len(),
            edge_length(filtered.kernel.len()),
            if options.remove_edge_artifacts { "" } else { " (kept)" }
        );

        Ok((analytic, filtered.kernel.len()))
    }

    /// Instantaneous phase in radians, in `(-pi, pi]`
    pub fn phase_by_time(
        &self,
        sig: &[f64],
        fs: f64,
        range: &FrequencyRange,
        options: &EstimateOptions,
    ) -> Result<Vec<f64>, TimeFrequencyError> {
        let (analytic, kernel_len) = self.analytic_signal(sig, fs, range, options)?;

        let mut phase: Vec<f64> = analytic.iter().map(principal_arg).collect();
        if options.remove_edge_artifacts {
            remove_edges(&mut phase, kernel_len);
        }
        Ok(phase)
    }

    /// Instantaneous amplitude in signal units
    pub fn amp_by_time(
        &self,
        sig: &[f64],
        fs: f64,
        range: &FrequencyRange,
        options: &EstimateOptions,
    ) -> Result<Vec<f64>, TimeFrequencyError> {
        let (analytic, kernel_len) = self.analytic_signal(sig, fs, range, options)?;

        let mut amplitude: Vec<f64> = analytic.iter().map(|a| a.norm()).collect();
        if options.remove_edge_artifacts {
            remove_edges(&mut amplitude, kernel_len);
        }
        Ok(amplitude)
    }

    /// Instantaneous frequency in Hz.
    ///
    /// Backward phase steps are taken as wraparound and get `2 pi` added, so a
    /// genuine phase slip reads as a very high frequency. Index 0 is always
    /// NaN.
    pub fn freq_by_time(
        &self,
        sig: &[f64],
        fs: f64,
        range: &FrequencyRange,
        options: &EstimateOptions,
    ) -> Result<Vec<f64>, TimeFrequencyError> {
        let phase = self.phase_by_time(sig, fs, range, options)?;
        Ok(phase_to_frequency(&phase, fs))
    }
}

/// Complex argument mapped onto `(-pi, pi]`
fn principal_arg(value: &Complex64) -> f64 {
    let angle = value.arg();
    if angle == -PI {
        PI
    } else {
        angle
    }
}

/// Convert successive phase differences into Hz, NaN first
fn phase_to_frequency(phase: &[f64], fs: f64) -> Vec<f64> {
    let mut frequency = Vec::with_capacity(phase.len());
    frequency.push(f64::NAN);
    frequency.extend(phase.windows(2).map(|pair| {
        let mut step = pair[1] - pair[0];
        if step < 0.0 {
            step += 2.0 * PI;
        }
        fs * step / (2.0 * PI)
    }));
    frequency.truncate(phase.len());
    frequency
}

/// Instantaneous phase with the default backend
pub fn phase_by_time(
    sig: &[f64],
    fs: f64,
    range: &FrequencyRange,
    options: &EstimateOptions,
) -> Result<Vec<f64>, TimeFrequencyError> {
    Estimator::new().phase_by_time(sig, fs, range, options)
}

/// Instantaneous amplitude with the default backend
pub fn amp_by_time(
    sig: &[f64],
    fs: f64,
    range: &FrequencyRange,
    options: &EstimateOptions,
) -> Result<Vec<f64>, TimeFrequencyError> {
    Estimator::new().amp_by_time(sig, fs, range, options)
}

/// Instantaneous frequency with the default backend
pub fn freq_by_time(
    sig: &[f64],
    fs: f64,
    range: &FrequencyRange,
    options: &EstimateOptions,
) -> Result<Vec<f64>, TimeFrequencyError> {
    Estimator::new().freq_by_time(sig, fs, range, options)
}
