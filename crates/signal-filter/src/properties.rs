//! Frequency Response and Filter Property Checks

use crate::definition::{compute_nyquist, PassType};
use rustfft::{num_complex::Complex, FftPlanner};
use tracing::{info, warn};

/// Attenuation (dB) bounding the transition band from below
pub const TRANSITION_LOW_DB: f64 = -20.0;
/// Attenuation (dB) bounding the transition band from above
pub const TRANSITION_HIGH_DB: f64 = -3.0;

/// Kernel magnitude response on `[0, fs/2)`
#[derive(Debug, Clone)]
pub struct FrequencyResponse {
    /// Frequency of each point (Hz)
    pub freqs: Vec<f64>,
    /// Magnitude in decibels
    pub db: Vec<f64>,
}

/// Summary of a designed filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterProperties {
    /// Width of the pass band (stop band for bandstop), Hz
    pub pass_bandwidth: f64,
    /// Widest span between -20 dB and -3 dB, Hz
    pub transition_bandwidth: Option<f64>,
}

/// Sample the kernel's frequency response at `2 * fs` points
pub fn compute_frequency_response(kernel: &[f64], fs: f64) -> FrequencyResponse {
    let n_points = ((fs * 2.0) as usize).max(1);
    let n_fft = 2 * n_points;

    // Taps past n_fft wrap around, which keeps the sampled DTFT exact
    let mut buffer = vec![Complex::new(0.0, 0.0); n_fft];
    for (k, &tap) in kernel.iter().enumerate() {
        buffer[k % n_fft].re += tap;
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n_fft);
    fft.process(&mut buffer);

    let resolution = fs / n_fft as f64;
    let freqs = (0..n_points).map(|k| k as f64 * resolution).collect();
    let db = buffer
        .iter()
        .take(n_points)
        .map(|c| 20.0 * c.norm().log10())
        .collect();

    FrequencyResponse { freqs, db }
}

/// Width of the band the filter is meant to pass (or stop)
pub fn compute_pass_band(fs: f64, pass_type: PassType, cutoffs: &[f64]) -> f64 {
    match pass_type {
        PassType::Bandpass | PassType::Bandstop => cutoffs[1] - cutoffs[0],
        PassType::Lowpass => cutoffs[0],
        PassType::Highpass => compute_nyquist(fs) - cutoffs[0],
    }
}

/// Widest frequency span where the response sits between `low` and `high` dB
pub fn compute_transition_band(response: &FrequencyResponse, low: f64, high: f64) -> Option<f64> {
    let inside: Vec<bool> = response.db.iter().map(|&d| d > low && d < high).collect();
    let crossings: Vec<usize> = inside
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] != pair[1])
        .map(|(i, _)| i)
        .collect();

    crossings
        .chunks_exact(2)
        .map(|pair| response.freqs[pair[1]] - response.freqs[pair[0]])
        .fold(None, |widest: Option<f64>, width| {
            Some(widest.map_or(width, |w| w.max(width)))
        })
}

/// Compute pass and transition bandwidths, logging them when `verbose`.
///
/// A transition band wider than the pass band is always reported as a warning.
pub fn check_filter_properties(
    kernel: &[f64],
    fs: f64,
    pass_type: PassType,
    cutoffs: &[f64],
    verbose: bool,
) -> FilterProperties {
    let response = compute_frequency_response(kernel, fs);
    let pass_bandwidth = compute_pass_band(fs, pass_type, cutoffs);
    let transition_bandwidth =
        compute_transition_band(&response, TRANSITION_LOW_DB, TRANSITION_HIGH_DB);

    if let Some(transition) = transition_bandwidth {
        if transition > pass_bandwidth {
            warn!(
                "Transition bandwidth is {:.1} Hz. This is greater than the desired pass/stop bandwidth of {:.1} Hz",
                transition, pass_bandwidth
            );
        }
    }

    if verbose {
        match transition_bandwidth {
            Some(transition) => info!("Transition bandwidth is {:.1} Hz.", transition),
            None => info!("Transition bandwidth could not be determined."),
        }
        info!("Pass/stop bandwidth is {:.1} Hz.", pass_bandwidth);
    }

    FilterProperties {
        pass_bandwidth,
        transition_bandwidth,
    }
}
