//! Time-frequency Demo
//!
//! Simulates an oscillation, runs the phase, amplitude and frequency
//! estimators over it and summarizes the valid region.

mod settings;

pub use settings::{EstimateSettings, DEFAULT_SETTINGS_FILE, ENV_PREFIX};

use serde::Serialize;
use std::f64::consts::PI;
use thiserror::Error;
use timefrequency::{Estimator, TimeFrequencyError};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Errors surfaced by the demo
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be loaded
    #[error("Failed to load settings: {0}")]
    Settings(#[from] config::ConfigError),

    /// Estimation failed
    #[error("Estimation failed: {0}")]
    Estimate(#[from] TimeFrequencyError),

    /// Settings describe no samples
    #[error("Settings produce an empty signal (fs={fs}, duration_s={duration_s})")]
    EmptySignal { fs: f64, duration_s: f64 },

    /// Logging could not be installed
    #[error("Failed to set tracing subscriber: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Summary of one estimation run
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Samples in the simulated signal
    pub samples: usize,
    /// Samples with a defined amplitude
    pub valid_samples: usize,
    /// Mean amplitude over defined samples
    pub mean_amplitude: f64,
    /// Median instantaneous frequency over defined samples (Hz)
    pub median_frequency: f64,
    /// Phase of the first defined sample (radians)
    pub first_phase: Option<f64>,
}

/// Install the global tracing subscriber
pub fn init_logging() -> Result<(), CliError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Oscillation plus slow drift described by the settings
pub fn simulate(settings: &EstimateSettings) -> Vec<f64> {
    let n = (settings.fs * settings.duration_s).round().max(0.0) as usize;
    (0..n)
        .map(|i| {
            let t = i as f64 / settings.fs;
            settings.oscillation_amplitude * (2.0 * PI * settings.oscillation_hz * t).sin()
                + settings.drift_amplitude * (2.0 * PI * 0.5 * t).sin()
        })
        .collect()
}

/// Simulate, estimate and summarize
pub fn run(settings: &EstimateSettings) -> Result<Summary, CliError> {
    let sig = simulate(settings);
    if sig.is_empty() {
        return Err(CliError::EmptySignal {
            fs: settings.fs,
            duration_s: settings.duration_s,
        });
    }

    info!(
        "Estimating {:?} over {} samples at {} Hz",
        settings.range,
        sig.len(),
        settings.fs
    );

    let estimator = Estimator::new();
    let phase = estimator.phase_by_time(&sig, settings.fs, &settings.range, &settings.estimate)?;
    let amplitude = estimator.amp_by_time(&sig, settings.fs, &settings.range, &settings.estimate)?;
    let frequency =
        estimator.freq_by_time(&sig, settings.fs, &settings.range, &settings.estimate)?;

    let amplitudes = defined(&amplitude);
    let mut frequencies = defined(&frequency);
    frequencies.sort_by(f64::total_cmp);

    let summary = Summary {
        samples: sig.len(),
        valid_samples: amplitudes.len(),
        mean_amplitude: mean(&amplitudes),
        median_frequency: median(&frequencies),
        first_phase: phase.iter().copied().find(|p| !p.is_nan()),
    };

    info!(
        "Mean amplitude {:.3}, median frequency {:.2} Hz over {} valid samples",
        summary.mean_amplitude, summary.median_frequency, summary.valid_samples
    );

    Ok(summary)
}

fn defined(series: &[f64]) -> Vec<f64> {
    series.iter().copied().filter(|v| !v.is_nan()).collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of an ascending slice
fn median(sorted: &[f64]) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        n if n % 2 == 1 => sorted[n / 2],
        n => 0.5 * (sorted[n / 2 - 1] + sorted[n / 2]),
    }
}
