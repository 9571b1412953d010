//! Demo Settings

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use timefrequency::{EstimateOptions, FrequencyRange};

/// Default settings file name, without extension
pub const DEFAULT_SETTINGS_FILE: &str = "timefreq";

/// Prefix of environment overrides, e.g. `TIMEFREQ__FS=1000`
pub const ENV_PREFIX: &str = "TIMEFREQ";

/// Synthetic oscillation and estimation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateSettings {
    /// Sampling rate (Hz)
    pub fs: f64,
    /// Length of the synthetic signal (seconds)
    pub duration_s: f64,
    /// Frequency of the simulated oscillation (Hz)
    pub oscillation_hz: f64,
    /// Amplitude of the simulated oscillation
    pub oscillation_amplitude: f64,
    /// Amplitude of a slow 0.5 Hz drift added on top
    pub drift_amplitude: f64,
    /// Band to estimate in
    pub range: FrequencyRange,
    /// Estimation options
    pub estimate: EstimateOptions,
}

impl Default for EstimateSettings {
    fn default() -> Self {
        Self {
            fs: 500.0,
            duration_s: 10.0,
            oscillation_hz: 10.0,
            oscillation_amplitude: 1.0,
            drift_amplitude: 0.5,
            range: FrequencyRange::band(8.0, 12.0),
            estimate: EstimateOptions::default(),
        }
    }
}

impl EstimateSettings {
    /// Layer an optional settings file and `TIMEFREQ__*` variables over the defaults.
    ///
    /// Without an explicit path, `timefreq.{toml,json,yaml}` in the working
    /// directory is used when present.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
