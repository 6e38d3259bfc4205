//! Tone configuration module.
//!
//! Contains the runtime configuration for tonegen: the tone parameters, the
//! output path, and the quantization policy. Values are layered from compiled
//! defaults, an optional JSON config file, and `TONEGEN_*` environment variables;
//! command-line flags are applied on top by [`crate::cli`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{ErrorCode, Result, ToneError};
use crate::types::{
    AudioParameters, Quantization, DEFAULT_AMPLITUDE, DEFAULT_DURATION_SEC,
    DEFAULT_FREQUENCY_HZ, DEFAULT_SAMPLE_RATE,
};

/// Default output location of the fixture, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "debug-audio/test-static.wav";

/// Environment variable names read by [`ToneConfig::apply_env`].
pub const ENV_SAMPLE_RATE: &str = "TONEGEN_SAMPLE_RATE";
pub const ENV_DURATION: &str = "TONEGEN_DURATION";
pub const ENV_FREQUENCY: &str = "TONEGEN_FREQUENCY";
pub const ENV_AMPLITUDE: &str = "TONEGEN_AMPLITUDE";
pub const ENV_OUTPUT: &str = "TONEGEN_OUTPUT";
pub const ENV_QUANTIZATION: &str = "TONEGEN_QUANTIZATION";

/// Runtime configuration for a fixture run.
///
/// Every field is optional in the config file; missing fields keep their
/// default, so an empty `{}` file reproduces the stock fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,

    /// Tone duration in seconds.
    pub duration_sec: f64,

    /// Tone frequency in Hz.
    pub frequency_hz: f64,

    /// Amplitude as a fraction of full scale, in (0, 1].
    pub amplitude: f64,

    /// Where the WAV file is written.
    pub output_path: PathBuf,

    /// How samples are mapped to 16-bit integers.
    pub quantization: Quantization,
}

impl ToneConfig {
    /// Creates a ToneConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a config file, filling missing fields with defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ToneError::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        let config: Self = serde_json::from_str(&text).map_err(|e| {
            ToneError::with_source(
                ErrorCode::InvalidParameter,
                format!("Invalid config file {}: {}", path.display(), e),
                e,
            )
        })?;

        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Loads the platform config file if one exists, otherwise returns defaults.
    pub fn load_default() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Overrides fields from variables returned by `lookup`.
    ///
    /// Reads the following variables:
    /// - `TONEGEN_SAMPLE_RATE` - Sample rate in Hz
    /// - `TONEGEN_DURATION` - Duration in seconds
    /// - `TONEGEN_FREQUENCY` - Tone frequency in Hz
    /// - `TONEGEN_AMPLITUDE` - Amplitude in (0, 1]
    /// - `TONEGEN_OUTPUT` - Output WAV path
    /// - `TONEGEN_QUANTIZATION` - `round` or `truncate`
    ///
    /// Unset variables leave the field as it is. Values that fail to parse are skipped with a warning. Values that parse
    /// but are out of range are kept so that validation reports them.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = parse_var(&lookup, ENV_SAMPLE_RATE) {
            self.sample_rate = value;
        }

        if let Some(value) = parse_var(&lookup, ENV_DURATION) {
            self.duration_sec = value;
        }

        if let Some(value) = parse_var(&lookup, ENV_FREQUENCY) {
            self.frequency_hz = value;
        }

        if let Some(value) = parse_var(&lookup, ENV_AMPLITUDE) {
            self.amplitude = value;
        }

        if let Some(path) = lookup(ENV_OUTPUT) {
            self.output_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(ENV_QUANTIZATION) {
            match Quantization::parse(&raw) {
                Some(quantization) => self.quantization = quantization,
                None => warn!(var = ENV_QUANTIZATION, value = %raw, "Ignoring unknown quantization"),
            }
        }
    }

    /// Converts the config into validated tone parameters.
    pub fn to_parameters(&self) -> Result<AudioParameters> {
        if self.output_path.as_os_str().is_empty() {
            return Err(ToneError::invalid_parameter(
                "output path",
                "must not be empty",
            ));
        }

        AudioParameters::new(
            self.sample_rate,
            self.duration_sec,
            self.frequency_hz,
            self.amplitude,
        )
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        self.to_parameters().err().map(|e| e.message)
    }
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration_sec: DEFAULT_DURATION_SEC,
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            amplitude: DEFAULT_AMPLITUDE,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            quantization: Quantization::default(),
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(var = key, value = %raw, "Ignoring unparseable environment variable");
            None
        }
    }
}

/// Returns the platform-specific config file location.
///
/// Uses the `directories` crate to find appropriate locations:
/// - macOS: ~/Library/Application Support/tonegen/config.json
/// - Linux: ~/.config/tonegen/config.json
/// - Windows: C:\Users\<user>\AppData\Roaming\tonegen\config\config.json
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "tonegen")
        .map(|dirs| dirs.config_dir().join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_stock_fixture() {
        let config = ToneConfig::new();
        assert_eq!(config.sample_rate, 48000);
        assert_eq!(config.duration_sec, 1.0);
        assert_eq!(config.frequency_hz, 440.0);
        assert_eq!(config.amplitude, 0.3);
        assert_eq!(config.output_path, PathBuf::from("debug-audio/test-static.wav"));
        assert_eq!(config.quantization, Quantization::Round);
        assert!(config.validate().is_none());
    }

    #[test]
    fn env_overrides() {
        let mut config = ToneConfig::new();
        config.apply_env(lookup_from(&[
            (ENV_SAMPLE_RATE, "44100"),
            (ENV_DURATION, " 2.5 "),
            (ENV_FREQUENCY, "1000"),
            (ENV_AMPLITUDE, "0.8"),
            (ENV_OUTPUT, "fixtures/tone.wav"),
            (ENV_QUANTIZATION, "Truncate"),
        ]));

        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.duration_sec, 2.5);
        assert_eq!(config.frequency_hz, 1000.0);
        assert_eq!(config.amplitude, 0.8);
        assert_eq!(config.output_path, PathBuf::from("fixtures/tone.wav"));
        assert_eq!(config.quantization, Quantization::Truncate);
    }

    #[test]
    fn unparseable_env_values_ignored() {
        let mut config = ToneConfig::new();
        config.apply_env(lookup_from(&[
            (ENV_SAMPLE_RATE, "fast"),
            (ENV_DURATION, ""),
            (ENV_QUANTIZATION, "dither"),
        ]));
        assert_eq!(config, ToneConfig::default());
    }

    #[test]
    fn out_of_range_env_values_fail_validation() {
        let mut config = ToneConfig::new();
        config.apply_env(lookup_from(&[(ENV_DURATION, "-1")]));
        assert_eq!(config.duration_sec, -1.0);
        assert!(config.validate().unwrap().contains("duration"));
    }

    #[test]
    fn config_validation() {
        let mut config = ToneConfig::new();
        assert!(config.validate().is_none());

        config.sample_rate = 0;
        assert!(config.validate().is_some());

        config.sample_rate = 16000;
        config.amplitude = 1.5;
        assert!(config.validate().is_some());

        config.amplitude = 1.0;
        config.output_path = PathBuf::new();
        assert!(config.validate().unwrap().contains("output path"));
    }

    #[test]
    fn load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "sample_rate": 16000, "quantization": "truncate" }"#,
        )
        .unwrap();

        let config = ToneConfig::load(&path).unwrap();

        assert_eq!(config.sample_rate, 16000);
        assert_eq!(config.quantization, Quantization::Truncate);
        assert_eq!(config.frequency_hz, 440.0);
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
    }

    #[test]
    fn load_malformed_file_is_invalid_parameter() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ sample_rate: ").unwrap();

        let err = ToneConfig::load(&path).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidParameter);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = ToneConfig::load(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.code, ErrorCode::Io);
    }

    #[test]
    fn default_config_path_is_json() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("config.json"));
        }
    }
}
