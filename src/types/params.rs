//! AudioParameters type describing the tone to synthesize.
//!
//! Parameters are validated once at construction and never mutated afterwards,
//! so every downstream stage can rely on them being in range.

use serde::{Deserialize, Serialize};

use crate::audio::wav::{BYTES_PER_SAMPLE, CHANNELS, RIFF_SIZE_OVERHEAD};
use crate::error::{Result, ToneError};

/// Default sample rate in Hz (48kHz, the WebRTC/Opus native rate).
pub const DEFAULT_SAMPLE_RATE: u32 = 48000;

/// Default tone duration in seconds.
pub const DEFAULT_DURATION_SEC: f64 = 1.0;

/// Default tone frequency in Hz (A4).
pub const DEFAULT_FREQUENCY_HZ: f64 = 440.0;

/// Default amplitude as a fraction of full scale.
pub const DEFAULT_AMPLITUDE: f64 = 0.3;

/// Full-scale magnitude of a signed 16-bit sample.
pub const FULL_SCALE: f64 = 32767.0;

/// Largest sample count whose data chunk still fits the 32-bit RIFF size field.
pub const MAX_SAMPLE_COUNT: u64 =
    (u32::MAX as u64 - RIFF_SIZE_OVERHEAD as u64) / BYTES_PER_SAMPLE as u64;

/// Largest sample rate whose byte rate still fits the 32-bit header field.
pub const MAX_SAMPLE_RATE: u32 = u32::MAX / (CHANNELS as u32 * BYTES_PER_SAMPLE as u32);

/// Policy for mapping a real amplitude onto a signed 16-bit sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Quantization {
    /// Round to the nearest integer. Lower quantization error.
    #[default]
    Round,

    /// Truncate toward zero, matching a plain integer cast.
    Truncate,
}

impl Quantization {
    /// Returns the string representation of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Quantization::Round => "round",
            Quantization::Truncate => "truncate",
        }
    }

    /// Parses a policy from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "round" | "nearest" => Some(Quantization::Round),
            "truncate" | "trunc" => Some(Quantization::Truncate),
            _ => None,
        }
    }
}

impl std::fmt::Display for Quantization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable description of a pure sine tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioParameters {
    sample_rate: u32,
    duration_sec: f64,
    frequency_hz: f64,
    amplitude: f64,
}

impl AudioParameters {
    /// Creates validated parameters.
    ///
    /// Fails with `InvalidParameter` if the sample rate is zero, the duration or
    /// frequency is not a positive finite number, the amplitude is outside
    /// (0, 1], or the resulting sample count cannot be described by a WAV header.
    pub fn new(
        sample_rate: u32,
        duration_sec: f64,
        frequency_hz: f64,
        amplitude: f64,
    ) -> Result<Self> {
        if sample_rate == 0 {
            return Err(ToneError::invalid_parameter(
                "sample rate",
                "must be a positive number of Hz, got 0",
            ));
        }

        if sample_rate > MAX_SAMPLE_RATE {
            return Err(ToneError::invalid_parameter(
                "sample rate",
                format!(
                    "{} Hz overflows the WAV byte rate field (maximum {})",
                    sample_rate, MAX_SAMPLE_RATE
                ),
            ));
        }

        if !duration_sec.is_finite() || duration_sec <= 0.0 {
            return Err(ToneError::invalid_parameter(
                "duration",
                format!("must be a positive number of seconds, got {}", duration_sec),
            ));
        }

        if !frequency_hz.is_finite() || frequency_hz <= 0.0 {
            return Err(ToneError::invalid_parameter(
                "frequency",
                format!("must be a positive number of Hz, got {}", frequency_hz),
            ));
        }

        if !amplitude.is_finite() || amplitude <= 0.0 || amplitude > 1.0 {
            return Err(ToneError::invalid_parameter(
                "amplitude",
                format!("must be in (0, 1], got {}", amplitude),
            ));
        }

        let samples = (sample_rate as f64 * duration_sec).round();
        if samples > MAX_SAMPLE_COUNT as f64 {
            return Err(ToneError::invalid_parameter(
                "duration",
                format!(
                    "{} seconds at {} Hz needs {} samples (maximum {})",
                    duration_sec, sample_rate, samples, MAX_SAMPLE_COUNT
                ),
            ));
        }

        Ok(Self {
            sample_rate,
            duration_sec,
            frequency_hz,
            amplitude,
        })
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Duration in seconds.
    pub fn duration_sec(&self) -> f64 {
        self.duration_sec
    }

    /// Tone frequency in Hz.
    pub fn frequency_hz(&self) -> f64 {
        self.frequency_hz
    }

    /// Amplitude as a fraction of full scale.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Number of samples the tone spans: `round(sample_rate * duration)`.
    pub fn sample_count(&self) -> usize {
        (self.sample_rate as f64 * self.duration_sec).round() as usize
    }

    /// Largest sample magnitude the tone can reach: `round(amplitude * 32767)`.
    pub fn peak_sample(&self) -> i16 {
        (self.amplitude * FULL_SCALE).round() as i16
    }
}

impl Default for AudioParameters {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration_sec: DEFAULT_DURATION_SEC,
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }
}
