//! WavReport type describing a fixture that was written to disk.
//!
//! A report is produced after every successful write. The `pcm_digest` lets a
//! consuming pipeline confirm it is reading the fixture it expects without
//! comparing whole files.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::PathBuf;

use super::params::{AudioParameters, Quantization};
use crate::audio::wav::samples_to_duration;

/// Summary of a written WAV fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WavReport {
    /// Path the file was written to.
    pub path: PathBuf,

    /// Total size of the file in bytes (header included).
    pub file_size_bytes: u64,

    /// Number of samples in the data chunk.
    pub sample_count: usize,

    /// Sample rate in Hz.
    pub sample_rate: u32,

    /// Requested duration in seconds.
    pub duration_sec: f64,

    /// Duration actually covered by the samples, after rounding the count.
    pub actual_duration_sec: f64,

    /// Tone frequency in Hz.
    pub frequency_hz: f64,

    /// Amplitude as a fraction of full scale.
    pub amplitude: f64,

    /// Quantization policy used for the samples.
    pub quantization: Quantization,

    /// First 16 hex characters of the SHA256 of the data chunk bytes.
    pub pcm_digest: String,
}

impl WavReport {
    /// Builds a report from the parameters and the encoded data chunk.
    pub fn new(
        path: PathBuf,
        file_size_bytes: u64,
        params: &AudioParameters,
        quantization: Quantization,
        sample_count: usize,
        pcm: &[u8],
    ) -> Self {
        Self {
            path,
            file_size_bytes,
            sample_count,
            sample_rate: params.sample_rate(),
            duration_sec: params.duration_sec(),
            actual_duration_sec: samples_to_duration(sample_count, params.sample_rate()),
            frequency_hz: params.frequency_hz(),
            amplitude: params.amplitude(),
            quantization,
            pcm_digest: compute_pcm_digest(pcm),
        }
    }
}

/// Computes a short, deterministic digest of PCM data.
///
/// Returns the first 8 bytes (16 hex chars) of the SHA256 of `pcm`.
pub fn compute_pcm_digest(pcm: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(pcm);
    let result = hasher.finalize();
    hex::encode(&result[..8])
}
