//! Fixture pipeline.
//!
//! Runs the three stages in order: synthesize samples, encode the WAV
//! container, write the file. Parameters are validated before any stage runs,
//! so invalid input never touches the filesystem.

use std::path::Path;

use tracing::info;

use crate::audio::wav::{encode_wav, write_wav, HEADER_LEN};
use crate::config::ToneConfig;
use crate::error::Result;
use crate::generation::sine::generate_sine_with;
use crate::types::{AudioParameters, Quantization, WavReport};

/// Generates a tone and writes it as a WAV file at `output`.
///
/// # Arguments
///
/// * `params` - Validated tone parameters
/// * `quantization` - How samples are mapped to 16-bit integers
/// * `output` - Destination path; parent directories are created
///
/// # Returns
///
/// A [`WavReport`] describing the file that was written.
///
/// # Example
///
/// ```ignore
/// use tonegen::generation::render_tone;
/// use tonegen::types::{AudioParameters, Quantization};
///
/// let report = render_tone(
///     &AudioParameters::default(),
///     Quantization::Round,
///     Path::new("debug-audio/test-static.wav"),
/// )?;
/// assert_eq!(report.file_size_bytes, 96044);
/// ```
pub fn render_tone(
    params: &AudioParameters,
    quantization: Quantization,
    output: &Path,
) -> Result<WavReport> {
    let samples = generate_sine_with(params, quantization);
    let bytes = encode_wav(params, &samples)?;
    write_wav(&bytes, output)?;

    info!(
        path = %output.display(),
        bytes = bytes.len(),
        samples = samples.len(),
        "Wrote tone fixture"
    );

    Ok(WavReport::new(
        output.to_path_buf(),
        bytes.len() as u64,
        params,
        quantization,
        samples.len(),
        &bytes[HEADER_LEN..],
    ))
}

/// Validates `config` and renders the tone it describes.
pub fn render_from_config(config: &ToneConfig) -> Result<WavReport> {
    let params = config.to_parameters()?;
    render_tone(&params, config.quantization, &config.output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::types::compute_pcm_digest;
    use tempfile::tempdir;

    #[test]
    fn report_matches_file_on_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let params = AudioParameters::new(8000, 0.5, 250.0, 0.8).unwrap();

        let report = render_tone(&params, Quantization::Truncate, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(report.file_size_bytes, written.len() as u64);
        assert_eq!(report.sample_count, 4000);
        assert_eq!(report.sample_rate, 8000);
        assert_eq!(report.quantization, Quantization::Truncate);
        assert_eq!(report.pcm_digest, compute_pcm_digest(&written[HEADER_LEN..]));
        assert_eq!(report.path, path);
    }

    #[test]
    fn same_parameters_give_same_digest() {
        let dir = tempdir().unwrap();
        let params = AudioParameters::default();

        let a = render_tone(&params, Quantization::Round, &dir.path().join("a.wav")).unwrap();
        let b = render_tone(&params, Quantization::Round, &dir.path().join("b.wav")).unwrap();
        let c = render_tone(&params, Quantization::Truncate, &dir.path().join("c.wav")).unwrap();

        assert_eq!(a.pcm_digest, b.pcm_digest);
        assert_ne!(a.pcm_digest, c.pcm_digest);
    }

    #[test]
    fn invalid_config_writes_nothing() {
        let dir = tempdir().unwrap();
        let config = ToneConfig {
            sample_rate: 0,
            output_path: dir.path().join("out").join("tone.wav"),
            ..ToneConfig::default()
        };

        let err = render_from_config(&config).unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidParameter);
        assert!(!dir.path().join("out").exists());
    }
}
