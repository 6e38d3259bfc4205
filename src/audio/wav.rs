//! WAV file encoder for test fixtures.
//!
//! Writes mono 16-bit PCM WAV files with the canonical 44-byte header and no
//! extra chunks, so the layout of every fixture is known byte for byte.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ToneError};
use crate::types::{AudioParameters, SampleBuffer};

/// Size of the canonical PCM WAV header in bytes.
pub const HEADER_LEN: usize = 44;

/// Bytes counted by the RIFF size field besides the data: header minus "RIFF" and the size itself.
pub const RIFF_SIZE_OVERHEAD: u32 = 36;

/// Length of the PCM "fmt " chunk body.
pub const FMT_CHUNK_LEN: u32 = 16;

/// WAVE_FORMAT_PCM.
pub const PCM_FORMAT_TAG: u16 = 1;

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bits per sample.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Bytes per sample per channel.
pub const BYTES_PER_SAMPLE: u16 = BITS_PER_SAMPLE / 8;

/// WAV format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 here).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono 16-bit format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: CHANNELS,
            sample_rate,
            bits_per_sample: BITS_PER_SAMPLE,
        }
    }

    /// Bytes per sample frame across all channels.
    pub fn block_align(&self) -> u16 {
        self.channels * (self.bits_per_sample / 8)
    }

    /// Bytes per second of audio, or None if it does not fit the 32-bit field.
    pub fn byte_rate(&self) -> Option<u32> {
        self.sample_rate.checked_mul(self.block_align() as u32)
    }
}

/// Writes the 44-byte RIFF/WAVE header for `data_size` bytes of PCM.
pub fn write_header<W: Write>(writer: &mut W, format: &WavFormat, data_size: u32) -> io::Result<()> {
    let byte_rate = format.byte_rate().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "byte rate overflows u32")
    })?;
    let file_size = RIFF_SIZE_OVERHEAD.checked_add(data_size).ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "RIFF size overflows u32")
    })?;

    // RIFF chunk descriptor
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt sub-chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&FMT_CHUNK_LEN.to_le_bytes())?;
    writer.write_all(&PCM_FORMAT_TAG.to_le_bytes())?;
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&byte_rate.to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data sub-chunk header
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;

    Ok(())
}

/// Encodes a complete WAV file in memory.
///
/// The result is the 44-byte header followed by every sample as little-endian
/// signed 16-bit, in order.
pub fn encode_wav(params: &AudioParameters, samples: &SampleBuffer) -> Result<Vec<u8>> {
    let data_size = u32::try_from(samples.data_size())
        .ok()
        .filter(|size| size.checked_add(RIFF_SIZE_OVERHEAD).is_some())
        .ok_or_else(|| {
            ToneError::invalid_parameter(
                "sample count",
                format!(
                    "{} samples do not fit in a WAV data chunk",
                    samples.len()
                ),
            )
        })?;

    let format = WavFormat::mono(params.sample_rate());
    let byte_rate = format.byte_rate().ok_or_else(|| {
        ToneError::invalid_parameter(
            "sample rate",
            format!("{} Hz overflows the WAV byte rate field", format.sample_rate),
        )
    })?;
    let mut bytes = Vec::with_capacity(HEADER_LEN + samples.data_size());

    write_header(&mut bytes, &format, data_size)
        .map_err(|e| ToneError::io("Failed to encode WAV header", e))?;
    bytes.extend_from_slice(&samples.to_pcm_bytes());

    debug!(
        data_size,
        file_size = bytes.len(),
        byte_rate,
        "Encoded WAV container"
    );

    Ok(bytes)
}

/// Writes encoded WAV bytes to `path`, creating parent directories as needed.
///
/// The bytes go to a temporary sibling file first and are renamed into place,
/// so `path` either holds the complete file or is left untouched.
pub fn write_wav(bytes: &[u8], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            ToneError::io(
                format!("Failed to create directory {}", parent.display()),
                e,
            )
        })?;
    }

    let tmp_path = temp_path_for(path);
    debug!(tmp = %tmp_path.display(), "Writing WAV to temporary file");

    if let Err(e) = write_file(&tmp_path, bytes) {
        let _ = fs::remove_file(&tmp_path);
        return Err(ToneError::io(
            format!("Failed to write WAV file {}", tmp_path.display()),
            e,
        ));
    }

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(ToneError::io(
            format!("Failed to move WAV file into place at {}", path.display()),
            e,
        ));
    }

    debug!(path = %path.display(), bytes = bytes.len(), "WAV file written");
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// Returns `<path>.tmp`, next to the final file.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: usize, sample_rate: u32) -> f64 {
    sample_count as f64 / sample_rate as f64
}
