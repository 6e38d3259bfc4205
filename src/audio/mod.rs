//! Audio output module.
//!
//! Provides WAV container encoding and file writing for generated tones.

pub mod wav;

// Re-export commonly used items
pub use wav::{encode_wav, samples_to_duration, write_wav, WavFormat, CHANNELS, HEADER_LEN};
