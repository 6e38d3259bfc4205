//! tonegen: sine tone WAV fixtures for audio pipeline testing.
//!
//! This library synthesizes a pure sine tone, quantizes it to 16-bit PCM, and
//! wraps it in a canonical 44-byte-header mono WAV container.
//!
//! # Modules
//!
//! - [`types`]: Core data types (AudioParameters, SampleBuffer, WavReport)
//! - [`generation`]: Sine synthesis and the fixture pipeline
//! - [`audio`]: WAV container encoding and atomic file writing
//! - [`config`]: Runtime configuration (ToneConfig)
//! - [`cli`]: Command-line flags layered over the configuration
//! - [`error`]: Error types and codes (ToneError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use tonegen::{
//!     generation::{generate_sine, render_tone},
//!     audio::encode_wav,
//!     types::{AudioParameters, Quantization},
//! };
//!
//! // 1 second of 440Hz at 48kHz, 30% of full scale
//! let params = AudioParameters::new(48000, 1.0, 440.0, 0.3)?;
//!
//! // In memory
//! let samples = generate_sine(&params);
//! let wav = encode_wav(&params, &samples)?;
//! assert_eq!(wav.len(), 96044);
//!
//! // Or straight to disk
//! let report = render_tone(&params, Quantization::Round, "debug-audio/test-static.wav".as_ref())?;
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use config::{ToneConfig, DEFAULT_OUTPUT_PATH};
pub use error::{ErrorCode, Result, ToneError};
pub use types::{AudioParameters, Quantization, SampleBuffer, WavReport};
