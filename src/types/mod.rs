//! Core types for tonegen.
//!
//! This module re-exports the data types that flow through the pipeline:
//! - [`AudioParameters`]: Validated description of the tone
//! - [`SampleBuffer`]: Quantized 16-bit samples produced by the generator
//! - [`WavReport`]: Summary of a fixture written to disk

mod buffer;
mod params;
mod report;

// Re-export all types at the module level
pub use buffer::SampleBuffer;
pub use params::{
    AudioParameters, Quantization, DEFAULT_AMPLITUDE, DEFAULT_DURATION_SEC,
    DEFAULT_FREQUENCY_HZ, DEFAULT_SAMPLE_RATE, FULL_SCALE, MAX_SAMPLE_COUNT, MAX_SAMPLE_RATE,
};
pub use report::{compute_pcm_digest, WavReport};
