//! Tone generation module.
//!
//! Provides sine synthesis and the pipeline that turns a tone into a WAV fixture.

pub mod pipeline;
pub mod sine;

// Re-export commonly used items
pub use pipeline::{render_from_config, render_tone};
pub use sine::{generate_sine, generate_sine_with, quantize};
