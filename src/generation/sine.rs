//! Sine tone synthesis.
//!
//! Sample `i` is `amplitude * sin(2π * frequency * i / sample_rate)`, scaled to
//! 16-bit full scale and quantized with the chosen [`Quantization`] policy.

use std::f64::consts::PI;

use tracing::debug;

use crate::types::{AudioParameters, Quantization, SampleBuffer, FULL_SCALE};

/// Generates a sine tone with the default (rounding) quantization.
pub fn generate_sine(params: &AudioParameters) -> SampleBuffer {
    generate_sine_with(params, Quantization::default())
}

/// Generates a sine tone of `params.sample_count()` samples.
pub fn generate_sine_with(params: &AudioParameters, quantization: Quantization) -> SampleBuffer {
    let count = params.sample_count();
    let sample_rate = params.sample_rate() as f64;
    let omega = 2.0 * PI * params.frequency_hz();

    let samples: Vec<i16> = (0..count)
        .map(|i| {
            let t = i as f64 / sample_rate;
            let value = params.amplitude() * (omega * t).sin();
            quantize(value, quantization)
        })
        .collect();

    debug!(
        samples = samples.len(),
        quantization = quantization.as_str(),
        "Generated sine tone"
    );

    SampleBuffer::new(samples)
}

/// Maps a value in [-1, 1] onto a signed 16-bit sample, clamping out-of-range input.
pub fn quantize(value: f64, quantization: Quantization) -> i16 {
    let scaled = value * FULL_SCALE;
    let quantized = match quantization {
        Quantization::Round => scaled.round(),
        Quantization::Truncate => scaled.trunc(),
    };
    quantized.clamp(i16::MIN as f64, i16::MAX as f64) as i16
}
