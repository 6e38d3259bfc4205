//! SampleBuffer type holding quantized mono PCM samples.

/// An ordered, immutable sequence of signed 16-bit samples.
///
/// Produced once by the signal generator and consumed once by the WAV encoder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SampleBuffer {
    samples: Vec<i16>,
}

impl SampleBuffer {
    /// Wraps already-quantized samples.
    pub fn new(samples: Vec<i16>) -> Self {
        Self { samples }
    }

    /// Returns the samples in time order.
    pub fn as_slice(&self) -> &[i16] {
        &self.samples
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Size of the serialized samples in bytes (2 per sample).
    pub fn data_size(&self) -> usize {
        self.samples.len() * std::mem::size_of::<i16>()
    }

    /// Largest absolute sample value, or 0 for an empty buffer.
    pub fn peak(&self) -> u16 {
        self.samples
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Serializes the samples as little-endian 16-bit PCM.
    pub fn to_pcm_bytes(&self) -> Vec<u8> {
        let mut pcm = Vec::with_capacity(self.data_size());
        for sample in &self.samples {
            pcm.extend_from_slice(&sample.to_le_bytes());
        }
        pcm
    }
}

impl From<Vec<i16>> for SampleBuffer {
    fn from(samples: Vec<i16>) -> Self {
        Self::new(samples)
    }
}
