//! WAV file generation result type.

use crate::buffer::AudioBuffer;
use crate::error::EncodingError;

use super::writer::{encode_wav, WAV_HEADER_LEN};

/// Result of WAV file generation.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples per channel.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes a buffer.
    pub fn from_buffer(buffer: &AudioBuffer) -> Result<Self, EncodingError> {
        let wav_data = encode_wav(buffer)?;
        let pcm_hash = blake3::hash(&wav_data[WAV_HEADER_LEN..])
            .to_hex()
            .to_string();

        Ok(Self {
            wav_data,
            pcm_hash,
            // encode_wav has already checked the channel count fits
            channels: buffer.num_channels() as u16,
            sample_rate: buffer.sample_rate(),
            num_samples: buffer.len(),
        })
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Size of the encoded file in bytes.
    pub fn len(&self) -> usize {
        self.wav_data.len()
    }

    /// True if the encoded file holds no samples.
    pub fn is_empty(&self) -> bool {
        self.num_samples == 0
    }
}
