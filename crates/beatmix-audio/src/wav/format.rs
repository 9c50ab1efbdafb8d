//! WAV file format parameters.

use crate::buffer::AudioBuffer;
use crate::error::EncodingError;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a 16-bit format with the given channel count.
    pub fn new(channels: u16, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Creates a mono WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self::new(1, sample_rate)
    }

    /// Creates a stereo WAV format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self::new(2, sample_rate)
    }

    /// Derives the format for encoding `buffer`.
    pub fn for_buffer(buffer: &AudioBuffer) -> Result<Self, EncodingError> {
        let num_channels = buffer.num_channels();
        if num_channels == 0 {
            return Err(EncodingError::NoChannels);
        }
        let channels =
            u16::try_from(num_channels).map_err(|_| EncodingError::TooManyChannels(num_channels))?;
        let format = Self::new(channels, buffer.sample_rate());

        // The header stores channels * 2 and rate * channels * 2 in 16 and 32 bits.
        let fits = channels.checked_mul(format.bytes_per_sample()).is_some()
            && buffer
                .sample_rate()
                .checked_mul(u32::from(channels) * 2)
                .is_some();
        if !fits {
            return Err(EncodingError::TooManyChannels(num_channels));
        }
        Ok(format)
    }

    /// Calculates bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    pub fn block_align(&self) -> u16 {
        self.channels.wrapping_mul(self.bytes_per_sample())
    }

    /// Calculates byte rate (bytes per second).
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate.wrapping_mul(u32::from(self.block_align()))
    }
}
