//! Decoded audio buffers.
//!
//! An [`AudioBuffer`] holds planar f32 samples (one `Vec` per channel) plus the
//! sample rate they were captured at. All channels share one length.

use crate::error::BufferError;

/// Planar floating-point audio with a fixed sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

impl AudioBuffer {
    /// Creates a buffer from per-channel sample vectors.
    ///
    /// Zero channels or zero-length channels are allowed; such a buffer is
    /// [empty](Self::is_empty) and is rejected by the mixer and encoder.
    pub fn from_channels(sample_rate: u32, channels: Vec<Vec<f32>>) -> Result<Self, BufferError> {
        if sample_rate == 0 {
            return Err(BufferError::ZeroSampleRate);
        }
        if let Some(first) = channels.first() {
            let expected = first.len();
            if let Some((channel, ch)) = channels
                .iter()
                .enumerate()
                .find(|(_, ch)| ch.len() != expected)
            {
                return Err(BufferError::RaggedChannels {
                    channel,
                    expected,
                    found: ch.len(),
                });
            }
        }
        Ok(Self {
            sample_rate,
            channels,
        })
    }

    /// Assembles a buffer whose invariants the caller already guarantees.
    pub(crate) fn from_parts(sample_rate: u32, channels: Vec<Vec<f32>>) -> Self {
        debug_assert!(channels.windows(2).all(|w| w[0].len() == w[1].len()));
        Self {
            sample_rate,
            channels,
        }
    }

    /// Creates a mono buffer.
    pub fn mono(sample_rate: u32, samples: Vec<f32>) -> Result<Self, BufferError> {
        Self::from_channels(sample_rate, vec![samples])
    }

    /// Creates a stereo buffer.
    pub fn stereo(sample_rate: u32, left: Vec<f32>, right: Vec<f32>) -> Result<Self, BufferError> {
        Self::from_channels(sample_rate, vec![left, right])
    }

    /// Creates a buffer of silence.
    pub fn silence(sample_rate: u32, num_channels: usize, len: usize) -> Result<Self, BufferError> {
        Self::from_channels(sample_rate, vec![vec![0.0; len]; num_channels])
    }

    /// Splits interleaved frames into channels. A trailing partial frame is dropped.
    pub fn from_interleaved(
        sample_rate: u32,
        num_channels: usize,
        interleaved: &[f32],
    ) -> Result<Self, BufferError> {
        if num_channels == 0 {
            return Self::from_channels(sample_rate, Vec::new());
        }
        let frames = interleaved.len() / num_channels;
        let mut channels = vec![Vec::with_capacity(frames); num_channels];
        for frame in interleaved.chunks_exact(num_channels) {
            for (channel, &sample) in channels.iter_mut().zip(frame) {
                channel.push(sample);
            }
        }
        Self::from_channels(sample_rate, channels)
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of channels.
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel.
    pub fn len(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// True if there are no channels or no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.len() as f64 / self.sample_rate as f64
    }

    /// Number of samples this buffer spans at `target_rate`, rounded up.
    ///
    /// Equal to `ceil(duration * target_rate)`, computed without floating point.
    pub fn frames_at_rate(&self, target_rate: u32) -> usize {
        let len = self.len() as u128;
        let to = target_rate as u128;
        let from = self.sample_rate as u128;
        ((len * to).div_ceil(from)) as usize
    }

    /// Samples of one channel.
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// All channels.
    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    pub(crate) fn channels_mut(&mut self) -> &mut [Vec<f32>] {
        &mut self.channels
    }

    /// Interleaves channels frame by frame.
    pub fn interleave(&self) -> Vec<f32> {
        let mut output = Vec::with_capacity(self.len() * self.num_channels());
        for i in 0..self.len() {
            for channel in &self.channels {
                output.push(channel[i]);
            }
        }
        output
    }

    /// Peak absolute sample value across all channels.
    pub fn peak(&self) -> f32 {
        self.channels
            .iter()
            .flatten()
            .map(|s| s.abs())
            .fold(0.0_f32, f32::max)
    }
}
