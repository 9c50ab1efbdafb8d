//! Core types for audio mixing.

use crate::buffer::AudioBuffer;
use crate::gain::Gain;

/// Channel count of every mix result.
pub const OUTPUT_CHANNELS: usize = 2;

/// One source and the gain applied to it before summation.
#[derive(Debug, Clone)]
pub struct Track {
    /// Source samples, already at the mix rate.
    pub buffer: AudioBuffer,
    /// Linear gain.
    pub gain: Gain,
}

impl Track {
    /// Creates a track.
    pub fn new(buffer: AudioBuffer, gain: Gain) -> Self {
        Self { buffer, gain }
    }

    /// Creates a track at unity gain.
    pub fn unity(buffer: AudioBuffer) -> Self {
        Self::new(buffer, Gain::UNITY)
    }

    /// The pair of source channels feeding output left and right.
    ///
    /// Mono feeds both sides; channels past index 1 are ignored.
    pub fn stereo_sources(&self) -> Option<(&[f32], &[f32])> {
        let left = self.buffer.channel(0)?;
        let right = self.buffer.channel(1).unwrap_or(left);
        Some((left, right))
    }
}
