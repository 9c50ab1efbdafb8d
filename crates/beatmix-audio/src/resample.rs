//! Sample rate conversion using linear interpolation.
//!
//! Inputs decoded at different rates are brought to the render context's rate
//! before mixing. A converted channel spans the same duration as its source,
//! so its length is `ceil(len * to_rate / from_rate)`.

use crate::buffer::AudioBuffer;

/// Linear interpolation resampler for planar audio.
#[derive(Debug, Clone, Copy)]
pub struct Resampler {
    from_rate: u32,
    to_rate: u32,
    /// Input samples advanced per output sample.
    step: f64,
}

impl Resampler {
    /// Creates a resampler. Both rates must be positive.
    pub fn new(from_rate: u32, to_rate: u32) -> Self {
        Self {
            from_rate,
            to_rate,
            step: from_rate as f64 / to_rate as f64,
        }
    }

    /// Resamples one channel.
    pub fn process(&self, input: &[f32]) -> Vec<f32> {
        if self.from_rate == self.to_rate || input.is_empty() {
            return input.to_vec();
        }

        let out_len =
            ((input.len() as u128 * self.to_rate as u128).div_ceil(self.from_rate as u128)) as usize;
        let last = input.len() - 1;
        let mut output = Vec::with_capacity(out_len);

        for j in 0..out_len {
            let pos = j as f64 * self.step;
            let idx = (pos as usize).min(last);
            let frac = (pos - idx as f64).clamp(0.0, 1.0) as f32;
            let a = input[idx];
            let b = input[(idx + 1).min(last)];
            output.push(a + (b - a) * frac);
        }

        output
    }
}

/// Resamples every channel of a buffer to `to_rate`.
///
/// Returns a clone when the rates already match.
pub fn resample_buffer(buffer: &AudioBuffer, to_rate: u32) -> AudioBuffer {
    if buffer.sample_rate() == to_rate || to_rate == 0 {
        return buffer.clone();
    }
    let resampler = Resampler::new(buffer.sample_rate(), to_rate);
    let channels = buffer
        .channels()
        .iter()
        .map(|ch| resampler.process(ch))
        .collect();
    // All channels share a source length, so they share an output length.
    AudioBuffer::from_parts(to_rate, channels)
}
