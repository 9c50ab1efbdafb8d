//! Sample processing: clipping, peak normalization and fades.

use crate::buffer::AudioBuffer;

/// Peak level [`normalize`] targets when the caller has no preference.
pub const DEFAULT_NORMALIZE_TARGET: f32 = 0.9;

/// Clamps a sample to `[-1.0, 1.0]`.
#[inline]
pub fn hard_clip(sample: f32) -> f32 {
    sample.clamp(-1.0, 1.0)
}

/// Hard clips a buffer in place.
pub fn hard_clip_buffer(samples: &mut [f32]) {
    for sample in samples.iter_mut() {
        *sample = hard_clip(*sample);
    }
}

/// Scales all channels so the peak sits at `target_level`.
///
/// Silent buffers are left unchanged. `target_level` is clamped to `[0, 1]`
/// so the result stays in the encoder's input range.
pub fn normalize(buffer: &mut AudioBuffer, target_level: f32) {
    let peak = buffer.peak();
    if peak <= 0.0 {
        return;
    }

    let gain = target_level.clamp(0.0, 1.0) / peak;
    for channel in buffer.channels_mut() {
        for sample in channel.iter_mut() {
            *sample *= gain;
        }
    }
}

/// Applies linear fade-in and fade-out ramps to every channel.
///
/// Ramps longer than the buffer are cut off at its edges.
pub fn apply_fade(buffer: &mut AudioBuffer, fade_in_samples: usize, fade_out_samples: usize) {
    for channel in buffer.channels_mut() {
        let len = channel.len();

        for (i, sample) in channel.iter_mut().take(fade_in_samples).enumerate() {
            *sample *= i as f32 / fade_in_samples as f32;
        }

        // Only the last `len` steps of a long ramp land inside the channel.
        let start = len.saturating_sub(fade_out_samples);
        for (idx, sample) in channel.iter_mut().enumerate().skip(start) {
            let remaining = (len - idx) as f64;
            *sample *= (remaining / fade_out_samples as f64) as f32;
        }
    }
}
