//! The two-input mixing entry point.

use tracing::{debug, info};

use crate::buffer::AudioBuffer;
use crate::context::RenderHost;
use crate::error::{InputSlot, MixingError};
use crate::gain::Gain;

use super::types::Track;

/// Knobs for a mix run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MixOptions {
    /// Output sample rate. `None` picks the higher of the two input rates.
    pub sample_rate: Option<u32>,
}

/// Mixes pairs of buffers through contexts acquired from a [`RenderHost`].
#[derive(Debug, Clone, Default)]
pub struct MixEngine {
    host: RenderHost,
    options: MixOptions,
}

impl MixEngine {
    /// Creates an engine on a fresh, unbounded host.
    pub fn new(options: MixOptions) -> Self {
        Self {
            host: RenderHost::new(),
            options,
        }
    }

    /// Creates an engine that acquires contexts from `host`.
    pub fn with_host(host: RenderHost, options: MixOptions) -> Self {
        Self { host, options }
    }

    /// The host contexts are acquired from.
    pub fn host(&self) -> &RenderHost {
        &self.host
    }

    /// The options in effect.
    pub fn options(&self) -> &MixOptions {
        &self.options
    }

    /// Rate the mix of `a` and `b` is rendered at.
    pub fn output_rate(&self, a: &AudioBuffer, b: &AudioBuffer) -> u32 {
        self.options
            .sample_rate
            .unwrap_or_else(|| a.sample_rate().max(b.sample_rate()))
    }

    /// Mixes two gained buffers into one clipped stereo buffer.
    ///
    /// The output spans the longer input; the shorter one contributes
    /// silence past its end. Inputs are not modified.
    pub fn mix(
        &self,
        a: &AudioBuffer,
        gain_a: Gain,
        b: &AudioBuffer,
        gain_b: Gain,
    ) -> Result<AudioBuffer, MixingError> {
        if a.is_empty() {
            return Err(MixingError::EmptyInput { slot: InputSlot::A });
        }
        if b.is_empty() {
            return Err(MixingError::EmptyInput { slot: InputSlot::B });
        }

        let rate = self.output_rate(a, b);
        let ctx = self.host.acquire(rate)?;

        let num_samples = a.frames_at_rate(rate).max(b.frames_at_rate(rate));
        debug!(
            rate,
            num_samples,
            a_channels = a.num_channels(),
            b_channels = b.num_channels(),
            "rendering mix"
        );

        let tracks = vec![
            Track::new(ctx.conform(a), gain_a),
            Track::new(ctx.conform(b), gain_b),
        ];
        let output = ctx.render(num_samples, tracks);

        info!(
            sample_rate = output.sample_rate(),
            samples = output.len(),
            duration_secs = output.duration_seconds(),
            "mix complete"
        );
        Ok(output)
    }
}

/// Mixes two buffers with default options.
pub fn mix(
    a: &AudioBuffer,
    gain_a: Gain,
    b: &AudioBuffer,
    gain_b: Gain,
) -> Result<AudioBuffer, MixingError> {
    MixEngine::default().mix(a, gain_a, b, gain_b)
}
