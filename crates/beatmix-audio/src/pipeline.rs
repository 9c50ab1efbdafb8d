//! Decode → mix → encode in one call.

use tracing::info;

use crate::decode::decode_pair;
use crate::error::{AudioResult, InputSlot, MixingError};
use crate::gain::Gain;
use crate::mixer::{apply_fade, normalize, MixEngine, MixOptions};
use crate::wav::WavResult;

/// Encoded bytes of one input, with an optional format hint.
#[derive(Debug, Clone, Copy)]
pub struct SourceAudio<'a> {
    /// Encoded audio.
    pub bytes: &'a [u8],
    /// File extension used as a probe hint (e.g. `"mp3"`).
    pub extension: Option<&'a str>,
}

impl<'a> SourceAudio<'a> {
    /// Creates a source without a format hint.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            extension: None,
        }
    }

    /// Sets the format hint.
    pub fn with_extension(mut self, extension: &'a str) -> Self {
        self.extension = Some(extension);
        self
    }
}

/// Optional processing applied to the mix before encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PostProcess {
    /// Peak-normalize to this level.
    pub normalize_target: Option<f32>,
    /// Fade-in length in seconds.
    pub fade_in_secs: f64,
    /// Fade-out length in seconds.
    pub fade_out_secs: f64,
}

impl PostProcess {
    fn is_noop(&self) -> bool {
        self.normalize_target.is_none() && self.fade_in_secs <= 0.0 && self.fade_out_secs <= 0.0
    }
}

/// A complete mix request.
#[derive(Debug, Clone, Default)]
pub struct MixJob<'a> {
    /// First input.
    pub a: Option<SourceAudio<'a>>,
    /// Gain of the first input.
    pub gain_a: Gain,
    /// Second input.
    pub b: Option<SourceAudio<'a>>,
    /// Gain of the second input.
    pub gain_b: Gain,
    /// Mix options.
    pub options: MixOptions,
    /// Post-processing.
    pub post: PostProcess,
}

impl<'a> MixJob<'a> {
    /// Creates a job mixing `a` and `b` at the given gains.
    pub fn new(a: SourceAudio<'a>, gain_a: Gain, b: SourceAudio<'a>, gain_b: Gain) -> Self {
        Self {
            a: Some(a),
            gain_a,
            b: Some(b),
            gain_b,
            ..Default::default()
        }
    }

    /// Runs the job on a fresh render host.
    pub fn run(&self) -> AudioResult<WavResult> {
        self.run_with(&MixEngine::new(self.options))
    }

    /// Runs the job on `engine`. The job's own `options` are ignored.
    pub fn run_with(&self, engine: &MixEngine) -> AudioResult<WavResult> {
        let a = require(self.a, InputSlot::A)?;
        let b = require(self.b, InputSlot::B)?;

        let (buffer_a, buffer_b) = decode_pair(a.bytes, a.extension, b.bytes, b.extension)?;

        let mut mixed = engine.mix(&buffer_a, self.gain_a, &buffer_b, self.gain_b)?;

        if !self.post.is_noop() {
            if let Some(target) = self.post.normalize_target {
                normalize(&mut mixed, target);
            }
            let rate = mixed.sample_rate() as f64;
            let fade_in = (self.post.fade_in_secs.max(0.0) * rate).round() as usize;
            let fade_out = (self.post.fade_out_secs.max(0.0) * rate).round() as usize;
            apply_fade(&mut mixed, fade_in, fade_out);
        }

        let result = WavResult::from_buffer(&mixed)?;
        info!(
            bytes = result.len(),
            duration_secs = result.duration_seconds(),
            "encoded mix"
        );
        Ok(result)
    }
}

fn require(source: Option<SourceAudio<'_>>, slot: InputSlot) -> Result<SourceAudio<'_>, MixingError> {
    match source {
        Some(s) if !s.bytes.is_empty() => Ok(s),
        _ => Err(MixingError::MissingInput { slot }),
    }
}
