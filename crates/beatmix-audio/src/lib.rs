//! beatmix audio core
//!
//! Mixes two audio tracks into one stereo buffer and encodes it as a
//! canonical 16-bit PCM WAV file.
//!
//! # Overview
//!
//! A mix runs in three stages:
//!
//! - **Decode** - encoded bytes become planar f32 [`AudioBuffer`]s
//! - **Mix** - both buffers are brought to one sample rate, scaled by their
//!   [`Gain`], summed into two channels and hard clipped to `[-1, 1]`
//! - **Encode** - the stereo buffer is written as `44 + N*S*2` bytes of WAV
//!
//! The mixed length is `ceil(max(duration_a, duration_b) * rate)`; the shorter
//! input is padded with silence.
//!
//! # Determinism
//!
//! Mixing and encoding are pure functions of their inputs. The encoder writes
//! no timestamps, so the same buffer always yields byte-identical output.
//!
//! # Example
//!
//! ```ignore
//! use beatmix_audio::{Gain, MixJob, SourceAudio};
//!
//! let vocals = std::fs::read("vocals.mp3")?;
//! let beat = std::fs::read("beat.wav")?;
//!
//! let job = MixJob::new(
//!     SourceAudio::new(&vocals).with_extension("mp3"),
//!     Gain::from_percent(100.0)?,
//!     SourceAudio::new(&beat).with_extension("wav"),
//!     Gain::from_percent(80.0)?,
//! );
//! let result = job.run()?;
//! std::fs::write("mixed.wav", &result.wav_data)?;
//! ```
//!
//! # Crate Structure
//!
//! - [`buffer`] - Planar sample buffers
//! - [`gain`] - Gain scalars
//! - [`decode`] - Symphonia-backed decoding
//! - [`context`] - Scoped render contexts
//! - [`resample`] - Sample rate conversion
//! - [`mixer`] - Two-track mixing, clipping and post-processing
//! - [`wav`] - Deterministic WAV encoding and header parsing
//! - [`pipeline`] - Decode, mix and encode in one call
//! - [`media`] - Upload media type checks

pub mod buffer;
pub mod context;
pub mod decode;
pub mod error;
pub mod gain;
pub mod media;
pub mod mixer;
pub mod pipeline;
pub mod resample;
pub mod wav;

// Re-export main types at crate root
pub use buffer::AudioBuffer;
pub use context::{RenderContext, RenderHost};
pub use decode::{decode_bytes, decode_pair};
pub use error::{
    AudioError, AudioResult, BufferError, DecodeError, EncodingError, InputSlot, MixingError,
};
pub use gain::Gain;
pub use mixer::{mix, MixEngine, MixOptions};
pub use pipeline::{MixJob, PostProcess, SourceAudio};
pub use wav::{encode_wav, WavHeader, WavResult, WAV_CONTENT_TYPE};
