//! Error types for the audio core.
//!
//! Each stage of the mix has its own error enum so callers can tell a bad
//! upload apart from a mixing precondition or an encoding limit. [`AudioError`]
//! aggregates them for the end-to-end pipeline.

use std::fmt;

use thiserror::Error;

/// Result type for pipeline operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Identifies one of the two mix inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSlot {
    /// The first (primary) input.
    A,
    /// The second input.
    B,
}

impl fmt::Display for InputSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSlot::A => write!(f, "input A"),
            InputSlot::B => write!(f, "input B"),
        }
    }
}

/// Errors raised while constructing an [`AudioBuffer`](crate::buffer::AudioBuffer).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    /// Sample rate of zero.
    #[error("sample rate must be positive")]
    ZeroSampleRate,

    /// Channels of unequal length.
    #[error("channel {channel} has {found} samples, expected {expected}")]
    RaggedChannels {
        /// Index of the offending channel.
        channel: usize,
        /// Length of channel 0.
        expected: usize,
        /// Length of the offending channel.
        found: usize,
    },
}

impl BufferError {
    /// Stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            BufferError::ZeroSampleRate => "BUF_001",
            BufferError::RaggedChannels { .. } => "BUF_002",
        }
    }
}

/// Errors raised while decoding encoded audio bytes.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The container or codec was not recognized.
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),

    /// The container holds no decodable audio track.
    #[error("no audio track found")]
    NoAudioTrack,

    /// The stream is missing sample rate or channel information.
    #[error("missing stream parameter: {0}")]
    MissingParameter(&'static str),

    /// The stream failed mid-decode.
    #[error("decode failed: {0}")]
    Stream(String),
}

impl DecodeError {
    /// Stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            DecodeError::UnsupportedFormat(_) => "DECODE_001",
            DecodeError::NoAudioTrack => "DECODE_002",
            DecodeError::MissingParameter(_) => "DECODE_003",
            DecodeError::Stream(_) => "DECODE_004",
        }
    }
}

/// Errors raised by the mixing engine.
#[derive(Debug, Error, PartialEq)]
pub enum MixingError {
    /// An input was not supplied at all.
    #[error("{slot} is missing")]
    MissingInput {
        /// Which input.
        slot: InputSlot,
    },

    /// An input has no channels or no samples.
    #[error("{slot} is empty")]
    EmptyInput {
        /// Which input.
        slot: InputSlot,
    },

    /// Gain was negative or not finite.
    #[error("invalid gain {value}: must be a finite, non-negative number")]
    InvalidGain {
        /// The rejected value.
        value: f32,
    },

    /// No render context could be acquired.
    #[error("render context unavailable: {reason}")]
    ContextUnavailable {
        /// Why the host refused.
        reason: String,
    },
}

impl MixingError {
    /// Stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            MixingError::MissingInput { .. } => "MIX_001",
            MixingError::EmptyInput { .. } => "MIX_002",
            MixingError::InvalidGain { .. } => "MIX_003",
            MixingError::ContextUnavailable { .. } => "MIX_004",
        }
    }
}

/// Errors raised while serializing a WAV stream.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// The buffer has no channels.
    #[error("cannot encode a buffer with zero channels")]
    NoChannels,

    /// Too many channels for the 16-bit channel field.
    #[error("channel count {0} does not fit the WAV header")]
    TooManyChannels(usize),

    /// The data chunk would not fit the 32-bit size fields.
    #[error("encoded size overflows: {channels} channels x {samples} samples")]
    TooLarge {
        /// Channel count.
        channels: usize,
        /// Samples per channel.
        samples: usize,
    },

    /// I/O error while writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EncodingError {
    /// Stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            EncodingError::NoChannels => "WAV_001",
            EncodingError::TooManyChannels(_) => "WAV_002",
            EncodingError::TooLarge { .. } => "WAV_003",
            EncodingError::Io(_) => "WAV_004",
        }
    }
}

/// Any failure of the decode → mix → encode pipeline.
#[derive(Debug, Error)]
pub enum AudioError {
    /// One of the two inputs failed to decode.
    #[error("failed to decode {slot}: {source}")]
    Decode {
        /// Which input failed.
        slot: InputSlot,
        /// Underlying decoder error.
        #[source]
        source: DecodeError,
    },

    /// Mixing precondition or resource failure.
    #[error(transparent)]
    Mixing(#[from] MixingError),

    /// WAV serialization failure.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Malformed buffer.
    #[error(transparent)]
    Buffer(#[from] BufferError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates a decode error for the given input.
    pub fn decode(slot: InputSlot, source: DecodeError) -> Self {
        Self::Decode { slot, source }
    }

    /// Stable error code of the underlying failure.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::Decode { source, .. } => source.code(),
            AudioError::Mixing(e) => e.code(),
            AudioError::Encoding(e) => e.code(),
            AudioError::Buffer(e) => e.code(),
            AudioError::Io(_) => "AUDIO_001",
        }
    }

    /// Error category for grouping related errors.
    pub fn category(&self) -> &'static str {
        match self {
            AudioError::Decode { .. } => "decode",
            AudioError::Mixing(_) => "mixing",
            AudioError::Encoding(_) => "encoding",
            AudioError::Buffer(_) => "buffer",
            AudioError::Io(_) => "io",
        }
    }
}
