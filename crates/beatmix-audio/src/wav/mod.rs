//! Deterministic WAV encoding.
//!
//! This module writes canonical 16-bit PCM WAV files: a 44-byte RIFF header
//! followed by channel-interleaved little-endian samples. No timestamps or
//! variable metadata are written, so the same buffer always yields the same
//! bytes. The BLAKE3 hash of the PCM data identifies the audio content.

mod format;
mod header;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use format::WavFormat;
pub use header::WavHeader;
pub use pcm::{buffer_to_pcm16, compute_pcm_hash, extract_pcm_data, sample_to_pcm16};
pub use result::WavResult;
pub use writer::{encode_wav, wav_header, write_wav, WAV_HEADER_LEN};

/// MIME type of encoded output.
pub const WAV_CONTENT_TYPE: &str = "audio/wav";
