//! Audio decoding via Symphonia.
//!
//! Turns encoded bytes (WAV, MP3, FLAC, Ogg Vorbis, AAC/MP4) into a planar
//! [`AudioBuffer`] at the file's native sample rate. Rate reconciliation
//! happens later, in the render context.

use std::io::Cursor;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::{debug, warn};

use crate::buffer::AudioBuffer;
use crate::error::{AudioError, DecodeError, InputSlot};

/// Decodes a complete encoded stream.
///
/// `extension_hint` (e.g. `"mp3"`) helps the prober pick a format; detection
/// falls back to content sniffing without it.
pub fn decode_bytes(bytes: &[u8], extension_hint: Option<&str>) -> Result<AudioBuffer, DecodeError> {
    let mss = MediaSourceStream::new(Box::new(Cursor::new(bytes.to_vec())), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = extension_hint {
        hint.with_extension(ext);
    }

    let format_opts = FormatOptions {
        enable_gapless: true,
        ..Default::default()
    };
    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &format_opts, &MetadataOptions::default())
        .map_err(|e| DecodeError::UnsupportedFormat(e.to_string()))?;
    let mut reader = probed.format;

    // Find the first audio track
    let track = reader
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or(DecodeError::NoAudioTrack)?;
    let track_id = track.id;
    let codec_params = track.codec_params.clone();

    let mut sample_rate = codec_params.sample_rate;
    let mut num_channels = codec_params.channels.map(|c| c.count());

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| DecodeError::UnsupportedFormat(format!("codec init failed: {e}")))?;

    let mut interleaved: Vec<f32> = Vec::new();

    loop {
        let packet = match reader.next_packet() {
            Ok(p) => p,
            Err(SymphoniaError::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(DecodeError::Stream(e.to_string())),
        };

        // Skip packets that don't belong to our track
        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(SymphoniaError::DecodeError(msg)) => {
                warn!(error = %msg, "skipping corrupted audio packet");
                continue;
            }
            Err(e) => return Err(DecodeError::Stream(e.to_string())),
        };

        let spec = *decoded.spec();
        sample_rate.get_or_insert(spec.rate);
        num_channels.get_or_insert(spec.channels.count());

        if decoded.frames() == 0 {
            continue;
        }

        let mut sample_buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
        sample_buf.copy_interleaved_ref(decoded);
        interleaved.extend_from_slice(sample_buf.samples());
    }

    let sample_rate = sample_rate.ok_or(DecodeError::MissingParameter("sample rate"))?;
    let num_channels = num_channels.ok_or(DecodeError::MissingParameter("channel layout"))?;

    let buffer = AudioBuffer::from_interleaved(sample_rate, num_channels, &interleaved)
        .map_err(|e| DecodeError::Stream(e.to_string()))?;

    debug!(
        sample_rate,
        channels = num_channels,
        samples = buffer.len(),
        "decoded audio"
    );
    Ok(buffer)
}

/// Decodes both mix inputs, naming the one that failed.
pub fn decode_pair(
    a: &[u8],
    a_hint: Option<&str>,
    b: &[u8],
    b_hint: Option<&str>,
) -> Result<(AudioBuffer, AudioBuffer), AudioError> {
    let a = decode_bytes(a, a_hint).map_err(|e| AudioError::decode(InputSlot::A, e))?;
    let b = decode_bytes(b, b_hint).map_err(|e| AudioError::decode(InputSlot::B, e))?;
    Ok((a, b))
}
