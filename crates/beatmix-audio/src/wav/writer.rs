//! Core WAV writing.

use std::io::Write;

use tracing::debug;

use crate::buffer::AudioBuffer;
use crate::error::EncodingError;

use super::format::WavFormat;
use super::pcm::buffer_to_pcm16;

/// Length of the canonical RIFF/WAVE header.
pub const WAV_HEADER_LEN: usize = 44;

/// Builds the 44-byte header for `data_size` bytes of PCM.
pub fn wav_header(format: &WavFormat, data_size: u32) -> [u8; WAV_HEADER_LEN] {
    // Total file size minus 8 bytes for RIFF header
    let file_size = 36u32.wrapping_add(data_size);

    let mut header = [0u8; WAV_HEADER_LEN];
    // RIFF header
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&file_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    // fmt chunk
    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes()); // Chunk size (16 for PCM)
    header[20..22].copy_from_slice(&1u16.to_le_bytes()); // Audio format (1 = PCM)
    header[22..24].copy_from_slice(&format.channels.to_le_bytes());
    header[24..28].copy_from_slice(&format.sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&format.byte_rate().to_le_bytes());
    header[32..34].copy_from_slice(&format.block_align().to_le_bytes());
    header[34..36].copy_from_slice(&format.bits_per_sample.to_le_bytes());

    // data chunk
    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());
    header
}

/// Size of the data chunk for `channels` x `samples`, if it fits the 32-bit size fields.
pub(crate) fn data_size(channels: usize, samples: usize) -> Result<u32, EncodingError> {
    let too_large = || EncodingError::TooLarge { channels, samples };
    let bytes = channels
        .checked_mul(samples)
        .and_then(|n| n.checked_mul(2))
        .ok_or_else(too_large)?;
    let size = u32::try_from(bytes).map_err(|_| too_large())?;
    // RIFF size field holds 36 + data size
    if size > u32::MAX - 36 || bytes > usize::MAX - WAV_HEADER_LEN {
        return Err(too_large());
    }
    Ok(size)
}

/// Writes `buffer` as a complete WAV stream.
pub fn write_wav<W: Write>(writer: &mut W, buffer: &AudioBuffer) -> Result<(), EncodingError> {
    let format = WavFormat::for_buffer(buffer)?;
    let size = data_size(buffer.num_channels(), buffer.len())?;

    writer.write_all(&wav_header(&format, size))?;
    writer.write_all(&buffer_to_pcm16(buffer))?;
    Ok(())
}

/// Encodes `buffer` into WAV bytes.
///
/// The result is exactly `44 + channels * samples * 2` bytes long.
pub fn encode_wav(buffer: &AudioBuffer) -> Result<Vec<u8>, EncodingError> {
    let format = WavFormat::for_buffer(buffer)?;
    let size = data_size(buffer.num_channels(), buffer.len())?;

    let mut wav = Vec::with_capacity(WAV_HEADER_LEN + size as usize);
    wav.extend_from_slice(&wav_header(&format, size));
    wav.extend_from_slice(&buffer_to_pcm16(buffer));

    debug!(
        channels = format.channels,
        sample_rate = format.sample_rate,
        bytes = wav.len(),
        "encoded wav"
    );
    Ok(wav)
}
