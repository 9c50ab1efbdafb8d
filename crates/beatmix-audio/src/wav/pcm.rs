//! PCM conversion, extraction and hashing.

use crate::buffer::AudioBuffer;

/// Converts one float sample to a 16-bit PCM value.
///
/// Negative samples scale by 32768 and non-negative ones by 32767, so -1.0 and
/// 1.0 map to `i16::MIN` and `i16::MAX`. Out-of-range input saturates at the
/// `i16` bounds; NaN maps to 0.
#[inline]
pub fn sample_to_pcm16(sample: f32) -> i16 {
    let scaled = if sample < 0.0 {
        sample * 32768.0
    } else {
        sample * 32767.0
    };
    scaled.round() as i16
}

/// Converts a buffer to channel-interleaved little-endian 16-bit PCM bytes.
pub fn buffer_to_pcm16(buffer: &AudioBuffer) -> Vec<u8> {
    let channels = buffer.channels();
    let mut pcm = Vec::with_capacity(buffer.len() * channels.len() * 2);

    for i in 0..buffer.len() {
        for channel in channels {
            pcm.extend_from_slice(&sample_to_pcm16(channel[i]).to_le_bytes());
        }
    }

    pcm
}

/// Extracts PCM data from a WAV file buffer.
///
/// Used for comparing WAV files by their audio content only.
///
/// # Returns
/// PCM data if found, or None if the format is invalid
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 12 {
        return None;
    }

    // Verify RIFF header
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    // Find data chunk
    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        if chunk_id == b"data" {
            let data_start = pos + 8;
            let data_end = data_start.checked_add(chunk_size)?;
            return wav_data.get(data_start..data_end);
        }

        pos = pos.checked_add(8 + chunk_size)?;
        // Align to word boundary
        if chunk_size % 2 != 0 {
            pos += 1;
        }
    }

    None
}

/// Computes the PCM hash of a WAV file.
///
/// # Returns
/// BLAKE3 hash of PCM data, or None if format is invalid
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
