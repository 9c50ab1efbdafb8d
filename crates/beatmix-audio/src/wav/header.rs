//! Reading WAV headers back out of encoded bytes.

use super::format::WavFormat;

/// Fields recovered from a RIFF/WAVE stream's `fmt ` and `data` chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// The RIFF chunk size (file length minus 8).
    pub riff_size: u32,
    /// Format tag (1 = integer PCM).
    pub format_tag: u16,
    /// Channel count, sample rate and bit depth.
    pub format: WavFormat,
    /// Declared bytes per second.
    pub byte_rate: u32,
    /// Declared bytes per frame.
    pub block_align: u16,
    /// Size of the data chunk in bytes.
    pub data_size: u32,
}

impl WavHeader {
    /// Parses the header of a RIFF/WAVE stream.
    ///
    /// Walks the chunk list, so `fmt ` and `data` need not sit at the canonical
    /// offsets. Returns None if either chunk is missing or truncated.
    pub fn parse(wav_data: &[u8]) -> Option<Self> {
        if wav_data.len() < 12 || &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
            return None;
        }
        let riff_size = read_u32(wav_data, 4)?;

        let mut fmt: Option<(u16, u16, u32, u32, u16, u16)> = None;
        let mut data_size = None;
        let mut pos = 12usize;

        while pos + 8 <= wav_data.len() && (fmt.is_none() || data_size.is_none()) {
            let chunk_id = &wav_data[pos..pos + 4];
            let chunk_size = read_u32(wav_data, pos + 4)?;
            let body = pos + 8;

            match chunk_id {
                b"fmt " if chunk_size >= 16 => {
                    fmt = Some((
                        read_u16(wav_data, body)?,
                        read_u16(wav_data, body + 2)?,
                        read_u32(wav_data, body + 4)?,
                        read_u32(wav_data, body + 8)?,
                        read_u16(wav_data, body + 12)?,
                        read_u16(wav_data, body + 14)?,
                    ));
                }
                b"data" => data_size = Some(chunk_size),
                _ => {}
            }

            pos = body.checked_add(chunk_size as usize)?;
            if chunk_size % 2 != 0 {
                pos += 1;
            }
        }

        let (format_tag, channels, sample_rate, byte_rate, block_align, bits_per_sample) = fmt?;
        Some(Self {
            riff_size,
            format_tag,
            format: WavFormat {
                channels,
                sample_rate,
                bits_per_sample,
            },
            byte_rate,
            block_align,
            data_size: data_size?,
        })
    }

    /// Samples per channel implied by the data chunk.
    pub fn num_samples(&self) -> usize {
        if self.block_align == 0 {
            return 0;
        }
        self.data_size as usize / self.block_align as usize
    }

    /// Duration in seconds implied by the data chunk.
    pub fn duration_seconds(&self) -> f64 {
        if self.format.sample_rate == 0 {
            return 0.0;
        }
        self.num_samples() as f64 / self.format.sample_rate as f64
    }
}

fn read_u16(bytes: &[u8], at: usize) -> Option<u16> {
    let b = bytes.get(at..at + 2)?;
    Some(u16::from_le_bytes([b[0], b[1]]))
}

fn read_u32(bytes: &[u8], at: usize) -> Option<u32> {
    let b = bytes.get(at..at + 4)?;
    Some(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}
