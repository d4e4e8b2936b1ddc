//! RIFF/WAVE header parsing.
//!
//! Walks the chunk list of a WAV byte buffer and reports what the header
//! declares. Used to verify rendered files without trusting the writer.

use std::path::Path;

use crate::error::{Result, SynthError};

/// `WAVE_FORMAT_PCM`.
pub const FORMAT_PCM: u16 = 1;

/// Header fields of a PCM WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Number of interleaved channels.
    pub channels: u16,
    /// Frames per second.
    pub sample_rate: u32,
    /// Declared bytes per second.
    pub byte_rate: u32,
    /// Declared bytes per frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Offset of the first sample byte.
    pub data_offset: usize,
    /// Length of the data chunk in bytes.
    pub data_len: u32,
}

impl WavHeader {
    /// Bytes per sample, rounded up.
    pub fn sample_width_bytes(&self) -> u16 {
        self.bits_per_sample.div_ceil(8)
    }

    /// Number of whole frames in the data chunk.
    pub fn frames(&self) -> usize {
        if self.block_align == 0 {
            return 0;
        }
        self.data_len as usize / self.block_align as usize
    }
}

fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Parses the header of a PCM WAV buffer.
///
/// # Errors
///
/// `INVALID_WAV` if the RIFF/WAVE magic is missing, the `fmt ` chunk is
/// absent or not PCM, the derived fields disagree, or the data chunk is
/// missing or runs past the end of the buffer.
pub fn parse_header(bytes: &[u8]) -> Result<WavHeader> {
    if bytes.len() < 12 || &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
        return Err(SynthError::invalid_wav("missing RIFF/WAVE signature"));
    }

    let mut fmt: Option<(u16, u32, u32, u16, u16)> = None;
    let mut pos = 12;

    while pos + 8 <= bytes.len() {
        let chunk_id = &bytes[pos..pos + 4];
        let chunk_size = read_u32(bytes, pos + 4) as usize;
        let body = pos + 8;

        if chunk_id == b"fmt " {
            if chunk_size < 16 || body + 16 > bytes.len() {
                return Err(SynthError::invalid_wav("fmt chunk too short"));
            }
            let format_tag = read_u16(bytes, body);
            if format_tag != FORMAT_PCM {
                return Err(SynthError::invalid_wav(format!(
                    "unsupported format tag {} (expected PCM)",
                    format_tag
                )));
            }
            fmt = Some((
                read_u16(bytes, body + 2),
                read_u32(bytes, body + 4),
                read_u32(bytes, body + 8),
                read_u16(bytes, body + 12),
                read_u16(bytes, body + 14),
            ));
        } else if chunk_id == b"data" {
            let (channels, sample_rate, byte_rate, block_align, bits_per_sample) =
                fmt.ok_or_else(|| SynthError::invalid_wav("data chunk before fmt chunk"))?;

            if body + chunk_size > bytes.len() {
                return Err(SynthError::invalid_wav(format!(
                    "data chunk declares {} bytes but only {} remain",
                    chunk_size,
                    bytes.len() - body
                )));
            }

            let header = WavHeader {
                channels,
                sample_rate,
                byte_rate,
                block_align,
                bits_per_sample,
                data_offset: body,
                data_len: chunk_size as u32,
            };
            check_consistency(&header)?;
            return Ok(header);
        }

        pos = body + chunk_size;
        // Chunks are word aligned
        if chunk_size % 2 == 1 {
            pos += 1;
        }
    }

    Err(SynthError::invalid_wav("no data chunk"))
}

fn check_consistency(header: &WavHeader) -> Result<()> {
    let expected_align = header.channels as u32 * header.sample_width_bytes() as u32;
    if header.block_align as u32 != expected_align {
        return Err(SynthError::invalid_wav(format!(
            "block align {} does not match {} channel(s) of {} bits",
            header.block_align, header.channels, header.bits_per_sample
        )));
    }

    let expected_rate = header.sample_rate as u64 * expected_align as u64;
    if header.byte_rate as u64 != expected_rate {
        return Err(SynthError::invalid_wav(format!(
            "byte rate {} does not match {} Hz x {} bytes",
            header.byte_rate, header.sample_rate, expected_align
        )));
    }

    Ok(())
}

/// Reads a WAV file and parses its header.
pub fn read_wav_header(path: &Path) -> Result<WavHeader> {
    let bytes = std::fs::read(path).map_err(|e| SynthError::wav_read_failed(path.display(), e))?;
    parse_header(&bytes)
}
