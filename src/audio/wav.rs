//! WAV file writer for rendered cues.
//!
//! Writes mono 16-bit PCM using the hound crate. For these specs hound
//! emits the canonical 44-byte header (plain `fmt ` chunk, PCM format 1).

use std::io::Cursor;
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{Result, SynthError};

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bits per sample (signed 16-bit PCM).
pub const BITS_PER_SAMPLE: u16 = 16;

/// Bytes per sample.
pub const SAMPLE_WIDTH_BYTES: u16 = BITS_PER_SAMPLE / 8;

/// Size of the RIFF/fmt/data header preceding the samples.
pub const HEADER_LEN: usize = 44;

/// Returns the hound spec for mono 16-bit PCM at `sample_rate`.
pub fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// Writes samples to a WAV file, creating or truncating `path`.
///
/// The file handle lives inside the writer and is closed on every return
/// path. On failure a truncated file may remain.
///
/// # Arguments
///
/// * `samples` - Mono 16-bit samples, one per frame
/// * `path` - Output file path; its parent directory must exist
/// * `sample_rate` - Sample rate in Hz
///
/// # Example
///
/// ```ignore
/// use cue_synth::audio::write_wav;
///
/// let samples = vec![0i16, 16384, -16384, 0];
/// write_wav(&samples, Path::new("/tmp/test.wav"), 44100)?;
/// ```
pub fn write_wav(samples: &[i16], path: &Path, sample_rate: u32) -> Result<()> {
    let mut writer = WavWriter::create(path, wav_spec(sample_rate))
        .map_err(|e| SynthError::wav_write_failed(path.display(), e))?;

    for &sample in samples {
        writer
            .write_sample(sample)
            .map_err(|e| SynthError::wav_write_failed(path.display(), e))?;
    }

    writer
        .finalize()
        .map_err(|e| SynthError::wav_write_failed(path.display(), e))?;

    Ok(())
}

/// Writes samples to an in-memory WAV buffer.
///
/// Returns the same bytes [`write_wav`] would put on disk.
pub fn write_wav_to_buffer(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(HEADER_LEN + samples.len() * SAMPLE_WIDTH_BYTES as usize);

    {
        let mut writer = WavWriter::new(Cursor::new(&mut buffer), wav_spec(sample_rate))
            .map_err(|e| SynthError::wav_write_failed("<memory>", e))?;

        for &sample in samples {
            writer
                .write_sample(sample)
                .map_err(|e| SynthError::wav_write_failed("<memory>", e))?;
        }

        writer
            .finalize()
            .map_err(|e| SynthError::wav_write_failed("<memory>", e))?;
    }

    Ok(buffer)
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: usize, sample_rate: u32) -> f64 {
    sample_count as f64 / sample_rate as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_wav_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.wav");

        let samples = vec![0i16, 16384, -16384, 0];
        write_wav(&samples, &path, 44100).unwrap();

        assert!(path.exists());

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, CHANNELS);
        assert_eq!(spec.sample_rate, 44100);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, SampleFormat::Int);

        let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(decoded, samples);
    }

    #[test]
    fn write_wav_file_size_is_header_plus_body() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("size.wav");

        write_wav(&[1i16; 100], &path, 8000).unwrap();

        let len = std::fs::metadata(&path).unwrap().len() as usize;
        assert_eq!(len, HEADER_LEN + 200);
    }

    #[test]
    fn write_wav_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("again.wav");

        write_wav(&[7i16; 1000], &path, 44100).unwrap();
        write_wav(&[7i16; 10], &path, 44100).unwrap();

        let len = std::fs::metadata(&path).unwrap().len() as usize;
        assert_eq!(len, HEADER_LEN + 20);
    }

    #[test]
    fn write_wav_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("test.wav");

        let err = write_wav(&[0i16], &path, 44100).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::WavWriteFailed);
        assert!(err.message.contains("test.wav"));
        assert!(!path.exists());
    }

    #[test]
    fn write_wav_to_buffer_matches_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("same.wav");
        let samples = vec![0i16, 100, -100, i16::MAX, i16::MIN];

        write_wav(&samples, &path, 22050).unwrap();
        let buffer = write_wav_to_buffer(&samples, 22050).unwrap();

        assert_eq!(&buffer[0..4], b"RIFF");
        assert_eq!(buffer, std::fs::read(&path).unwrap());
    }

    #[test]
    fn samples_are_little_endian_after_header() {
        let buffer = write_wav_to_buffer(&[0x1234, -2], 44100).unwrap();
        assert_eq!(&buffer[HEADER_LEN..], &[0x34, 0x12, 0xFE, 0xFF]);
    }

    #[test]
    fn header_declares_byte_rate_and_block_align() {
        let buffer = write_wav_to_buffer(&[0i16; 8], 44100).unwrap();
        // fmt chunk body starts at 20: tag, channels, rate, byte rate, align, bits
        assert_eq!(u16::from_le_bytes([buffer[20], buffer[21]]), 1);
        assert_eq!(u16::from_le_bytes([buffer[22], buffer[23]]), CHANNELS);
        assert_eq!(
            u32::from_le_bytes([buffer[28], buffer[29], buffer[30], buffer[31]]),
            88200
        );
        assert_eq!(u16::from_le_bytes([buffer[32], buffer[33]]), 2);
        assert_eq!(u16::from_le_bytes([buffer[34], buffer[35]]), BITS_PER_SAMPLE);
    }

    #[test]
    fn samples_to_duration_calculation() {
        assert_eq!(samples_to_duration(44100, 44100), 1.0);
        assert_eq!(samples_to_duration(22050, 44100), 0.5);
        assert_eq!(samples_to_duration(3528, 44100), 0.08);
    }
}
