//! Audio output module.
//!
//! Provides WAV file writing for rendered cues and header parsing to
//! verify what was written.

pub mod header;
pub mod wav;

// Re-export commonly used items
pub use header::{parse_header, read_wav_header, WavHeader};
pub use wav::{
    samples_to_duration, write_wav, write_wav_to_buffer, BITS_PER_SAMPLE, CHANNELS, HEADER_LEN,
    SAMPLE_WIDTH_BYTES,
};
