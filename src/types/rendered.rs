//! Report describing one rendered WAV file.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::PathBuf;

use crate::synth::pcm;
use crate::types::Sound;

/// A sound that has been synthesized and written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedSound {
    /// Which preset was rendered.
    pub sound: Sound,

    /// Full filesystem path to the WAV file.
    pub path: PathBuf,

    /// Audio sample rate in Hz.
    pub sample_rate: u32,

    /// Number of frames written (mono, so also the sample count).
    pub frames: usize,

    /// Duration of the written audio in seconds.
    pub duration_sec: f64,

    /// Seed of the noise source, if the render was reproducible.
    pub seed: Option<u64>,

    /// 16 hex characters identifying the PCM payload.
    pub pcm_digest: String,

    /// Time taken to synthesize and write, in seconds.
    pub render_time_sec: f32,
}

/// Computes a digest of the PCM payload.
///
/// First 16 hex characters of the SHA256 of the little-endian sample bytes.
/// Two renders with the same digest wrote identical data chunks.
pub fn compute_pcm_digest(samples: &[i16]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(pcm::to_le_bytes(samples));
    let result = hasher.finalize();
    hex::encode(&result[..8])
}

/// Encode bytes as hex string.
mod hex {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    pub fn encode(bytes: &[u8]) -> String {
        let mut s = String::with_capacity(bytes.len() * 2);
        for &b in bytes {
            s.push(HEX_CHARS[(b >> 4) as usize] as char);
            s.push(HEX_CHARS[(b & 0xf) as usize] as char);
        }
        s
    }
}
