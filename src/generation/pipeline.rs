//! Render pipeline.
//!
//! Composes validation, synthesis and WAV encoding. Configuration is
//! checked for every sound before the first file is created, so a bad
//! entry never leaves files behind.

use std::path::Path;
use std::time::Instant;

use sha2::{Digest, Sha256};
use tracing::info;

use crate::audio::{samples_to_duration, write_wav};
use crate::config::RenderConfig;
use crate::error::{Result, SynthError};
use crate::synth::{synthesize_sound, RandomSource, RngSource, SynthesisParameters};
use crate::types::{compute_pcm_digest, RenderedSound, Sound};

/// Synthesizes one sound and writes it to `path`.
///
/// # Arguments
///
/// * `sound` - Preset to synthesize
/// * `params` - Validated sample rate and duration
/// * `path` - Output WAV path; created or overwritten
/// * `source` - Noise source; pass a seeded one for reproducible output
///
/// The source is opaque here, so the report's `seed` is always None. Use
/// [`render_seeded`] to have the seed recorded.
///
/// # Example
///
/// ```ignore
/// use cue_synth::generation::render_to_file;
///
/// let params = SynthesisParameters::new(44100, 0.08)?;
/// let report = render_to_file(
///     Sound::Click,
///     &params,
///     Path::new("public/click.wav"),
///     &mut RngSource::seeded(42),
/// )?;
/// assert_eq!(report.frames, 3528);
/// ```
pub fn render_to_file<S>(
    sound: Sound,
    params: &SynthesisParameters,
    path: &Path,
    source: &mut S,
) -> Result<RenderedSound>
where
    S: RandomSource + ?Sized,
{
    let start_time = Instant::now();

    let samples = synthesize_sound(sound, params, source);
    write_wav(&samples, path, params.sample_rate())?;

    let rendered = RenderedSound {
        sound,
        path: path.to_path_buf(),
        sample_rate: params.sample_rate(),
        frames: samples.len(),
        duration_sec: samples_to_duration(samples.len(), params.sample_rate()),
        seed: None,
        pcm_digest: compute_pcm_digest(&samples),
        render_time_sec: start_time.elapsed().as_secs_f32(),
    };

    info!(
        sound = sound.as_str(),
        path = %rendered.path.display(),
        frames = rendered.frames,
        digest = %rendered.pcm_digest,
        "Rendered in {:.3}s",
        rendered.render_time_sec
    );

    Ok(rendered)
}

/// Synthesizes one sound with a ChaCha noise stream and writes it to `path`.
///
/// With `Some(seed)` the output is reproducible and the report carries the
/// seed. With None the stream is seeded from OS entropy.
pub fn render_seeded(
    sound: Sound,
    params: &SynthesisParameters,
    path: &Path,
    seed: Option<u64>,
) -> Result<RenderedSound> {
    let mut source = RngSource::from_seed_option(seed);
    let mut rendered = render_to_file(sound, params, path, &mut source)?;
    rendered.seed = seed;
    Ok(rendered)
}

/// Renders every sound in `config`, in order.
///
/// Validates the whole config first. When `config.seed` is set each sound
/// gets its own stream derived from the base seed, so runs are byte-for-byte
/// reproducible and dropping one sound does not change the others.
pub fn render(config: &RenderConfig) -> Result<Vec<RenderedSound>> {
    config.validate()?;

    let mut rendered = Vec::with_capacity(config.sounds.len());
    for entry in &config.sounds {
        let params = entry.parameters(config.sample_rate)?;
        let seed = config.seed.map(|base| derive_sound_seed(base, entry.sound));
        rendered.push(render_seeded(
            entry.sound,
            &params,
            &config.output_path(entry),
            seed,
        )?);
    }

    Ok(rendered)
}

/// Creates the output directory (and parents) if it does not exist.
pub fn ensure_output_dir(config: &RenderConfig) -> Result<()> {
    std::fs::create_dir_all(&config.output_dir)
        .map_err(|e| SynthError::wav_write_failed(config.output_dir.display(), e))
}

/// Derives an independent seed for one sound from the base seed.
///
/// First 8 bytes (little-endian) of SHA256(`base_seed` LE bytes ++ sound name).
pub fn derive_sound_seed(base_seed: u64, sound: Sound) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(base_seed.to_le_bytes());
    hasher.update(sound.as_str().as_bytes());
    let hash = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash[..8]);
    u64::from_le_bytes(bytes)
}
