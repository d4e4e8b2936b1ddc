//! Sample synthesis.
//!
//! Each voice is a closed-form function of time. [`synthesize`] evaluates
//! the click voice once per frame and quantizes the result to 16-bit PCM;
//! [`synthesize_sound`] does the same for any [`Sound`] preset.

pub mod click;
pub mod noise;
pub mod notification;
pub mod params;
pub mod pcm;
pub mod sonar;

pub use noise::{FixedSource, RandomSource, RngSource};
pub use params::{SynthesisParameters, DEFAULT_SAMPLE_RATE};

use tracing::{debug, warn};

use crate::types::Sound;

/// Synthesizes the mechanical click.
///
/// Returns exactly `params.sample_count()` samples, drawing one noise
/// value from `source` per sample.
///
/// # Example
///
/// ```ignore
/// use cue_synth::synth::{synthesize, RngSource, SynthesisParameters};
///
/// let params = SynthesisParameters::new(44100, 0.08)?;
/// let samples = synthesize(&params, &mut RngSource::seeded(42));
/// assert_eq!(samples.len(), 3528);
/// ```
pub fn synthesize<S>(params: &SynthesisParameters, source: &mut S) -> Vec<i16>
where
    S: RandomSource + ?Sized,
{
    render_voice(params, |t| click::raw(t, source.next_unit()))
}

/// Synthesizes any preset sound.
///
/// Sonar is noiseless and leaves `source` untouched.
pub fn synthesize_sound<S>(sound: Sound, params: &SynthesisParameters, source: &mut S) -> Vec<i16>
where
    S: RandomSource + ?Sized,
{
    debug!(
        sound = sound.as_str(),
        samples = params.sample_count(),
        sample_rate = params.sample_rate(),
        "Synthesizing"
    );

    match sound {
        Sound::Click => synthesize(params, source),
        Sound::Notification => {
            let duration = params.duration_sec();
            render_voice(params, |t| notification::raw(t, duration, source.next_unit()))
        }
        Sound::Sonar => render_voice(params, sonar::raw),
    }
}

/// Evaluates `voice` at every frame time and quantizes the result.
fn render_voice<F>(params: &SynthesisParameters, mut voice: F) -> Vec<i16>
where
    F: FnMut(f64) -> f64,
{
    let count = params.sample_count();
    let mut samples = Vec::with_capacity(count);
    let mut clipped = 0usize;

    for i in 0..count {
        let amplitude = voice(params.time_at(i));
        if pcm::clips(amplitude) {
            clipped += 1;
        }
        samples.push(pcm::quantize(amplitude));
    }

    if clipped > 0 {
        warn!(clipped, total = count, "Samples saturated during quantization");
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts draws and returns a fixed value.
    struct CountingSource {
        value: f64,
        draws: usize,
    }

    impl RandomSource for CountingSource {
        fn next_unit(&mut self) -> f64 {
            self.draws += 1;
            self.value
        }
    }

    fn params(rate: u32, duration: f64) -> SynthesisParameters {
        SynthesisParameters::new(rate, duration).unwrap()
    }

    #[test]
    fn click_length_matches_sample_count() {
        for (rate, duration) in [(44100, 0.08), (48000, 0.08), (8000, 0.5), (22050, 0.0123)] {
            let p = params(rate, duration);
            let samples = synthesize(&p, &mut RngSource::seeded(1));
            assert_eq!(samples.len(), p.sample_count());
        }
    }

    #[test]
    fn default_click_has_3528_samples() {
        let samples = synthesize(&params(44100, 0.08), &mut RngSource::from_entropy());
        assert_eq!(samples.len(), 3528);
    }

    #[test]
    fn one_draw_per_click_sample() {
        let p = params(44100, 0.08);
        let mut source = CountingSource { value: 0.5, draws: 0 };
        synthesize(&p, &mut source);
        assert_eq!(source.draws, 3528);
    }

    #[test]
    fn sonar_draws_no_noise() {
        let p = params(44100, 0.1);
        let mut source = CountingSource { value: 0.5, draws: 0 };
        let samples = synthesize_sound(Sound::Sonar, &p, &mut source);
        assert_eq!(samples.len(), 4410);
        assert_eq!(source.draws, 0);
    }

    #[test]
    fn seeded_click_is_reproducible() {
        let p = params(44100, 0.08);
        let a = synthesize(&p, &mut RngSource::seeded(42));
        let b = synthesize(&p, &mut RngSource::seeded(42));
        assert_eq!(a, b);
    }

    #[test]
    fn noise_changes_output() {
        let p = params(44100, 0.08);
        let a = synthesize(&p, &mut RngSource::seeded(1));
        let b = synthesize(&p, &mut RngSource::seeded(2));
        assert_ne!(a, b);
    }

    #[test]
    fn silent_noise_is_deterministic_and_starts_at_zero() {
        let p = params(44100, 0.08);
        let a = synthesize(&p, &mut FixedSource::silent());
        let b = synthesize(&p, &mut FixedSource::silent());
        assert_eq!(a, b);
        assert_eq!(a[0], 0);
    }

    #[test]
    fn silent_click_respects_envelope_bound() {
        let p = params(44100, 0.08);
        let samples = synthesize(&p, &mut FixedSource::silent());
        for (i, &sample) in samples.iter().enumerate() {
            let t = p.time_at(i);
            // one LSB of slack for rounding
            let bound = click::PEAK_GAIN * click::envelope(t) * pcm::FULL_SCALE + 1.0;
            assert!((sample as f64).abs() <= bound, "i={}", i);
        }
    }

    #[test]
    fn click_peak_decays() {
        let p = params(44100, 0.08);
        let samples = synthesize(&p, &mut FixedSource::silent());
        let peak = |range: std::ops::Range<usize>| {
            samples[range].iter().map(|s| (*s as i32).abs()).max().unwrap()
        };
        let head = peak(0..882);
        let tail = peak(2646..3528);
        assert!(head > tail * 4, "head={} tail={}", head, tail);
    }

    #[test]
    fn overdriven_noise_saturates_without_wrapping() {
        // A source far outside [0, 1) pushes every sample past full scale.
        let p = params(44100, 0.01);
        let samples = synthesize(&p, &mut FixedSource(1.0e6));
        assert!(samples.iter().all(|&s| s == i16::MAX));

        let samples = synthesize(&p, &mut FixedSource(-1.0e6));
        assert!(samples.iter().all(|&s| s == i16::MIN));
    }

    #[test]
    fn every_preset_fills_its_default_length() {
        for sound in Sound::ALL {
            let p = params(44100, sound.default_duration());
            let samples = synthesize_sound(sound, &p, &mut RngSource::seeded(9));
            assert_eq!(samples.len(), p.sample_count(), "{}", sound);
            assert!(samples.iter().any(|&s| s != 0), "{} is silent", sound);
        }
    }

    #[test]
    fn click_preset_matches_synthesize() {
        let p = params(44100, 0.08);
        let direct = synthesize(&p, &mut RngSource::seeded(5));
        let preset = synthesize_sound(Sound::Click, &p, &mut RngSource::seeded(5));
        assert_eq!(direct, preset);
    }

    #[test]
    fn accepts_trait_objects() {
        let p = params(1000, 0.01);
        let mut source: Box<dyn RandomSource> = Box::new(FixedSource::silent());
        let samples = synthesize(&p, source.as_mut());
        assert_eq!(samples.len(), 10);
    }
}
