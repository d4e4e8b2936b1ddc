//! Validated synthesis parameters.

use crate::error::{Result, SynthError};

/// Default output sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Largest frame count whose mono 16-bit data chunk still fits the
/// 32-bit RIFF size fields (the RIFF size counts 36 header bytes too).
pub const MAX_SAMPLE_COUNT: usize = ((u32::MAX - 36) / 2) as usize;

/// Sample rate and length of a sound to synthesize.
///
/// Can only be built through [`SynthesisParameters::new`], so every value
/// in circulation yields at least one frame and fits in a WAV file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisParameters {
    sample_rate: u32,
    duration_sec: f64,
}

impl SynthesisParameters {
    /// Validates and creates synthesis parameters.
    ///
    /// # Errors
    ///
    /// - `INVALID_SAMPLE_RATE` if `sample_rate` is zero.
    /// - `INVALID_DURATION` if `duration_sec` is not finite, not positive,
    ///   shorter than one sample period, or too long for a WAV data chunk.
    pub fn new(sample_rate: u32, duration_sec: f64) -> Result<Self> {
        if sample_rate == 0 {
            return Err(SynthError::invalid_sample_rate(sample_rate));
        }

        if !duration_sec.is_finite() {
            return Err(SynthError::invalid_duration(duration_sec, "must be finite"));
        }

        if duration_sec <= 0.0 {
            return Err(SynthError::invalid_duration(duration_sec, "must be > 0"));
        }

        let frames = (sample_rate as f64 * duration_sec).floor();
        if frames < 1.0 {
            return Err(SynthError::invalid_duration(
                duration_sec,
                "shorter than one sample period",
            ));
        }

        if frames > MAX_SAMPLE_COUNT as f64 {
            return Err(SynthError::invalid_duration(
                duration_sec,
                "too long for a 16-bit WAV file",
            ));
        }

        Ok(Self {
            sample_rate,
            duration_sec,
        })
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Requested duration in seconds.
    pub fn duration_sec(&self) -> f64 {
        self.duration_sec
    }

    /// Number of frames to synthesize: `floor(sample_rate * duration_sec)`.
    pub fn sample_count(&self) -> usize {
        (self.sample_rate as f64 * self.duration_sec).floor() as usize
    }

    /// Time in seconds of the sample at `index`.
    pub fn time_at(&self, index: usize) -> f64 {
        index as f64 / self.sample_rate as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn click_defaults_give_3528_frames() {
        let params = SynthesisParameters::new(DEFAULT_SAMPLE_RATE, 0.08).unwrap();
        assert_eq!(params.sample_count(), 3528);
    }

    #[test]
    fn sample_count_is_floor_of_product() {
        let cases = [
            (8000, 0.5, 4000),
            (44100, 1.0, 44100),
            (48000, 0.25, 12000),
            (1000, 0.0015, 1),
            (3, 1.9, 5),
            (22050, 0.01, 220),
        ];
        for (rate, duration, expected) in cases {
            let params = SynthesisParameters::new(rate, duration).unwrap();
            assert_eq!(params.sample_count(), expected, "rate={} duration={}", rate, duration);
        }
    }

    #[test]
    fn rejects_zero_sample_rate() {
        let err = SynthesisParameters::new(0, 0.08).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSampleRate);
    }

    #[test]
    fn rejects_bad_durations() {
        for duration in [0.0, -0.08, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = SynthesisParameters::new(44100, duration).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidDuration, "duration={}", duration);
        }
    }

    #[test]
    fn rejects_duration_below_one_frame() {
        let err = SynthesisParameters::new(1000, 0.0005).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDuration);
    }

    #[test]
    fn rejects_oversized_duration() {
        let err = SynthesisParameters::new(44100, 1.0e6).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDuration);
    }

    #[test]
    fn time_at_index() {
        let params = SynthesisParameters::new(1000, 1.0).unwrap();
        assert_eq!(params.time_at(0), 0.0);
        assert_eq!(params.time_at(500), 0.5);
    }
}
