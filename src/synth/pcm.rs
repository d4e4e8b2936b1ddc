//! Float-to-PCM16 quantization.

/// Scale applied to a unit-range amplitude before quantizing.
pub const FULL_SCALE: f64 = 32767.0;

/// Converts an amplitude to a signed 16-bit sample.
///
/// The value is scaled by [`FULL_SCALE`], rounded to the nearest integer
/// (halves away from zero) and then saturated to `[-32768, 32767]`.
/// Out-of-range values never wrap. NaN maps to 0.
pub fn quantize(amplitude: f64) -> i16 {
    let scaled = (amplitude * FULL_SCALE).round();
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(i16::MIN as f64, i16::MAX as f64) as i16
}

/// Returns true if [`quantize`] has to saturate this amplitude.
pub fn clips(amplitude: f64) -> bool {
    let scaled = (amplitude * FULL_SCALE).round();
    scaled > i16::MAX as f64 || scaled < i16::MIN as f64
}

/// Serializes samples as little-endian bytes, the layout of a WAV data chunk.
pub fn to_le_bytes(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}
