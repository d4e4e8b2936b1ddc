//! Mechanical click voice.
//!
//! A short transient: a sine sweeping down from 3 kHz toward 2 kHz, a
//! 400 Hz body resonance and a little noise, all under one fast
//! exponential decay.

use std::f64::consts::TAU;

/// Default click length in seconds.
pub const DURATION_SEC: f64 = 0.08;

const DECAY_RATE: f64 = 50.0;
const SWEEP_BASE_HZ: f64 = 2000.0;
const SWEEP_DEPTH_HZ: f64 = 1000.0;
const SWEEP_RATE: f64 = 100.0;
const BODY_HZ: f64 = 400.0;
const BODY_LEVEL: f64 = 0.3;
const NOISE_LEVEL: f64 = 0.1;
const OUTPUT_GAIN: f64 = 0.8;

/// Upper bound of `|raw(t, u)| / envelope(t)` when the noise is silent.
pub const PEAK_GAIN: f64 = (1.0 + BODY_LEVEL) * OUTPUT_GAIN;

/// Amplitude envelope: `exp(-50 t)`.
pub fn envelope(t: f64) -> f64 {
    (-t * DECAY_RATE).exp()
}

/// Instantaneous frequency of the attack sweep in Hz.
pub fn sweep_frequency(t: f64) -> f64 {
    SWEEP_BASE_HZ + SWEEP_DEPTH_HZ * (-t * SWEEP_RATE).exp()
}

/// Unquantized click amplitude at time `t`, with `u` the uniform noise draw.
pub fn raw(t: f64, u: f64) -> f64 {
    let env = envelope(t);
    let click = (TAU * sweep_frequency(t) * t).sin() * env;
    let body = (TAU * BODY_HZ * t).sin() * env * BODY_LEVEL;
    let noise = (u - 0.5) * NOISE_LEVEL * env;
    (click + body + noise) * OUTPUT_GAIN
}
