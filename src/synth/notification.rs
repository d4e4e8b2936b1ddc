//! Radio-beep notification voice.
//!
//! An 1800 Hz beep with a slight vibrato layer, mains hum and static,
//! shaped by a linear attack/sustain/release envelope.

use std::f64::consts::TAU;

/// Default notification length in seconds.
pub const DURATION_SEC: f64 = 0.4;

const ATTACK_SEC: f64 = 0.02;
const RELEASE_SEC: f64 = 0.05;
const BEEP_HZ: f64 = 1800.0;
const BEEP_LEVEL: f64 = 0.6;
const STATIC_LEVEL: f64 = 0.15;
const HUM_HZ: f64 = 120.0;
const HUM_LEVEL: f64 = 0.05;
const WOBBLE_HZ: f64 = 8.0;
const WOBBLE_DEPTH: f64 = 0.02;
const FM_LEVEL: f64 = 0.1;

/// Linear attack, flat sustain, linear release ending at `duration`.
pub fn envelope(t: f64, duration: f64) -> f64 {
    if t < ATTACK_SEC {
        t / ATTACK_SEC
    } else if t > duration - RELEASE_SEC {
        ((duration - t) / RELEASE_SEC).max(0.0)
    } else {
        1.0
    }
}

/// Unquantized notification amplitude at time `t`.
pub fn raw(t: f64, duration: f64, u: f64) -> f64 {
    let env = envelope(t, duration);
    let beep = (TAU * BEEP_HZ * t).sin() * env * BEEP_LEVEL;
    let static_noise = (u - 0.5) * STATIC_LEVEL * env;
    let hum = (TAU * HUM_HZ * t).sin() * env * HUM_LEVEL;
    let wobble = (TAU * WOBBLE_HZ * t).sin() * WOBBLE_DEPTH;
    let fm_beep = (TAU * BEEP_HZ * t * (1.0 + wobble)).sin() * env * FM_LEVEL;
    beep + static_noise + hum + fm_beep
}
