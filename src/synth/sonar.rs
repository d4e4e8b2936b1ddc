//! Sonar ping voice: a decaying downward sweep followed by two echoes.

use std::f64::consts::TAU;

/// Default sonar length in seconds.
pub const DURATION_SEC: f64 = 1.2;

const PING_DECAY: f64 = 8.0;
const PING_HZ: f64 = 1200.0;
const PING_SWEEP_HZ_PER_SEC: f64 = 200.0;
const RUMBLE_HZ: f64 = 80.0;
const RUMBLE_LEVEL: f64 = 0.15;
const OUTPUT_GAIN: f64 = 0.7;

struct Echo {
    delay_sec: f64,
    hz: f64,
    decay: f64,
    level: f64,
}

const ECHOES: [Echo; 2] = [
    Echo {
        delay_sec: 0.15,
        hz: 1100.0,
        decay: 10.0,
        level: 0.4,
    },
    Echo {
        delay_sec: 0.3,
        hz: 1000.0,
        decay: 12.0,
        level: 0.2,
    },
];

/// Decay envelope of the main ping.
pub fn envelope(t: f64) -> f64 {
    (-t * PING_DECAY).exp()
}

fn echo(t: f64, tap: &Echo) -> f64 {
    if t <= tap.delay_sec {
        return 0.0;
    }
    let local = t - tap.delay_sec;
    (TAU * tap.hz * local).sin() * (-local * tap.decay).exp() * tap.level
}

/// Unquantized sonar amplitude at time `t`.
pub fn raw(t: f64) -> f64 {
    let decay = envelope(t);
    let ping = (TAU * (PING_HZ - PING_SWEEP_HZ_PER_SEC * t) * t).sin() * decay;
    let echoes: f64 = ECHOES.iter().map(|e| echo(t, e)).sum();
    let rumble = (TAU * RUMBLE_HZ * t).sin() * decay * RUMBLE_LEVEL;
    (ping + echoes + rumble) * OUTPUT_GAIN
}
