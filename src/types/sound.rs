//! Sound presets.

use serde::{Deserialize, Serialize};

use crate::synth::{click, notification, sonar};

/// One of the fixed cue sounds this crate can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sound {
    /// Short mechanical click (80 ms).
    Click,

    /// Radio-beep notification (400 ms).
    Notification,

    /// Sonar ping with two echoes (1.2 s).
    Sonar,
}

impl Sound {
    /// Every preset, in render order.
    pub const ALL: [Sound; 3] = [Sound::Click, Sound::Notification, Sound::Sonar];

    /// Returns the string representation of the sound.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sound::Click => "click",
            Sound::Notification => "notification",
            Sound::Sonar => "sonar",
        }
    }

    /// Length the preset was designed for, in seconds.
    pub fn default_duration(&self) -> f64 {
        match self {
            Sound::Click => click::DURATION_SEC,
            Sound::Notification => notification::DURATION_SEC,
            Sound::Sonar => sonar::DURATION_SEC,
        }
    }

    /// Default output file name, e.g. `click.wav`.
    pub fn file_name(&self) -> String {
        format!("{}.wav", self.as_str())
    }
}

impl std::fmt::Display for Sound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
