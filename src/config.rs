//! Render configuration module.
//!
//! Describes which cue sounds to render, where to put them and how to seed
//! their noise. The core never resolves paths on its own: callers inject a
//! [`RenderConfig`], either built in code or loaded from JSON.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{ErrorCode, Result, SynthError};
use crate::synth::{SynthesisParameters, DEFAULT_SAMPLE_RATE};
use crate::types::Sound;

/// Default directory for rendered files, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// One sound to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundEntry {
    /// Which preset to synthesize.
    pub sound: Sound,

    /// Length in seconds. If None, uses the preset's default duration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_sec: Option<f64>,

    /// Output file name inside the output directory.
    /// If None, uses `<sound>.wav`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl SoundEntry {
    /// Creates an entry using the preset's defaults.
    pub fn preset(sound: Sound) -> Self {
        Self {
            sound,
            duration_sec: None,
            file_name: None,
        }
    }

    /// Returns the effective duration in seconds.
    pub fn effective_duration(&self) -> f64 {
        self.duration_sec
            .unwrap_or_else(|| self.sound.default_duration())
    }

    /// Returns the effective output file name.
    pub fn effective_file_name(&self) -> String {
        self.file_name
            .clone()
            .unwrap_or_else(|| self.sound.file_name())
    }

    /// Builds validated synthesis parameters for this entry.
    pub fn parameters(&self, sample_rate: u32) -> Result<SynthesisParameters> {
        SynthesisParameters::new(sample_rate, self.effective_duration())
    }
}

/// Configuration for a render run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Directory the WAV files are written into.
    pub output_dir: PathBuf,

    /// Sample rate in Hz shared by every sound.
    pub sample_rate: u32,

    /// Base seed for the noise sources.
    /// If None, every run draws fresh entropy and output differs between runs.
    pub seed: Option<u64>,

    /// Sounds to render, in order.
    pub sounds: Vec<SoundEntry>,
}

impl RenderConfig {
    /// Creates a RenderConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that renders a single preset into `output_dir`.
    pub fn single(sound: Sound, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            sounds: vec![SoundEntry::preset(sound)],
            ..Self::default()
        }
    }

    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            SynthError::with_source(
                ErrorCode::InvalidConfig,
                format!("Failed to parse render config: {}", e),
                e,
            )
        })
    }

    /// Loads a JSON config from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            SynthError::with_source(
                ErrorCode::InvalidConfig,
                format!("Failed to read render config {}: {}", path.display(), e),
                e,
            )
        })?;
        Self::from_json_str(&json)
    }

    /// Returns the full output path for an entry.
    pub fn output_path(&self, entry: &SoundEntry) -> PathBuf {
        self.output_dir.join(entry.effective_file_name())
    }

    /// Validates the configuration.
    ///
    /// Checks every sound's parameters and file name up front so that a
    /// bad entry is reported before any file is created.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(SynthError::invalid_sample_rate(self.sample_rate));
        }

        let mut seen = HashSet::new();
        for entry in &self.sounds {
            entry.parameters(self.sample_rate)?;

            let name = entry.effective_file_name();
            validate_file_name(&name)?;
            if !seen.insert(name.clone()) {
                return Err(SynthError::invalid_config(format!(
                    "Duplicate output file name: {}",
                    name
                )));
            }
        }

        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sample_rate: DEFAULT_SAMPLE_RATE,
            seed: None,
            sounds: Sound::ALL.iter().copied().map(SoundEntry::preset).collect(),
        }
    }
}

/// File names must be plain names, never paths.
fn validate_file_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(SynthError::invalid_config("Output file name cannot be empty"));
    }

    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(SynthError::invalid_config(format!(
            "Output file name must not be a path: {}",
            name
        )));
    }

    Ok(())
}
