//! Render orchestration.
//!
//! Provides the pipeline from configuration to WAV files on disk.

pub mod pipeline;

// Re-export commonly used items
pub use pipeline::{derive_sound_seed, ensure_output_dir, render, render_seeded, render_to_file};
