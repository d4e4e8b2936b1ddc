//! Core types for cue-synth.
//!
//! - [`Sound`]: The fixed cue presets
//! - [`RenderedSound`]: Report for a WAV file that has been written

mod rendered;
mod sound;

pub use rendered::{compute_pcm_digest, RenderedSound};
pub use sound::Sound;
