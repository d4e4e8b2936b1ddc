//! cue-synth: procedural UI cue sounds rendered to WAV.
//!
//! Synthesizes short interface sounds (a mechanical click, a radio-beep
//! notification and a sonar ping) from closed-form signal expressions and
//! writes them as mono 16-bit PCM WAV files.
//!
//! # Modules
//!
//! - [`synth`]: Sample synthesis, noise sources and quantization
//! - [`audio`]: WAV writing and header parsing
//! - [`generation`]: Render pipeline (validate, synthesize, write)
//! - [`types`]: Core data types (Sound, RenderedSound)
//! - [`config`]: Render configuration (RenderConfig, SoundEntry)
//! - [`error`]: Error types and codes (SynthError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use cue_synth::{
//!     generation::render_to_file,
//!     synth::{RngSource, SynthesisParameters},
//!     types::Sound,
//! };
//!
//! // 80 ms at 44.1 kHz = 3528 frames
//! let params = SynthesisParameters::new(44100, 0.08)?;
//! let report = render_to_file(
//!     Sound::Click,
//!     &params,
//!     Path::new("public/click.wav"),
//!     &mut RngSource::seeded(42), // reproducible noise
//! )?;
//! ```

pub mod audio;
pub mod config;
pub mod error;
pub mod generation;
pub mod synth;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use config::{RenderConfig, SoundEntry};
pub use error::{ErrorCode, ErrorKind, Result, SynthError};
pub use synth::{synthesize, FixedSource, RandomSource, RngSource, SynthesisParameters};
pub use types::{RenderedSound, Sound};
