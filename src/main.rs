//! cue-synth: renders the UI cue sounds into `public/`.
//!
//! Takes no arguments. Set `RUST_LOG=debug` for per-sound synthesis detail.

use cue_synth::config::RenderConfig;
use cue_synth::error::Result;
use cue_synth::generation::{ensure_output_dir, render};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let config = RenderConfig::default();
    config.validate()?;

    info!(
        output_dir = %config.output_dir.display(),
        sample_rate = config.sample_rate,
        sounds = config.sounds.len(),
        "Rendering cue sounds"
    );

    ensure_output_dir(&config)?;
    let rendered = render(&config)?;

    let total_frames: usize = rendered.iter().map(|r| r.frames).sum();
    info!(files = rendered.len(), total_frames, "Done");

    Ok(())
}
