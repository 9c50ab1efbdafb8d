//! Two-track mixing with independent gains.
//!
//! Sources are summed sample by sample into a fixed stereo buffer and hard
//! clipped to `[-1.0, 1.0]`. The shorter source is padded with silence.

mod engine;
#[allow(clippy::module_inception)]
mod mixer;
mod processing;
mod types;

#[cfg(test)]
mod tests_engine;
#[cfg(test)]
mod tests_mixer_basic;
#[cfg(test)]
mod tests_mixing;
#[cfg(test)]
mod tests_processing;

// Re-export public API
pub use engine::{mix, MixEngine, MixOptions};
pub use mixer::Mixer;
pub use processing::{apply_fade, hard_clip, hard_clip_buffer, normalize, DEFAULT_NORMALIZE_TARGET};
pub use types::{Track, OUTPUT_CHANNELS};
