//! CLI argument definitions for the beatmix command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use beatmix_audio::gain::MAX_PERCENT;
use clap::{Parser, Subcommand};

/// beatmix - Two-track audio mixer
#[derive(Parser)]
#[command(name = "beatmix")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Mix two audio files into a stereo 16-bit WAV file
    Mix {
        /// Path to the first input (e.g. vocals)
        #[arg(short, long)]
        a: String,

        /// Path to the second input (e.g. instrumental)
        #[arg(short, long)]
        b: String,

        /// Gain of the first input in percent, 0-150 (default: 100)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_PERCENT as i64))]
        gain_a: Option<u32>,

        /// Gain of the second input in percent, 0-150 (default: 80)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_PERCENT as i64))]
        gain_b: Option<u32>,

        /// Output file path (default: <output-dir>/mixed-song-<timestamp>.wav)
        #[arg(short, long, conflicts_with = "output_dir")]
        output: Option<String>,

        /// Directory for the generated output file (default: current directory)
        #[arg(long)]
        output_dir: Option<String>,

        /// Output sample rate in Hz (default: the higher input rate)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        sample_rate: Option<u32>,

        /// Peak-normalize the mix (default level: 0.9)
        #[arg(long, num_args = 0..=1, default_missing_value = "0.9")]
        normalize: Option<f32>,

        /// Fade-in length in milliseconds
        #[arg(long)]
        fade_in_ms: Option<u64>,

        /// Fade-out length in milliseconds
        #[arg(long)]
        fade_out_ms: Option<u64>,

        /// Path to a mix config file (JSON)
        #[arg(short, long)]
        config: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show format, length and PCM hash of a WAV file
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}
