//! beatmix CLI - Command-line interface for two-track audio mixing
//!
//! This binary mixes a pair of audio files into a stereo 16-bit WAV file and
//! inspects the WAV files it produces.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;

use beatmix_cli::commands;
use beatmix_cli::commands::mix::MixArgs;
use beatmix_cli::logging;
use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Mix {
            a,
            b,
            gain_a,
            gain_b,
            output,
            output_dir,
            sample_rate,
            normalize,
            fade_in_ms,
            fade_out_ms,
            config,
            json,
        } => commands::mix::run(
            &MixArgs {
                a,
                b,
                gain_a,
                gain_b,
                output,
                output_dir,
                sample_rate,
                normalize,
                fade_in_ms,
                fade_out_ms,
                config,
            },
            json,
        ),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
