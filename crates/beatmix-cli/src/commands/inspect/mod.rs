//! Inspect command implementation
//!
//! Reads a WAV file and reports its format, length and PCM hash. The hash
//! covers sample data only, so two mixes with identical audio hash equal even
//! if their headers carry extra chunks.


use anyhow::Result;
use beatmix_audio::wav::compute_pcm_hash;
use beatmix_audio::WavHeader;
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use super::json_output::{error_codes, InspectOutput, InspectResult, JsonError};
use super::reporting::{format_duration, format_file_size};

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input)
    } else {
        run_human(input)
    }
}

/// Run inspect with human-readable (colored) output
fn run_human(input: &str) -> Result<ExitCode> {
    let info = inspect_file(input)?;

    println!("{} {}", "Inspecting:".cyan().bold(), info.file);
    println!(
        "  {} {}",
        "Format:".dimmed(),
        if info.format_tag == 1 {
            "PCM".to_string()
        } else {
            format!("tag {}", info.format_tag)
        }
    );
    println!("  {} {}", "Channels:".dimmed(), info.channels);
    println!("  {} {} Hz", "Sample rate:".dimmed(), info.sample_rate);
    println!("  {} {}", "Bit depth:".dimmed(), info.bits_per_sample);
    println!("  {} {}", "Samples:".dimmed(), info.num_samples);
    println!(
        "  {} {} ({:.3}s)",
        "Duration:".dimmed(),
        format_duration(info.duration_seconds),
        info.duration_seconds
    );
    println!("  {} {}", "Size:".dimmed(), format_file_size(info.size_bytes));
    match &info.pcm_hash {
        Some(hash) => println!("  {} {}", "PCM hash:".dimmed(), hash),
        None => println!("  {} {}", "PCM hash:".dimmed(), "(unavailable)".yellow()),
    }

    Ok(ExitCode::SUCCESS)
}

/// Run inspect with machine-readable JSON output
fn run_json(input: &str) -> Result<ExitCode> {
    let (output, code) = match inspect_file(input) {
        Ok(info) => (InspectOutput::success(info), ExitCode::SUCCESS),
        Err(error) => (InspectOutput::failure(vec![error]), ExitCode::from(1)),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}

/// Reads and describes a WAV file.
pub fn inspect_file(input: &str) -> Result<InspectResult, JsonError> {
    let data = fs::read(input).map_err(|e| {
        JsonError::new(error_codes::FILE_READ, format!("Failed to read file: {}", e))
            .with_file(input)
    })?;

    let header = WavHeader::parse(&data).ok_or_else(|| {
        JsonError::new(error_codes::INVALID_WAV, "Not a readable WAV file").with_file(input)
    })?;

    Ok(InspectResult {
        file: input.to_string(),
        format_tag: header.format_tag,
        channels: header.format.channels,
        sample_rate: header.format.sample_rate,
        bits_per_sample: header.format.bits_per_sample,
        num_samples: header.num_samples(),
        duration_seconds: header.duration_seconds(),
        size_bytes: data.len() as u64,
        pcm_hash: compute_pcm_hash(&data),
    })
}
