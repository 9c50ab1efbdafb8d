//! Mix command implementation
//!
//! Reads two audio files, mixes them at the requested gains and writes the
//! result as a 16-bit stereo WAV file.

use anyhow::Result;
use beatmix_audio::media::{is_valid_audio_type, mime_for_extension};
use beatmix_audio::{
    AudioError, Gain, InputSlot, MixJob, MixOptions, PostProcess, SourceAudio, WAV_CONTENT_TYPE,
};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

use crate::config::MixConfig;

use super::json_output::{error_codes, JsonError, MixOutput, MixResult};
use super::reporting::{format_duration, format_file_size};

/// Arguments of the mix command.
///
/// `None` fields fall back to the config file, then to built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct MixArgs {
    /// Path to input A (e.g. vocals)
    pub a: String,
    /// Path to input B (e.g. instrumental)
    pub b: String,
    /// Gain of input A in percent
    pub gain_a: Option<u32>,
    /// Gain of input B in percent
    pub gain_b: Option<u32>,
    /// Output file path
    pub output: Option<String>,
    /// Output directory for the generated file name
    pub output_dir: Option<String>,
    /// Output sample rate
    pub sample_rate: Option<u32>,
    /// Peak normalization level
    pub normalize: Option<f32>,
    /// Fade-in length in milliseconds
    pub fade_in_ms: Option<u64>,
    /// Fade-out length in milliseconds
    pub fade_out_ms: Option<u64>,
    /// Path to a JSON config file
    pub config: Option<String>,
}

/// Run the mix command
///
/// # Arguments
/// * `args` - Input paths, gains and processing options
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(args: &MixArgs, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(args)
    } else {
        run_human(args)
    }
}

/// Run mix with human-readable (colored) output
fn run_human(args: &MixArgs) -> Result<ExitCode> {
    println!("{}", "Mixing tracks:".cyan().bold());
    println!("  {} {}", "A:".dimmed(), args.a);
    println!("  {} {}", "B:".dimmed(), args.b);

    let result = mix_files(args)?;

    println!(
        "  {} {}% / {}%",
        "Gains:".dimmed(),
        result.gain_a_percent,
        result.gain_b_percent
    );
    println!(
        "\n{} {}",
        "Mix complete:".green().bold(),
        result.output_path
    );
    println!(
        "  {} {} ch, {} Hz, 16-bit",
        "Format:".dimmed(),
        result.channels,
        result.sample_rate
    );
    println!(
        "  {} {} ({} samples)",
        "Duration:".dimmed(),
        format_duration(result.duration_seconds),
        result.num_samples
    );
    println!(
        "  {} {}",
        "Size:".dimmed(),
        format_file_size(result.size_bytes)
    );
    println!("  {} {}", "PCM hash:".dimmed(), &result.pcm_hash[..16]);

    Ok(ExitCode::SUCCESS)
}

/// Run mix with machine-readable JSON output
fn run_json(args: &MixArgs) -> Result<ExitCode> {
    let (output, code) = match mix_files(args) {
        Ok(result) => (MixOutput::success(result), ExitCode::SUCCESS),
        Err(error) => (MixOutput::failure(vec![error]), ExitCode::from(1)),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}

/// Mixes the two input files and writes the output WAV.
pub fn mix_files(args: &MixArgs) -> Result<MixResult, JsonError> {
    let base = match &args.config {
        Some(path) => MixConfig::from_file(Path::new(path))
            .map_err(|e| JsonError::new(error_codes::CONFIG, format!("{:#}", e)).with_file(path))?,
        None => MixConfig::default(),
    };
    let settings = resolve_settings(args, base)?;

    let ext_a = audio_extension(&args.a)?;
    let ext_b = audio_extension(&args.b)?;
    let bytes_a = read_input(&args.a)?;
    let bytes_b = read_input(&args.b)?;

    let gain_a = percent_gain(settings.gain_a_percent)?;
    let gain_b = percent_gain(settings.gain_b_percent)?;

    let job = MixJob {
        a: Some(SourceAudio::new(&bytes_a).with_extension(ext_a)),
        gain_a,
        b: Some(SourceAudio::new(&bytes_b).with_extension(ext_b)),
        gain_b,
        options: MixOptions {
            sample_rate: settings.sample_rate,
        },
        post: PostProcess {
            normalize_target: settings.normalize_target,
            fade_in_secs: settings.fade_in_ms as f64 / 1000.0,
            fade_out_secs: settings.fade_out_ms as f64 / 1000.0,
        },
    };
    debug!(options = ?job.options, post = ?job.post, "running mix job");

    let wav = job.run().map_err(|e| audio_error(e, args))?;

    let output_path = match &args.output {
        Some(path) => PathBuf::from(path),
        None => settings
            .output_dir
            .join(default_output_name(chrono::Utc::now().timestamp_millis())),
    };
    write_output(&output_path, &wav.wav_data)?;
    info!(path = %output_path.display(), bytes = wav.len(), "wrote mix");

    Ok(MixResult {
        output_path: output_path.display().to_string(),
        content_type: WAV_CONTENT_TYPE.to_string(),
        size_bytes: wav.len() as u64,
        channels: wav.channels,
        sample_rate: wav.sample_rate,
        num_samples: wav.num_samples,
        duration_seconds: wav.duration_seconds(),
        gain_a_percent: settings.gain_a_percent,
        gain_b_percent: settings.gain_b_percent,
        pcm_hash: wav.pcm_hash,
    })
}

/// File name used when no explicit output path is given.
pub fn default_output_name(unix_millis: i64) -> String {
    format!("mixed-song-{}.wav", unix_millis)
}

/// Applies command-line overrides on top of the loaded config.
fn resolve_settings(args: &MixArgs, base: MixConfig) -> Result<MixConfig, JsonError> {
    let settings = MixConfig {
        gain_a_percent: args.gain_a.unwrap_or(base.gain_a_percent),
        gain_b_percent: args.gain_b.unwrap_or(base.gain_b_percent),
        sample_rate: args.sample_rate.or(base.sample_rate),
        normalize_target: args.normalize.or(base.normalize_target),
        fade_in_ms: args.fade_in_ms.unwrap_or(base.fade_in_ms),
        fade_out_ms: args.fade_out_ms.unwrap_or(base.fade_out_ms),
        output_dir: args
            .output_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or(base.output_dir),
    };
    settings
        .validate()
        .map_err(|e| JsonError::new(error_codes::INVALID_ARGUMENT, format!("{:#}", e)))?;
    Ok(settings)
}

/// Returns the file extension if it names a supported audio type.
fn audio_extension(path: &str) -> Result<&str, JsonError> {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    match mime_for_extension(ext).filter(|mime| is_valid_audio_type(mime)) {
        Some(_) => Ok(ext),
        None => Err(JsonError::new(
            error_codes::UNSUPPORTED_FORMAT,
            format!(
                "Invalid file type: {}",
                if ext.is_empty() { "(none)" } else { ext }
            ),
        )
        .with_file(path)),
    }
}

fn read_input(path: &str) -> Result<Vec<u8>, JsonError> {
    fs::read(path).map_err(|e| {
        JsonError::new(error_codes::FILE_READ, format!("Failed to read file: {}", e))
            .with_file(path)
    })
}

fn percent_gain(percent: u32) -> Result<Gain, JsonError> {
    Gain::from_percent(percent as f32).map_err(|e| JsonError::new(e.code(), e.to_string()))
}

fn write_output(path: &Path, data: &[u8]) -> Result<(), JsonError> {
    let to_error = |e: std::io::Error| {
        JsonError::new(
            error_codes::FILE_WRITE,
            format!("Failed to write output: {}", e),
        )
        .with_file(path.display().to_string())
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, data).map_err(to_error)
}

/// Converts a library error, attaching the path of the input it concerns.
fn audio_error(error: AudioError, args: &MixArgs) -> JsonError {
    let json = JsonError::new(error.code(), error.to_string());
    match &error {
        AudioError::Decode {
            slot: InputSlot::A,
            ..
        } => json.with_file(&args.a),
        AudioError::Decode {
            slot: InputSlot::B,
            ..
        } => json.with_file(&args.b),
        _ => json,
    }
}
