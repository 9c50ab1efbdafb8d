//! JSON output types for machine-readable CLI output.
//!
//! Every command run with `--json` prints one envelope of the form
//! `{ "success": bool, "errors": [...], "result": {...} }` to stdout.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Format: CLI_XXX for CLI-level errors. Library failures pass through the
/// audio crate's own codes (`DECODE_xxx`, `MIX_xxx`, `WAV_xxx`, `BUF_xxx`).
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Input file type is not a supported audio type
    pub const UNSUPPORTED_FORMAT: &str = "CLI_002";
    /// Config file could not be loaded or is invalid
    pub const CONFIG: &str = "CLI_003";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_004";
    /// Command-line value out of range
    pub const INVALID_ARGUMENT: &str = "CLI_005";
    /// File is not a readable WAV
    pub const INVALID_WAV: &str = "CLI_006";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "DECODE_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}: {}", file, self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for JsonError {}

/// Output envelope shared by all commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Command result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> CommandOutput<T> {
    /// Creates a successful output.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Result of `beatmix mix`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixResult {
    /// Path of the written WAV file
    pub output_path: String,
    /// Content type of the output
    pub content_type: String,
    /// Output size in bytes
    pub size_bytes: u64,
    /// Number of output channels
    pub channels: u16,
    /// Output sample rate in Hz
    pub sample_rate: u32,
    /// Samples per channel
    pub num_samples: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Gain applied to input A, in percent
    pub gain_a_percent: u32,
    /// Gain applied to input B, in percent
    pub gain_b_percent: u32,
    /// BLAKE3 hash of the PCM data
    pub pcm_hash: String,
}

/// Result of `beatmix inspect`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectResult {
    /// Inspected file
    pub file: String,
    /// WAV format tag (1 = PCM)
    pub format_tag: u16,
    /// Number of channels
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Samples per channel
    pub num_samples: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// File size in bytes
    pub size_bytes: u64,
    /// BLAKE3 hash of the PCM data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
}

/// Mix command output.
pub type MixOutput = CommandOutput<MixResult>;

/// Inspect command output.
pub type InspectOutput = CommandOutput<InspectResult>;
