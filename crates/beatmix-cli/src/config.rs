//! Mix configuration files.
//!
//! A config file is a JSON object; every field is optional. Command-line
//! flags override file values, and file values override the built-in
//! defaults.
//!
//! ```json
//! {
//!   "gain_a_percent": 100,
//!   "gain_b_percent": 70,
//!   "sample_rate": 48000,
//!   "normalize_target": 0.9,
//!   "fade_out_ms": 2000,
//!   "output_dir": "mixes"
//! }
//! ```

use anyhow::{Context, Result};
use beatmix_audio::gain::{DEFAULT_PRIMARY_PERCENT, DEFAULT_SECONDARY_PERCENT, MAX_PERCENT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for the `mix` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MixConfig {
    /// Gain of input A in percent (0-150).
    pub gain_a_percent: u32,
    /// Gain of input B in percent (0-150).
    pub gain_b_percent: u32,
    /// Output sample rate; the higher input rate when unset.
    pub sample_rate: Option<u32>,
    /// Peak-normalize the mix to this level (0-1).
    pub normalize_target: Option<f32>,
    /// Fade-in length in milliseconds.
    pub fade_in_ms: u64,
    /// Fade-out length in milliseconds.
    pub fade_out_ms: u64,
    /// Directory for generated output files.
    pub output_dir: PathBuf,
}

impl Default for MixConfig {
    fn default() -> Self {
        Self {
            gain_a_percent: DEFAULT_PRIMARY_PERCENT,
            gain_b_percent: DEFAULT_SECONDARY_PERCENT,
            sample_rate: None,
            normalize_target: None,
            fade_in_ms: 0,
            fade_out_ms: 0,
            output_dir: PathBuf::from("."),
        }
    }
}

impl MixConfig {
    /// Load and validate a config from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        check_percent("gain_a_percent", self.gain_a_percent)?;
        check_percent("gain_b_percent", self.gain_b_percent)?;
        if self.sample_rate == Some(0) {
            anyhow::bail!("sample_rate must be greater than zero");
        }
        if let Some(target) = self.normalize_target {
            if !(target > 0.0 && target <= 1.0) {
                anyhow::bail!("normalize_target must be in (0, 1], got {}", target);
            }
        }
        Ok(())
    }
}

fn check_percent(field: &str, value: u32) -> Result<()> {
    if value > MAX_PERCENT {
        anyhow::bail!("{} must be at most {}, got {}", field, MAX_PERCENT, value);
    }
    Ok(())
}
