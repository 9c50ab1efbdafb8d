//! Linear gain scalars.

use crate::error::MixingError;

/// Default gain of the first input, in percent.
pub const DEFAULT_PRIMARY_PERCENT: u32 = 100;

/// Default gain of the second input, in percent.
pub const DEFAULT_SECONDARY_PERCENT: u32 = 80;

/// Largest gain the user-facing controls offer, in percent.
pub const MAX_PERCENT: u32 = 150;

/// A non-negative linear amplitude multiplier.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Gain(f32);

impl Gain {
    /// Passes samples through unchanged.
    pub const UNITY: Gain = Gain(1.0);

    /// Silences the source.
    pub const SILENT: Gain = Gain(0.0);

    /// Creates a gain. Negative and non-finite values are rejected.
    pub fn new(value: f32) -> Result<Self, MixingError> {
        if !value.is_finite() || value < 0.0 {
            return Err(MixingError::InvalidGain { value });
        }
        Ok(Self(value))
    }

    /// Creates a gain from a percentage (`100` is unity).
    pub fn from_percent(percent: f32) -> Result<Self, MixingError> {
        Self::new(percent / 100.0)
    }

    /// The multiplier.
    pub fn value(self) -> f32 {
        self.0
    }

    /// The multiplier as a percentage.
    pub fn percent(self) -> f32 {
        self.0 * 100.0
    }
}

impl Default for Gain {
    fn default() -> Self {
        Self::UNITY
    }
}
