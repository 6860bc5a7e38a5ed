//! Host-tunable settings, loadable from TOML.
//!
//! Behavioural constants (radii, durations, search budgets) are not
//! configurable; they live next to the code that uses them.

use crate::fixed::Millis;
use serde::{Deserialize, Serialize};

/// Fastest allowed piece cadence.
pub const MIN_PIECE_STEP_MS: Millis = 50;

/// Default piece cadence: one move per second.
pub const DEFAULT_PIECE_STEP_MS: Millis = 1_000;

/// Errors from loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZooConfig {
    /// Seed of the simulation RNG.
    pub seed: u64,
    /// Milliseconds between piece steps. Clamped to [`MIN_PIECE_STEP_MS`].
    pub piece_step_ms: Millis,
    /// Whether pieces move from the start.
    pub simulation_active: bool,
}

impl Default for ZooConfig {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            piece_step_ms: DEFAULT_PIECE_STEP_MS,
            simulation_active: false,
        }
    }
}

impl ZooConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: ZooConfig = toml::from_str(source)?;
        Ok(config.normalized())
    }

    /// Apply the piece cadence floor.
    pub fn normalized(mut self) -> Self {
        self.piece_step_ms = clamp_piece_step(self.piece_step_ms);
        self
    }
}

/// Clamp a piece interval to the allowed floor.
pub fn clamp_piece_step(ms: Millis) -> Millis {
    ms.max(MIN_PIECE_STEP_MS)
}

/// Map a 0..=100 speed slider to a piece interval: 1050 ms at 0, 50 ms at
/// 100. Values above 100 saturate.
pub fn piece_step_from_slider(value: u8) -> Millis {
    let value = Millis::from(value.min(100));
    clamp_piece_step(1_050 - value * 10)
}
