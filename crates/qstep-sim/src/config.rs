//! Simulator configuration.
//!
//! Values come from, in increasing precedence:
//! 1. Defaults
//! 2. A YAML file (`SimConfig::from_file`)
//! 3. Environment variables with the `QSTEP_` prefix

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::warn;

use crate::error::{SimError, SimResult};

/// Largest width a dense statevector is allowed to reach (16 GiB of amplitudes).
pub const HARD_QUBIT_LIMIT: u32 = 30;

/// Runtime settings for the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Pause between gates in the async driver, in milliseconds. Zero
    /// applies gates back to back.
    pub step_delay_ms: u64,

    /// Widest circuit the executor accepts.
    pub max_qubits: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 300,
            max_qubits: 20,
        }
    }
}

impl SimConfig {
    /// Defaults with no delay between gates.
    pub fn immediate() -> Self {
        Self {
            step_delay_ms: 0,
            ..Self::default()
        }
    }

    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> SimResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SimError::Config(format!("{}: {e}", path.display())))?;
        let config: SimConfig = serde_yaml_ng::from_str(&contents)
            .map_err(|e| SimError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `QSTEP_STEP_DELAY_MS` and `QSTEP_MAX_QUBITS` on top of `self`.
    ///
    /// Unparsable values are ignored with a warning.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(delay) = std::env::var("QSTEP_STEP_DELAY_MS") {
            match delay.parse() {
                Ok(val) => self.step_delay_ms = val,
                Err(_) => warn!(value = %delay, "Ignoring invalid QSTEP_STEP_DELAY_MS"),
            }
        }
        if let Ok(max) = std::env::var("QSTEP_MAX_QUBITS") {
            match max.parse() {
                Ok(val) => self.max_qubits = val,
                Err(_) => warn!(value = %max, "Ignoring invalid QSTEP_MAX_QUBITS"),
            }
        }
        self
    }

    /// Check that the settings are usable.
    pub fn validate(&self) -> SimResult<()> {
        if self.max_qubits == 0 || self.max_qubits > HARD_QUBIT_LIMIT {
            return Err(SimError::Config(format!(
                "max_qubits must be between 1 and {HARD_QUBIT_LIMIT}, got {}",
                self.max_qubits
            )));
        }
        Ok(())
    }

    /// The inter-gate pause.
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}
