//! Shared helpers for CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;
use tracing::debug;

use qstep_dsl::Sample;
use qstep_ir::Circuit;
use qstep_sim::SimConfig;

/// Load a circuit from a source file or a bundled sample.
pub fn load_circuit(input: Option<&str>, sample: Option<&str>) -> Result<Circuit> {
    match (input, sample) {
        (_, Some(key)) => {
            let sample: Sample = key.parse()?;
            Ok(sample.circuit()?)
        }
        (Some(path), None) => {
            if !Path::new(path).exists() {
                anyhow::bail!("File not found: {path}");
            }
            let source =
                fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;
            qstep_dsl::parse(&source).with_context(|| format!("Failed to parse circuit: {path}"))
        }
        (None, None) => anyhow::bail!("No circuit given. Pass a file or --sample"),
    }
}

/// Path of the per-user configuration file (~/.qstep/config.yaml).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".qstep").join("config.yaml"))
}

/// Resolve the simulator configuration.
///
/// An explicit path must exist. Otherwise the per-user file is read when
/// present. Environment overrides are applied last.
pub fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let config = match path {
        Some(path) => SimConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => {
                debug!(path = %path.display(), "Using default config file");
                SimConfig::from_file(&path)
                    .with_context(|| format!("Failed to load config: {}", path.display()))?
            }
            None => SimConfig::default(),
        },
    };

    let config = config.with_env_overrides();
    config.validate()?;
    Ok(config)
}

/// Print the header block describing a circuit.
pub fn print_circuit_header(circuit: &Circuit) {
    println!("  Name:        {}", style(circuit.name()).green().bold());
    println!("  Description: {}", circuit.description());
    println!(
        "  Qubits:      {}   Gates: {}",
        style(circuit.num_qubits()).yellow(),
        style(circuit.num_gates()).yellow()
    );
}

/// Print a formatted state indented under a heading.
pub fn print_state(state_text: &str) {
    for line in state_text.lines() {
        println!("  {line}");
    }
}
