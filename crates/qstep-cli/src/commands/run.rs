//! Run command implementation.

use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::info;

use qstep_ir::Circuit;
use qstep_sim::{Executor, QuantumExecutionResult, QuantumState, format_state};

use super::common::{load_circuit, load_config, print_state};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable ket listing
    Text,
    /// Full result as JSON
    Json,
}

/// JSON document written by `--format json`.
#[derive(Serialize)]
struct RunReport<'a> {
    circuit: &'a Circuit,
    result: &'a QuantumExecutionResult,
}

/// Execute the run command.
pub async fn execute(
    input: Option<&str>,
    sample: Option<&str>,
    config_path: Option<&Path>,
    delay_ms: Option<u64>,
    format: OutputFormat,
    steps: bool,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(delay_ms) = delay_ms {
        config.step_delay_ms = delay_ms;
    }

    let circuit = load_circuit(input, sample)?;
    let text = format == OutputFormat::Text;

    if text {
        println!(
            "{} Running {} ({} qubits, {} gates)",
            style("→").cyan().bold(),
            style(circuit.name()).green(),
            circuit.num_qubits(),
            circuit.num_gates()
        );
    }

    let executor = Executor::new(config);

    // Ctrl-C stops the run before its next gate.
    let cancel = executor.cancel_handle();
    let watcher = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let progress = if text {
        progress_bar(circuit.num_gates() as u64)
    } else {
        ProgressBar::hidden()
    };

    let gates = circuit.gates();
    let outcome = executor
        .run(&circuit, |_: &QuantumState, step: usize| {
            progress.set_message(gates[step].to_string());
            progress.inc(1);
        })
        .await;
    watcher.abort();
    progress.finish_and_clear();

    let result = outcome?;
    info!(run_id = %result.run_id, "Run finished");

    match format {
        OutputFormat::Json => {
            let report = RunReport {
                circuit: &circuit,
                result: &result,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => print_text(&circuit, &result, steps),
    }

    Ok(())
}

const PROGRESS_TEMPLATE: &str = "{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}";

fn progress_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    if let Ok(bar_style) = ProgressStyle::default_bar().template(PROGRESS_TEMPLATE) {
        bar.set_style(bar_style.progress_chars("=> "));
    }
    bar
}

fn print_text(circuit: &Circuit, result: &QuantumExecutionResult, steps: bool) {
    if steps {
        println!("\n{}", style("Initial state:").bold());
        print_state(&format_state(&result.initial_state));

        for (gate, state) in circuit.gates().iter().zip(&result.intermediate_states) {
            println!(
                "\n{} {}",
                style(format!("Step {}:", gate.position)).bold(),
                style(gate).cyan()
            );
            print_state(&format_state(state));
        }
    }

    println!("\n{} Final state:", style("✓").green().bold());
    print_state(&format_state(&result.final_state));
    println!(
        "\n  Execution time: {} ms",
        style(format!("{:.3}", result.execution_time_ms)).yellow()
    );
}
