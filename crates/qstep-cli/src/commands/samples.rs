//! Samples command implementation.

use anyhow::Result;
use console::style;

use qstep_dsl::Sample;

/// Execute the samples command.
pub fn execute() -> Result<()> {
    println!("{} Bundled circuits:\n", style("QStep").cyan().bold());

    for sample in Sample::ALL {
        let circuit = sample.circuit()?;
        println!(
            "  {:<14} {} ({} qubits, {} gates)",
            style(sample.key()).green().bold(),
            circuit.name(),
            circuit.num_qubits(),
            circuit.num_gates()
        );
        println!("  {:<14} {}", "", style(circuit.description()).dim());
    }

    println!(
        "\nRun one with: {}",
        style("qstep run --sample <name>").cyan()
    );
    Ok(())
}
