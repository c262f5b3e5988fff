//! Parse command implementation.

use anyhow::Result;
use console::style;

use super::common::{load_circuit, print_circuit_header};

/// Execute the parse command.
pub fn execute(input: Option<&str>, sample: Option<&str>, emit: bool) -> Result<()> {
    let circuit = load_circuit(input, sample)?;

    if emit {
        print!("{}", qstep_dsl::emit(&circuit));
        return Ok(());
    }

    println!("{} Parsed circuit\n", style("✓").green().bold());
    print_circuit_header(&circuit);

    if circuit.is_empty() {
        println!("\n  (no gates)");
        return Ok(());
    }

    println!();
    for gate in circuit.gates() {
        println!("  {:>4}  {}", style(gate.position).dim(), gate);
    }

    if let Err(e) = circuit.validate() {
        println!("\n{} {}", style("⚠").yellow().bold(), e);
    }

    Ok(())
}
