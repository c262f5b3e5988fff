//! Emit circuits as DSL source.

use std::fmt::Write;

use qstep_ir::{Circuit, GateOp};

/// Render a circuit as canonical DSL text.
///
/// The output re-parses to an equal circuit as long as the name and
/// description are non-empty single-line strings without `"`, and every
/// two-qubit gate has a target. Values that cannot be expressed are left
/// out, and gates without a target become comments.
pub fn emit(circuit: &Circuit) -> String {
    let mut out = String::new();

    // Writing to a String is infallible.
    let _ = writeln!(out, "qubits {}", circuit.num_qubits());
    if let Some(name) = quoted(circuit.name()) {
        let _ = writeln!(out, "name {name}");
    }
    if let Some(description) = quoted(circuit.description()) {
        let _ = writeln!(out, "description {description}");
    }

    if !circuit.is_empty() {
        out.push('\n');
    }
    for gate in circuit.gates() {
        match gate.op {
            GateOp::Two { target: None, .. } => {
                let _ = writeln!(out, "// {gate} skipped: missing target");
            }
            _ => {
                let _ = writeln!(out, "{gate}");
            }
        }
    }
    out
}

fn quoted(text: &str) -> Option<String> {
    let representable = !text.is_empty() && !text.contains(['"', '\n', '\r']);
    representable.then(|| format!("\"{text}\""))
}
