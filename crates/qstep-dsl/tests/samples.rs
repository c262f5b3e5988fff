//! Sample programs must parse to the built-in circuits and survive emission.

use qstep_dsl::{Sample, emit, parse};
use qstep_ir::{Circuit, GateKind};

#[test]
fn sample_widths_and_gate_counts() {
    let expected = [
        (Sample::Bell, 2, 2),
        (Sample::Teleportation, 3, 6),
        (Sample::Grover, 3, 15),
    ];
    for (sample, qubits, gates) in expected {
        let circuit = sample.circuit().unwrap();
        assert_eq!(circuit.num_qubits(), qubits, "{sample}");
        assert_eq!(circuit.num_gates(), gates, "{sample}");
    }
}

#[test]
fn samples_match_literal_circuits() {
    assert_eq!(Sample::Bell.circuit().unwrap(), Circuit::bell().unwrap());
    assert_eq!(
        Sample::Teleportation.circuit().unwrap(),
        Circuit::teleportation().unwrap()
    );
    assert_eq!(Sample::Grover.circuit().unwrap(), Circuit::grover().unwrap());
}

#[test]
fn samples_survive_emit_and_reparse() {
    for sample in Sample::ALL {
        let circuit = sample.circuit().unwrap();
        let reparsed = parse(&emit(&circuit)).unwrap();
        assert_eq!(reparsed, circuit, "{sample}");
    }
}

#[test]
fn sample_metadata() {
    let bell = Sample::Bell.circuit().unwrap();
    assert_eq!(bell.name(), "Bell State");
    assert_eq!(
        bell.description(),
        "Creates a maximally entangled state |00⟩ + |11⟩"
    );

    let grover = Sample::Grover.circuit().unwrap();
    assert_eq!(grover.name(), "Grover's Algorithm");
}

#[test]
fn teleportation_gate_sequence() {
    let circuit = Sample::Teleportation.circuit().unwrap();
    let listing: Vec<String> = circuit.gates().iter().map(ToString::to_string).collect();
    assert_eq!(
        listing,
        ["H(1)", "CNOT(1, 2)", "CNOT(0, 1)", "H(0)", "X(1)", "Z(0)"]
    );
}

#[test]
fn grover_has_single_entangling_gate() {
    let circuit = Sample::Grover.circuit().unwrap();
    let cnots = circuit
        .gates()
        .iter()
        .filter(|g| g.kind() == GateKind::Cnot)
        .count();
    assert_eq!(cnots, 1);
    let last = circuit.gates().last().unwrap();
    assert_eq!(last.position, 15);
}
