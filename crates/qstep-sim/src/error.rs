//! Error types for the simulator crate.

use qstep_ir::{GateKind, QubitId};
use thiserror::Error;

/// Errors produced while preparing or executing a simulation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// A qubit index the state does not have.
    #[error("{qubit} is out of range for a {num_qubits}-qubit state{}", format_gate_context(.gate))]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Width of the state.
        num_qubits: usize,
        /// Gate being applied, if any.
        gate: Option<GateKind>,
    },

    /// A two-qubit kernel received the same qubit twice.
    #[error("{gate} needs two distinct qubits, got {qubit} twice")]
    DuplicateQubit {
        /// Gate being applied.
        gate: GateKind,
        /// The repeated qubit.
        qubit: QubitId,
    },

    /// Amplitude vector length is not `2^num_qubits`.
    #[error("Amplitude vector of length {len} does not match {num_qubits} qubits")]
    DimensionMismatch {
        /// Declared width.
        num_qubits: usize,
        /// Actual vector length.
        len: usize,
    },

    /// Circuit is wider than the configured limit.
    #[error("Circuit has {requested} qubits but the simulator is limited to {max}")]
    TooManyQubits {
        /// Circuit width.
        requested: u32,
        /// Configured maximum.
        max: u32,
    },

    /// Execution was requested without a circuit.
    #[error("No valid circuit to execute")]
    NoCircuit,

    /// The run was cancelled before it finished.
    #[error("Execution cancelled after {completed_steps} steps")]
    Cancelled {
        /// Gates applied before the cancellation was observed.
        completed_steps: usize,
    },

    /// A trace step outside `0..=num_gates`.
    #[error("Step {step} is out of range (last step is {last})")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Last valid step.
        last: usize,
    },

    /// A result does not belong to the circuit it is paired with.
    #[error("Result has {states} intermediate states but circuit has {gates} gates")]
    TraceMismatch {
        /// Number of recorded intermediate states.
        states: usize,
        /// Number of gates in the circuit.
        gates: usize,
    },

    /// Circuit failed structural validation.
    #[error("Invalid circuit: {0}")]
    InvalidCircuit(#[from] qstep_ir::IrError),

    /// Circuit source could not be parsed.
    #[error("Failed to parse circuit: {0}")]
    Parse(#[from] qstep_dsl::ParseError),

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

#[allow(clippy::ref_option)]
fn format_gate_context(gate: &Option<GateKind>) -> String {
    match gate {
        Some(gate) => format!(" (gate: {gate})"),
        None => String::new(),
    }
}

/// Result type for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
