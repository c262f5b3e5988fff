//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors raised when a circuit breaks its structural invariants.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum IrError {
    /// A gate references a qubit outside `[0, num_qubits)`.
    #[error("Gate '{gate}' references {qubit} but circuit only has {num_qubits} qubits")]
    QubitOutOfRange {
        /// DSL mnemonic of the offending gate.
        gate: String,
        /// The qubit that is out of range.
        qubit: QubitId,
        /// Width of the circuit.
        num_qubits: u32,
    },

    /// A two-qubit gate uses the same qubit twice.
    #[error("Gate '{gate}' uses {qubit} as both of its operands")]
    DuplicateQubit {
        /// DSL mnemonic of the offending gate.
        gate: String,
        /// The repeated qubit.
        qubit: QubitId,
    },

    /// Circuit declares zero qubits.
    #[error("Circuit must have at least one qubit")]
    EmptyCircuit,
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
