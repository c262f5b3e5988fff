//! QStep Circuit Representation
//!
//! Core data structures shared by the DSL front end and the statevector
//! simulator: qubit identifiers, the six supported gates, and the
//! [`Circuit`] container that orders them.
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use qstep_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new(2).with_name("Bell State");
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cnot(QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.num_gates(), 2);
//! assert_eq!(circuit.gates()[1].position, 2);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `CNOT` | 2 | Controlled-NOT |
//! | `SWAP` | 2 | SWAP gate |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;

pub use circuit::{Circuit, DEFAULT_DESCRIPTION, DEFAULT_NAME};
pub use error::{IrError, IrResult};
pub use gate::{Gate, GateKind, GateOp, SingleQubitKind, TwoQubitKind};
pub use qubit::QubitId;
