//! Gate types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::qubit::QubitId;

/// The six gates the simulator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    /// Hadamard gate.
    H,
    /// Pauli-X (NOT) gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Controlled-NOT gate.
    Cnot,
    /// SWAP gate.
    Swap,
}

impl GateKind {
    /// The mnemonic used in the circuit DSL.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            GateKind::H => "H",
            GateKind::X => "X",
            GateKind::Y => "Y",
            GateKind::Z => "Z",
            GateKind::Cnot => "CNOT",
            GateKind::Swap => "SWAP",
        }
    }

    /// Number of qubits the gate acts on.
    #[inline]
    pub fn num_qubits(self) -> u32 {
        match self {
            GateKind::H | GateKind::X | GateKind::Y | GateKind::Z => 1,
            GateKind::Cnot | GateKind::Swap => 2,
        }
    }

    /// Look up a gate by its exact DSL mnemonic.
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        match name {
            "H" => Some(GateKind::H),
            "X" => Some(GateKind::X),
            "Y" => Some(GateKind::Y),
            "Z" => Some(GateKind::Z),
            "CNOT" => Some(GateKind::Cnot),
            "SWAP" => Some(GateKind::Swap),
            _ => None,
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Single-qubit gate kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SingleQubitKind {
    H,
    X,
    Y,
    Z,
}

impl From<SingleQubitKind> for GateKind {
    fn from(kind: SingleQubitKind) -> Self {
        match kind {
            SingleQubitKind::H => GateKind::H,
            SingleQubitKind::X => GateKind::X,
            SingleQubitKind::Y => GateKind::Y,
            SingleQubitKind::Z => GateKind::Z,
        }
    }
}

/// Two-qubit gate kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TwoQubitKind {
    Cnot,
    Swap,
}

impl From<TwoQubitKind> for GateKind {
    fn from(kind: TwoQubitKind) -> Self {
        match kind {
            TwoQubitKind::Cnot => GateKind::Cnot,
            TwoQubitKind::Swap => GateKind::Swap,
        }
    }
}

/// The operation a gate performs and the qubits it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "arity", rename_all = "snake_case")]
pub enum GateOp {
    /// H, X, Y or Z on one qubit.
    Single {
        kind: SingleQubitKind,
        qubit: QubitId,
    },
    /// CNOT or SWAP. For CNOT `control` is the control qubit; for SWAP the
    /// two fields are simply the two swapped qubits.
    ///
    /// A missing `target` makes the gate a no-op at execution time.
    Two {
        kind: TwoQubitKind,
        control: QubitId,
        target: Option<QubitId>,
    },
}

impl GateOp {
    /// Single-qubit operation.
    pub fn single(kind: SingleQubitKind, qubit: QubitId) -> Self {
        GateOp::Single { kind, qubit }
    }

    /// Two-qubit operation with both operands present.
    pub fn two(kind: TwoQubitKind, control: QubitId, target: QubitId) -> Self {
        GateOp::Two {
            kind,
            control,
            target: Some(target),
        }
    }

    /// The gate kind.
    pub fn kind(&self) -> GateKind {
        match self {
            GateOp::Single { kind, .. } => (*kind).into(),
            GateOp::Two { kind, .. } => (*kind).into(),
        }
    }

    /// All qubits referenced by the operation, in operand order.
    pub fn qubits(&self) -> Vec<QubitId> {
        match *self {
            GateOp::Single { qubit, .. } => vec![qubit],
            GateOp::Two {
                control, target, ..
            } => std::iter::once(control).chain(target).collect(),
        }
    }
}

/// A gate placed in a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gate {
    /// 1-based column used for display ordering.
    pub position: u32,
    /// What the gate does.
    pub op: GateOp,
}

impl Gate {
    /// Create a gate at a given display position.
    pub fn new(position: u32, op: GateOp) -> Self {
        Self { position, op }
    }

    /// The gate kind.
    #[inline]
    pub fn kind(&self) -> GateKind {
        self.op.kind()
    }

    /// Qubits referenced by this gate.
    #[inline]
    pub fn qubits(&self) -> Vec<QubitId> {
        self.op.qubits()
    }
}

/// Renders the gate in DSL call syntax, e.g. `H(0)` or `CNOT(0, 1)`.
impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            GateOp::Single { qubit, .. } => write!(f, "{}({})", self.kind(), qubit.0),
            GateOp::Two {
                control,
                target: Some(target),
                ..
            } => write!(f, "{}({}, {})", self.kind(), control.0, target.0),
            GateOp::Two {
                control,
                target: None,
                ..
            } => write!(f, "{}({}, ?)", self.kind(), control.0),
        }
    }
}
