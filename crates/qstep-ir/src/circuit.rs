//! Circuit container and builder API.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::{Gate, GateOp, SingleQubitKind, TwoQubitKind};
use crate::qubit::QubitId;

/// Display name given to circuits that never set one.
pub const DEFAULT_NAME: &str = "Custom Circuit";

/// Description given to circuits that never set one.
pub const DEFAULT_DESCRIPTION: &str = "Circuit created from code";

/// An ordered list of gates over a fixed number of qubits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circuit {
    /// Display name.
    name: String,
    /// Display description.
    description: String,
    /// Width of the circuit.
    num_qubits: u32,
    /// Gates in execution order.
    gates: Vec<Gate>,
}

impl Circuit {
    /// Create an empty circuit with the default name and description.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            num_qubits,
            gates: vec![],
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the display description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append an operation without validating its operands.
    ///
    /// The gate's position is the number of gates already present plus one.
    pub fn push(&mut self, op: GateOp) -> &Gate {
        let position = self.next_position();
        self.gates.push(Gate::new(position, op));
        &self.gates[self.gates.len() - 1]
    }

    /// Append an operation after checking it against the circuit width.
    pub fn try_push(&mut self, op: GateOp) -> IrResult<&mut Self> {
        self.check_op(&op)?;
        self.push(op);
        Ok(self)
    }

    fn next_position(&self) -> u32 {
        u32::try_from(self.gates.len()).map_or(u32::MAX, |n| n.saturating_add(1))
    }

    // =========================================================================
    // Gate builders
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.try_push(GateOp::single(SingleQubitKind::H, qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.try_push(GateOp::single(SingleQubitKind::X, qubit))
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.try_push(GateOp::single(SingleQubitKind::Y, qubit))
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.try_push(GateOp::single(SingleQubitKind::Z, qubit))
    }

    /// Apply CNOT gate.
    pub fn cnot(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.try_push(GateOp::two(TwoQubitKind::Cnot, control, target))
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.try_push(GateOp::two(TwoQubitKind::Swap, q1, q2))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Gates in execution order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Number of gates.
    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    /// Whether the circuit has no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Highest qubit index referenced by any gate.
    pub fn max_qubit_index(&self) -> Option<u32> {
        self.gates
            .iter()
            .flat_map(Gate::qubits)
            .map(|q| q.0)
            .max()
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Check that the circuit is non-empty in width and that every gate
    /// operand lies in `[0, num_qubits)` with distinct two-qubit operands.
    pub fn validate(&self) -> IrResult<()> {
        if self.num_qubits == 0 {
            return Err(IrError::EmptyCircuit);
        }
        self.gates.iter().try_for_each(|g| self.check_op(&g.op))
    }

    fn check_op(&self, op: &GateOp) -> IrResult<()> {
        let gate = op.kind().name();
        for qubit in op.qubits() {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitOutOfRange {
                    gate: gate.to_string(),
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
        }
        if let GateOp::Two {
            control,
            target: Some(target),
            ..
        } = *op
        {
            if control == target {
                return Err(IrError::DuplicateQubit {
                    gate: gate.to_string(),
                    qubit: control,
                });
            }
        }
        Ok(())
    }

    // =========================================================================
    // Built-in circuits
    // =========================================================================

    /// Two-qubit Bell state: `H(0)`, `CNOT(0, 1)`.
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Circuit::new(2)
            .with_name("Bell State")
            .with_description("Creates a maximally entangled state |00⟩ + |11⟩");
        circuit.h(QubitId(0))?.cnot(QubitId(0), QubitId(1))?;
        Ok(circuit)
    }

    /// Three-qubit teleportation protocol.
    pub fn teleportation() -> IrResult<Self> {
        let mut circuit = Circuit::new(3)
            .with_name("Quantum Teleportation")
            .with_description("Protocol to transfer quantum state using entanglement");
        circuit
            .h(QubitId(1))?
            .cnot(QubitId(1), QubitId(2))?
            .cnot(QubitId(0), QubitId(1))?
            .h(QubitId(0))?
            .x(QubitId(1))?
            .z(QubitId(0))?;
        Ok(circuit)
    }

    /// Illustrative three-qubit Grover sequence.
    ///
    /// This is a fixed demonstration gate list, not a textbook Grover
    /// iteration.
    pub fn grover() -> IrResult<Self> {
        let mut circuit = Circuit::new(3)
            .with_name("Grover's Algorithm")
            .with_description("Quantum search algorithm for unstructured databases");
        let (q0, q1, q2) = (QubitId(0), QubitId(1), QubitId(2));
        circuit
            .h(q0)?
            .h(q1)?
            .h(q2)?
            .x(q0)?
            .x(q1)?
            .x(q2)?
            .h(q2)?
            .cnot(q0, q2)?
            .h(q2)?
            .x(q0)?
            .x(q1)?
            .x(q2)?
            .h(q0)?
            .h(q1)?
            .h(q2)?;
        Ok(circuit)
    }
}
