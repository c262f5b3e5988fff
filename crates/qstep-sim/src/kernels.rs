//! Gate kernels.
//!
//! Every kernel reads from the input slice and writes into a freshly
//! allocated vector, so the input is never observed half-updated. Paired
//! amplitudes are always both read before either output slot is written.

use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;
use tracing::warn;

use qstep_ir::{Gate, GateKind, GateOp, QubitId, SingleQubitKind, TwoQubitKind};

use crate::error::{SimError, SimResult};
use crate::state::{QuantumState, check_dimension};

/// Apply one circuit gate to a state, producing the next state.
///
/// A two-qubit gate without a target leaves the state unchanged.
pub fn apply_gate(state: &QuantumState, gate: &Gate) -> SimResult<QuantumState> {
    let amplitudes = state.amplitudes();
    let n = state.num_qubits();

    let next = match gate.op {
        GateOp::Single { kind, qubit } => match kind {
            SingleQubitKind::H => hadamard(amplitudes, n, qubit)?,
            SingleQubitKind::X => pauli_x(amplitudes, n, qubit)?,
            SingleQubitKind::Y => pauli_y(amplitudes, n, qubit)?,
            SingleQubitKind::Z => pauli_z(amplitudes, n, qubit)?,
        },
        GateOp::Two {
            kind,
            control,
            target: Some(target),
        } => match kind {
            TwoQubitKind::Cnot => cnot(amplitudes, n, control, target)?,
            TwoQubitKind::Swap => swap(amplitudes, n, control, target)?,
        },
        GateOp::Two { target: None, .. } => {
            warn!(gate = %gate, position = gate.position, "Gate has no target; skipping");
            return Ok(state.clone());
        }
    };

    QuantumState::from_amplitudes(next, n)
}

// =========================================================================
// Single-qubit kernels
// =========================================================================

/// Hadamard on `qubit`.
pub fn hadamard(
    amplitudes: &[Complex64],
    num_qubits: usize,
    qubit: QubitId,
) -> SimResult<Vec<Complex64>> {
    let mask = qubit_mask(amplitudes, num_qubits, qubit, GateKind::H)?;
    let mut out = amplitudes.to_vec();
    for i in 0..amplitudes.len() {
        if i & mask == 0 {
            let j = i | mask;
            let a = amplitudes[i];
            let b = amplitudes[j];
            out[i] = FRAC_1_SQRT_2 * (a + b);
            out[j] = FRAC_1_SQRT_2 * (a - b);
        }
    }
    Ok(out)
}

/// Pauli-X (NOT) on `qubit`.
pub fn pauli_x(
    amplitudes: &[Complex64],
    num_qubits: usize,
    qubit: QubitId,
) -> SimResult<Vec<Complex64>> {
    let mask = qubit_mask(amplitudes, num_qubits, qubit, GateKind::X)?;
    let mut out = amplitudes.to_vec();
    for i in 0..amplitudes.len() {
        if i & mask == 0 {
            out.swap(i, i | mask);
        }
    }
    Ok(out)
}

/// Pauli-Y on `qubit`: |0⟩ → i|1⟩, |1⟩ → -i|0⟩.
pub fn pauli_y(
    amplitudes: &[Complex64],
    num_qubits: usize,
    qubit: QubitId,
) -> SimResult<Vec<Complex64>> {
    let mask = qubit_mask(amplitudes, num_qubits, qubit, GateKind::Y)?;
    let mut out = amplitudes.to_vec();
    for i in 0..amplitudes.len() {
        if i & mask == 0 {
            let j = i | mask;
            let a = amplitudes[i];
            let b = amplitudes[j];
            // -i·b and i·a
            out[i] = Complex64::new(b.im, -b.re);
            out[j] = Complex64::new(-a.im, a.re);
        }
    }
    Ok(out)
}

/// Pauli-Z on `qubit`.
pub fn pauli_z(
    amplitudes: &[Complex64],
    num_qubits: usize,
    qubit: QubitId,
) -> SimResult<Vec<Complex64>> {
    let mask = qubit_mask(amplitudes, num_qubits, qubit, GateKind::Z)?;
    Ok(amplitudes
        .iter()
        .enumerate()
        .map(|(i, &a)| if i & mask != 0 { -a } else { a })
        .collect())
}

// =========================================================================
// Two-qubit kernels
// =========================================================================

/// Controlled-NOT: flips `target` on every basis state where `control` is 1.
pub fn cnot(
    amplitudes: &[Complex64],
    num_qubits: usize,
    control: QubitId,
    target: QubitId,
) -> SimResult<Vec<Complex64>> {
    let (ctrl_mask, tgt_mask) =
        pair_masks(amplitudes, num_qubits, control, target, GateKind::Cnot)?;
    Ok((0..amplitudes.len())
        .map(|i| {
            if i & ctrl_mask != 0 {
                amplitudes[i ^ tgt_mask]
            } else {
                amplitudes[i]
            }
        })
        .collect())
}

/// SWAP: exchanges the values of `q1` and `q2`.
pub fn swap(
    amplitudes: &[Complex64],
    num_qubits: usize,
    q1: QubitId,
    q2: QubitId,
) -> SimResult<Vec<Complex64>> {
    let (mask1, mask2) = pair_masks(amplitudes, num_qubits, q1, q2, GateKind::Swap)?;
    Ok((0..amplitudes.len())
        .map(|i| {
            let b1 = i & mask1 != 0;
            let b2 = i & mask2 != 0;
            if b1 == b2 {
                amplitudes[i]
            } else {
                amplitudes[i ^ mask1 ^ mask2]
            }
        })
        .collect())
}

// =========================================================================
// Operand checks
// =========================================================================

fn qubit_mask(
    amplitudes: &[Complex64],
    num_qubits: usize,
    qubit: QubitId,
    gate: GateKind,
) -> SimResult<usize> {
    check_dimension(amplitudes.len(), num_qubits)?;
    if qubit.index() >= num_qubits {
        return Err(SimError::QubitOutOfRange {
            qubit,
            num_qubits,
            gate: Some(gate),
        });
    }
    Ok(1 << qubit.index())
}

fn pair_masks(
    amplitudes: &[Complex64],
    num_qubits: usize,
    a: QubitId,
    b: QubitId,
    gate: GateKind,
) -> SimResult<(usize, usize)> {
    if a == b {
        return Err(SimError::DuplicateQubit { gate, qubit: a });
    }
    Ok((
        qubit_mask(amplitudes, num_qubits, a, gate)?,
        qubit_mask(amplitudes, num_qubits, b, gate)?,
    ))
}
