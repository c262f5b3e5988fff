//! Statevector snapshots.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

use qstep_ir::QubitId;

use crate::config::HARD_QUBIT_LIMIT;
use crate::error::{SimError, SimResult};
use crate::format::format_state;

/// An immutable statevector snapshot.
///
/// Basis index `i` holds the amplitude of the classical assignment where
/// qubit `q` has value `(i >> q) & 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantumState {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl QuantumState {
    /// The all-zero basis state |0...0⟩.
    ///
    /// # Panics
    ///
    /// Panics if `num_qubits` exceeds [`HARD_QUBIT_LIMIT`]. Use
    /// [`try_zero`](Self::try_zero) for widths that come from input.
    pub fn zero(num_qubits: usize) -> Self {
        match Self::try_zero(num_qubits) {
            Ok(state) => state,
            Err(e) => panic!("{e}"),
        }
    }

    /// The all-zero basis state, or [`SimError::TooManyQubits`] when the
    /// width is past [`HARD_QUBIT_LIMIT`].
    pub fn try_zero(num_qubits: usize) -> SimResult<Self> {
        let too_many = || SimError::TooManyQubits {
            requested: u32::try_from(num_qubits).unwrap_or(u32::MAX),
            max: HARD_QUBIT_LIMIT,
        };
        if num_qubits > HARD_QUBIT_LIMIT as usize {
            return Err(too_many());
        }
        let size = u32::try_from(num_qubits)
            .ok()
            .and_then(|n| 1usize.checked_shl(n))
            .ok_or_else(too_many)?;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Wrap an amplitude vector, checking its length is `2^num_qubits`.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>, num_qubits: usize) -> SimResult<Self> {
        check_dimension(amplitudes.len(), num_qubits)?;
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of basis states.
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// All amplitudes, indexed by basis state.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Amplitude of one basis state.
    pub fn amplitude(&self, index: usize) -> Option<Complex64> {
        self.amplitudes.get(index).copied()
    }

    /// Measurement probability of every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Sum of squared magnitudes; 1 for a physical state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Probability that `qubit` reads 1.
    pub fn qubit_probability(&self, qubit: QubitId) -> SimResult<f64> {
        if qubit.index() >= self.num_qubits {
            return Err(SimError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
                gate: None,
            });
        }
        let mask = 1usize << qubit.index();
        Ok(self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i & mask != 0)
            .map(|(_, a)| a.norm_sqr())
            .sum())
    }

    /// Binary label of a basis index, highest qubit first, padded to the
    /// state width.
    pub fn basis_label(&self, index: usize) -> String {
        format!("{index:0width$b}", width = self.num_qubits)
    }

    /// Element-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &QuantumState, tolerance: f64) -> bool {
        self.num_qubits == other.num_qubits
            && self
                .amplitudes
                .iter()
                .zip(&other.amplitudes)
                .all(|(a, b)| (a - b).norm() <= tolerance)
    }
}

impl fmt::Display for QuantumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_state(self))
    }
}

/// Fails unless `len == 2^num_qubits`.
pub(crate) fn check_dimension(len: usize, num_qubits: usize) -> SimResult<()> {
    let expected = u32::try_from(num_qubits)
        .ok()
        .and_then(|n| 1usize.checked_shl(n));
    if expected == Some(len) {
        Ok(())
    } else {
        Err(SimError::DimensionMismatch { num_qubits, len })
    }
}
