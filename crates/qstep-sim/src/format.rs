//! Human-readable rendering of statevectors.

use num_complex::Complex64;
use std::fmt::Write;

use crate::state::QuantumState;

/// Basis states at or below this probability are not listed.
pub const PROBABILITY_THRESHOLD: f64 = 0.001;

/// Returned when no basis state clears [`PROBABILITY_THRESHOLD`].
pub const NO_SIGNIFICANT_AMPLITUDES: &str = "No significant amplitudes";

/// Components smaller than this in magnitude are treated as zero.
const ZERO_TOLERANCE: f64 = 0.001;

/// Render a state in ket notation, one line per significant basis state.
///
/// ```text
/// |00⟩: 0.707 (50.0%)
/// |11⟩: 0.707 (50.0%)
/// ```
pub fn format_state(state: &QuantumState) -> String {
    let mut out = String::new();
    for (i, amplitude) in state.amplitudes().iter().enumerate() {
        let probability = amplitude.norm_sqr();
        if is_significant(probability) {
            let _ = writeln!(
                out,
                "|{}⟩: {} ({:.1}%)",
                state.basis_label(i),
                format_complex(*amplitude),
                probability * 100.0
            );
        }
    }

    if out.is_empty() {
        NO_SIGNIFICANT_AMPLITUDES.to_string()
    } else {
        out
    }
}

/// Whether a basis state with this probability is listed.
#[inline]
pub fn is_significant(probability: f64) -> bool {
    probability > PROBABILITY_THRESHOLD
}

/// Render a complex amplitude with three decimals, dropping near-zero parts.
pub fn format_complex(value: Complex64) -> String {
    let Complex64 { re, im } = value;
    let re_zero = re.abs() < ZERO_TOLERANCE;
    let im_zero = im.abs() < ZERO_TOLERANCE;

    match (re_zero, im_zero) {
        (true, true) => "0".to_string(),
        (_, true) => format!("{re:.3}"),
        (true, false) => format!("{im:.3}i"),
        (false, false) => {
            let sign = if im >= 0.0 { "+" } else { "" };
            format!("{re:.3}{sign}{im:.3}i")
        }
    }
}
