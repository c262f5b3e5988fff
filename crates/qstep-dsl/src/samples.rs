//! Built-in sample programs.

use std::fmt;
use std::str::FromStr;

use qstep_ir::Circuit;

use crate::error::{ParseError, ParseResult};
use crate::parser::parse;

const BELL: &str = r#"// Bell State Circuit
qubits 2
name "Bell State"
description "Creates a maximally entangled state |00⟩ + |11⟩"

H(0)
CNOT(0, 1)"#;

const TELEPORTATION: &str = r#"// Quantum Teleportation Circuit
qubits 3
name "Quantum Teleportation"
description "Protocol to transfer quantum state using entanglement"

H(1)
CNOT(1, 2)
CNOT(0, 1)
H(0)
X(1)
Z(0)"#;

// Illustrative gate list kept verbatim; it is not a textbook Grover iteration.
const GROVER: &str = r#"// Grover's Algorithm (simplified)
qubits 3
name "Grover's Algorithm"
description "Quantum search algorithm for unstructured databases"

H(0)
H(1)
H(2)
X(0)
X(1)
X(2)
H(2)
CNOT(0, 2)
H(2)
X(0)
X(1)
X(2)
H(0)
H(1)
H(2)"#;

/// A sample program shipped with the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sample {
    Bell,
    Teleportation,
    Grover,
}

impl Sample {
    /// Every sample, in display order.
    pub const ALL: [Sample; 3] = [Sample::Bell, Sample::Teleportation, Sample::Grover];

    /// Short lookup key.
    pub fn key(self) -> &'static str {
        match self {
            Sample::Bell => "bell",
            Sample::Teleportation => "teleportation",
            Sample::Grover => "grover",
        }
    }

    /// DSL source text.
    pub fn source(self) -> &'static str {
        match self {
            Sample::Bell => BELL,
            Sample::Teleportation => TELEPORTATION,
            Sample::Grover => GROVER,
        }
    }

    /// Parse the sample's source.
    pub fn circuit(self) -> ParseResult<Circuit> {
        parse(self.source())
    }
}

/// Lookup keys of every sample, in display order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    Sample::ALL.into_iter().map(Sample::key)
}

/// Source text of the sample named `key` (case-insensitive).
pub fn source(key: &str) -> ParseResult<&'static str> {
    Ok(key.parse::<Sample>()?.source())
}

/// Parsed circuit of the sample named `key` (case-insensitive).
pub fn circuit(key: &str) -> ParseResult<Circuit> {
    key.parse::<Sample>()?.circuit()
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Sample {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sample::ALL
            .into_iter()
            .find(|sample| sample.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownSample(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("bell".parse::<Sample>().unwrap(), Sample::Bell);
        assert_eq!("Grover".parse::<Sample>().unwrap(), Sample::Grover);
        assert!(matches!(
            "shor".parse::<Sample>(),
            Err(ParseError::UnknownSample(_))
        ));
    }

    #[test]
    fn test_keys_roundtrip() {
        for sample in Sample::ALL {
            assert_eq!(sample.key().parse::<Sample>().unwrap(), sample);
        }
    }

    #[test]
    fn test_key_functions() {
        assert_eq!(
            keys().collect::<Vec<_>>(),
            vec!["bell", "teleportation", "grover"]
        );
        assert_eq!(source("BELL").unwrap(), Sample::Bell.source());
        assert_eq!(circuit("grover").unwrap().num_gates(), 15);
        assert!(matches!(source("shor"), Err(ParseError::UnknownSample(_))));
        assert!(matches!(circuit("qft"), Err(ParseError::UnknownSample(_))));
    }
}
