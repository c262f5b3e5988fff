//! Error types for the DSL parser.

use thiserror::Error;

/// Errors that can occur while parsing circuit source.
///
/// Malformed or unknown lines are not errors; they are skipped. These
/// variants cover the conditions the parser cannot recover from.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// An integer literal does not fit in a qubit index.
    #[error("Integer literal '{literal}' at line {line} is too large")]
    IntegerOverflow { line: usize, literal: String },

    /// The inferred qubit count cannot be represented.
    #[error("Qubit index {0} is too large to infer a circuit width")]
    WidthOverflow(u32),

    /// No built-in sample with this key.
    #[error("Unknown sample '{0}'. Available: bell, teleportation, grover")]
    UnknownSample(String),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
