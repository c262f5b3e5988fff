//! Circuit DSL for QStep
//!
//! A small line-oriented language for writing circuits by hand, plus the
//! sample programs that ship with the simulator.
//!
//! # Syntax
//!
//! | Line | Meaning |
//! |------|---------|
//! | `qubits 3` | Declare the circuit width |
//! | `name "Bell State"` | Display name |
//! | `description "..."` | Display description |
//! | `H(0)`, `X(1)`, `Y(2)`, `Z(0)` | Single-qubit gate |
//! | `CNOT(0, 1)` | Controlled-NOT, control then target |
//! | `SWAP(0, 2)` | Swap two qubits |
//! | `// ...` | Comment |
//!
//! Directive keywords are case-insensitive. Any line that matches none of
//! the forms above is ignored.
//!
//! # Example
//!
//! ```rust
//! use qstep_dsl::{emit, parse};
//!
//! let circuit = parse("H(0)\nCNOT(0, 1)").unwrap();
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.name(), "Custom Circuit");
//!
//! let reparsed = parse(&emit(&circuit)).unwrap();
//! assert_eq!(reparsed, circuit);
//! ```

mod emitter;
mod error;
mod lexer;
mod parser;
pub mod samples;

pub use emitter::emit;
pub use error::{ParseError, ParseResult};
pub use parser::parse;
pub use samples::Sample;

/// Line-level view of the parser.
pub mod syntax {
    pub use crate::lexer::{Token, tokenize_line};
    pub use crate::parser::{Directive, Line, classify};
}
