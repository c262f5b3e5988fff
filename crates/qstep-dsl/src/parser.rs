//! Parser for the circuit DSL.
//!
//! The DSL is line oriented and deliberately lenient: each line is
//! classified on its own, and anything that is not a recognized directive or
//! gate call is skipped rather than reported.

use tracing::{debug, warn};

use qstep_ir::{Circuit, GateKind, GateOp, QubitId, SingleQubitKind, TwoQubitKind};

use crate::error::{ParseError, ParseResult};
use crate::lexer::{Token, tokenize_line};

/// A circuit-level setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `qubits <N>`
    Qubits(u32),
    /// `name "<text>"`
    Name(String),
    /// `description "<text>"`
    Description(String),
}

/// Classification of a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Empty or whitespace only.
    Blank,
    /// Starts with `//`.
    Comment,
    /// A circuit-level setting.
    Directive(Directive),
    /// A gate call.
    Gate(GateOp),
    /// Anything else. Skipped by [`parse`].
    Unrecognized,
}

/// Parse DSL source into a circuit.
///
/// Qubit count is the declared `qubits` value when present and non-zero,
/// otherwise the highest referenced qubit index plus one, and at least 1.
pub fn parse(source: &str) -> ParseResult<Circuit> {
    let mut declared_qubits: Option<u32> = None;
    let mut name: Option<String> = None;
    let mut description: Option<String> = None;
    let mut ops: Vec<GateOp> = Vec::new();

    for (idx, text) in source.lines().enumerate() {
        let line_no = idx + 1;
        match classify(line_no, text)? {
            Line::Blank | Line::Comment => {}
            Line::Directive(Directive::Qubits(n)) => declared_qubits = Some(n),
            Line::Directive(Directive::Name(s)) => name = Some(s),
            Line::Directive(Directive::Description(s)) => description = Some(s),
            Line::Gate(op) => ops.push(op),
            Line::Unrecognized => {
                debug!(line = line_no, text = text.trim(), "Skipping unrecognized line");
            }
        }
    }

    let max_index = ops.iter().flat_map(GateOp::qubits).map(|q| q.0).max();
    let num_qubits = match (declared_qubits, max_index) {
        (Some(n), _) if n > 0 => n,
        (_, Some(max)) => max
            .checked_add(1)
            .ok_or(ParseError::WidthOverflow(max))?,
        _ => 1,
    };

    if let Some(max) = max_index {
        if max >= num_qubits {
            warn!(
                num_qubits,
                max_index = max,
                "Circuit references qubits beyond its declared width"
            );
        }
    }

    let mut circuit = Circuit::new(num_qubits);
    if let Some(name) = name {
        circuit = circuit.with_name(name);
    }
    if let Some(description) = description {
        circuit = circuit.with_description(description);
    }
    for op in ops {
        circuit.push(op);
    }

    debug!(
        num_qubits = circuit.num_qubits(),
        num_gates = circuit.num_gates(),
        "Parsed circuit"
    );
    Ok(circuit)
}

/// Classify one line of source.
///
/// `line_no` is only used for error context.
pub fn classify(line_no: usize, text: &str) -> ParseResult<Line> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Line::Blank);
    }
    if trimmed.starts_with("//") {
        return Ok(Line::Comment);
    }
    let Some(tokens) = tokenize_line(trimmed) else {
        return Ok(Line::Unrecognized);
    };

    let line = match tokens.as_slice() {
        [Token::Identifier(kw), Token::IntLiteral(n)] if kw.eq_ignore_ascii_case("qubits") => {
            Line::Directive(Directive::Qubits(int_literal(line_no, n)?))
        }
        [Token::Identifier(kw), Token::StringLiteral(s)]
            if kw.eq_ignore_ascii_case("name") && !s.is_empty() =>
        {
            Line::Directive(Directive::Name(s.clone()))
        }
        [Token::Identifier(kw), Token::StringLiteral(s)]
            if kw.eq_ignore_ascii_case("description") && !s.is_empty() =>
        {
            Line::Directive(Directive::Description(s.clone()))
        }
        [
            Token::Identifier(mnemonic),
            Token::LParen,
            Token::IntLiteral(q),
            Token::RParen,
        ] => match single_qubit_kind(mnemonic) {
            Some(kind) => Line::Gate(GateOp::single(kind, QubitId(int_literal(line_no, q)?))),
            None => Line::Unrecognized,
        },
        [
            Token::Identifier(mnemonic),
            Token::LParen,
            Token::IntLiteral(a),
            Token::Comma,
            Token::IntLiteral(b),
            Token::RParen,
        ] => match two_qubit_kind(mnemonic) {
            Some(kind) => Line::Gate(GateOp::two(
                kind,
                QubitId(int_literal(line_no, a)?),
                QubitId(int_literal(line_no, b)?),
            )),
            None => Line::Unrecognized,
        },
        _ => Line::Unrecognized,
    };
    Ok(line)
}

fn int_literal(line_no: usize, literal: &str) -> ParseResult<u32> {
    literal.parse().map_err(|_| ParseError::IntegerOverflow {
        line: line_no,
        literal: literal.to_string(),
    })
}

fn single_qubit_kind(mnemonic: &str) -> Option<SingleQubitKind> {
    match GateKind::from_mnemonic(mnemonic)? {
        GateKind::H => Some(SingleQubitKind::H),
        GateKind::X => Some(SingleQubitKind::X),
        GateKind::Y => Some(SingleQubitKind::Y),
        GateKind::Z => Some(SingleQubitKind::Z),
        GateKind::Cnot | GateKind::Swap => None,
    }
}

fn two_qubit_kind(mnemonic: &str) -> Option<TwoQubitKind> {
    match GateKind::from_mnemonic(mnemonic)? {
        GateKind::Cnot => Some(TwoQubitKind::Cnot),
        GateKind::Swap => Some(TwoQubitKind::Swap),
        GateKind::H | GateKind::X | GateKind::Y | GateKind::Z => None,
    }
}
