//! Lexer for a single DSL line.

use logos::Logos;
use std::fmt;

/// Tokens of the circuit DSL.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    // Literals
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    IntLiteral(String),

    #[regex(r#""[^"]*""#, |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_string()
    })]
    StringLiteral(String),

    // Keywords and gate mnemonics are both identifiers; the parser decides.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // Punctuation
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    #[regex(r"//[^\n]*")]
    Comment,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::IntLiteral(n) => write!(f, "{n}"),
            Token::StringLiteral(s) => write!(f, "\"{s}\""),
            Token::Identifier(s) => write!(f, "{s}"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Comment => write!(f, "//"),
        }
    }
}

/// Tokenize one line.
///
/// Returns `None` if the line contains a character the DSL has no token for;
/// such lines are never recognized by the parser.
pub fn tokenize_line(line: &str) -> Option<Vec<Token>> {
    Token::lexer(line).collect::<Result<Vec<_>, _>>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_call() {
        let tokens = tokenize_line("CNOT(0, 12)").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Identifier("CNOT".into()),
                Token::LParen,
                Token::IntLiteral("0".into()),
                Token::Comma,
                Token::IntLiteral("12".into()),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_string_literal_keeps_unicode() {
        let tokens = tokenize_line(r#"description "|00⟩ + |11⟩""#).unwrap();
        assert_eq!(tokens[1], Token::StringLiteral("|00⟩ + |11⟩".into()));
    }

    #[test]
    fn test_comment() {
        let tokens = tokenize_line("// Bell State Circuit").unwrap();
        assert_eq!(tokens, vec![Token::Comment]);
    }

    #[test]
    fn test_invalid_character() {
        assert!(tokenize_line("let x = 5;").is_none());
    }

    #[test]
    fn test_blank() {
        assert_eq!(tokenize_line("   \t").unwrap(), vec![]);
    }
}
