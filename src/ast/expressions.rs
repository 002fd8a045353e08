use crate::frontend::token::{Token, TokenKind};
use std::fmt;

/// Flat operand/operator chain, kept as the tokens it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub tokens: Vec<Token>,
}

impl Expression {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn first(&self) -> Option<&Token> {
        self.tokens.first()
    }

    /// `operand operator operand`, when the chain is exactly that.
    pub fn as_binary(&self) -> Option<(&Token, &Token, &Token)> {
        match self.tokens.as_slice() {
            [left, op, right] if op.kind == TokenKind::Operator => Some((left, op, right)),
            _ => None,
        }
    }

    pub fn line(&self) -> usize {
        self.first().map_or(0, |t| t.line)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lexemes: Vec<&str> = self.tokens.iter().map(|t| t.lexeme.as_str()).collect();
        f.write_str(&lexemes.join(" "))
    }
}
