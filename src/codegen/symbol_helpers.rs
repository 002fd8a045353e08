use super::Emitter;
use crate::ast::StorageKind;
use crate::frontend::token::{Token, TokenKind};
use crate::utils::errors::{KatError, KatResult};

/// Storage location recorded for a declared identifier.
pub fn resolve_identifier(gen: &Emitter, token: &Token) -> KatResult<String> {
    gen.symbol_table
        .resolve(&token.lexeme)
        .map(str::to_string)
        .ok_or_else(|| KatError::undefined_symbol(token.lexeme.clone(), token.line))
}

/// Operand as it appears in a compare: storage for identifiers, 1/0 for booleans.
pub fn render_operand(gen: &Emitter, token: &Token) -> KatResult<String> {
    match token.kind {
        TokenKind::Identifier => resolve_identifier(gen, token),
        _ => Ok(constant_value(token)),
    }
}

/// `true`, `false` or a literal.
pub fn is_constant(token: &Token) -> bool {
    token.is_literal() || token.is_keyword("true") || token.is_keyword("false")
}

fn constant_value(token: &Token) -> String {
    if token.is_keyword("true") {
        "1".to_string()
    } else if token.is_keyword("false") {
        "0".to_string()
    } else {
        token.lexeme.clone()
    }
}

/// Data value for a declaration initialised with the constant `token`.
pub fn render_initializer(kind: StorageKind, token: &Token) -> String {
    match kind {
        StorageKind::Bool => {
            if token.is_keyword("true") {
                "1".to_string()
            } else {
                "0".to_string()
            }
        }
        StorageKind::Char if token.kind == TokenKind::CharLiteral => token.lexeme.clone(),
        StorageKind::Char => format!("'{}'", constant_value(token)),
        StorageKind::String if token.kind == TokenKind::StringLiteral => format!("{}, 0", token.lexeme),
        StorageKind::String => format!("\"{}\", 0", constant_value(token)),
        StorageKind::Int | StorageKind::Float => constant_value(token),
    }
}
