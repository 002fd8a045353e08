use std::io;
use thiserror::Error;

/// Pipeline stage an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStage {
    Io,
    Lexical,
    Parse,
    Emission,
}

impl std::fmt::Display for ErrorStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorStage::Io => "io",
            ErrorStage::Lexical => "lexical analysis",
            ErrorStage::Parse => "parsing",
            ErrorStage::Emission => "code emission",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum KatError {
    // File and I/O errors
    #[error("File read error: {0}")]
    FileReadError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    // Lexical analysis errors
    #[error("Unknown token '{token}' at line {line}, column {column}")]
    UnknownToken {
        token: char,
        line: usize,
        column: usize,
    },
    #[error("Unterminated string literal starting at line {line}, column {column}")]
    UnterminatedString { line: usize, column: usize },
    #[error("Unterminated char literal starting at line {line}, column {column}")]
    UnterminatedChar { line: usize, column: usize },
    #[error("Unterminated multi-line comment starting at line {line}, column {column}")]
    UnterminatedComment { line: usize, column: usize },

    // Parsing errors
    #[error("Expected {expected} at line {line}, found '{found}'")]
    SyntaxError {
        expected: String,
        found: String,
        line: usize,
    },
    #[error("Expected {expected} at line {line}, found end of input")]
    UnexpectedEof { expected: String, line: usize },

    // Code emission errors
    #[error("Unsupported storage kind '{kind}' at line {line}")]
    UnsupportedStorageKind { kind: String, line: usize },
    #[error("Undefined symbol '{name}' at line {line}")]
    UndefinedSymbol { name: String, line: usize },
}

impl KatError {
    /// Create a syntax error
    pub fn syntax_error(expected: impl Into<String>, found: impl Into<String>, line: usize) -> Self {
        KatError::SyntaxError {
            expected: expected.into(),
            found: found.into(),
            line,
        }
    }

    pub fn unexpected_eof(expected: impl Into<String>, line: usize) -> Self {
        KatError::UnexpectedEof {
            expected: expected.into(),
            line,
        }
    }

    pub fn undefined_symbol(name: impl Into<String>, line: usize) -> Self {
        KatError::UndefinedSymbol {
            name: name.into(),
            line,
        }
    }

    pub fn stage(&self) -> ErrorStage {
        match self {
            KatError::FileReadError(_) | KatError::IoError(_) => ErrorStage::Io,
            KatError::UnknownToken { .. }
            | KatError::UnterminatedString { .. }
            | KatError::UnterminatedChar { .. }
            | KatError::UnterminatedComment { .. } => ErrorStage::Lexical,
            KatError::SyntaxError { .. }
            | KatError::UnexpectedEof { .. } => ErrorStage::Parse,
            KatError::UnsupportedStorageKind { .. }
            | KatError::UndefinedSymbol { .. } => ErrorStage::Emission,
        }
    }

    /// Source line the error points at, when there is one.
    pub fn line(&self) -> Option<usize> {
        match self {
            KatError::FileReadError(_) | KatError::IoError(_) => None,
            KatError::UnknownToken { line, .. }
            | KatError::UnterminatedString { line, .. }
            | KatError::UnterminatedChar { line, .. }
            | KatError::UnterminatedComment { line, .. }
            | KatError::SyntaxError { line, .. }
            | KatError::UnexpectedEof { line, .. }
            | KatError::UnsupportedStorageKind { line, .. }
            | KatError::UndefinedSymbol { line, .. } => Some(*line),
        }
    }
}

// Type alias for Result with KatError
pub type KatResult<T> = Result<T, KatError>;
