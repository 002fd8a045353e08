use crate::ast::Expression;
use crate::frontend::token::Token;

/// Declared representation of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Int,
    Float,
    String,
    Char,
    Bool,
}

impl StorageKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "intbox" => Some(StorageKind::Int),
            "floatbox" => Some(StorageKind::Float),
            "stringbox" => Some(StorageKind::String),
            "charbox" => Some(StorageKind::Char),
            "boolbox" => Some(StorageKind::Bool),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            StorageKind::Int => "intbox",
            StorageKind::Float => "floatbox",
            StorageKind::String => "stringbox",
            StorageKind::Char => "charbox",
            StorageKind::Bool => "boolbox",
        }
    }

    /// Data directive: dd is 4 bytes, dq 8 bytes, db 1 byte per element.
    pub fn directive(&self) -> &'static str {
        match self {
            StorageKind::Int => "dd",
            StorageKind::Float => "dq",
            StorageKind::String | StorageKind::Char | StorageKind::Bool => "db",
        }
    }

    pub fn zero_value(&self) -> &'static str {
        match self {
            StorageKind::Int => "0",
            StorageKind::Float => "0.0",
            StorageKind::String => "\"\", 0",
            StorageKind::Char | StorageKind::Bool => "0",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDecl {
    pub storage: Token,
    pub name: Token,
    pub assign: Option<Token>,
    pub initializer: Option<Expression>,
}

impl VarDecl {
    pub fn new(storage: Token, name: Token, assign: Option<Token>, initializer: Option<Expression>) -> Self {
        Self {
            storage,
            name,
            assign,
            initializer,
        }
    }

    pub fn storage_kind(&self) -> Option<StorageKind> {
        StorageKind::from_keyword(&self.storage.lexeme)
    }

    pub fn identifier(&self) -> &str {
        &self.name.lexeme
    }
}
