pub mod lexer;
pub mod parser;
pub mod token;

pub use lexer::{scan, Lexer};
pub use parser::{parse, Parser};
pub use token::{Token, TokenKind};
