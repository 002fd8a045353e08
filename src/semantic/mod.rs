pub mod symboltable;

pub use symboltable::{Symbol, SymbolTable};
